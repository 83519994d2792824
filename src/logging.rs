use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level for a number of `-v` flags.
pub fn level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity count.
pub fn init_tracing(verbosity: u64) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level(verbosity);
        EnvFilter::new(format!("warn,searcher={0},terrain={0},trailblazer={0}", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
