#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::info;

use std::fmt;
use std::fs::File;
use std::io;
use std::io::Read;
use std::str::FromStr;

use searcher::{
    Algorithm, Color, Graph, Graphable, Heuristic, Path, Traversal, VertexId, ZeroHeuristic,
};
use terrain::{Euclidean, Grid, Manhattan, Point};

pub mod input;
mod logging;

type Error = anyhow::Error;

lazy_static! {
    static ref ALGORITHMS: Vec<&'static str> = Algorithm::all().map(Algorithm::name).collect();
}

const HEURISTICS: &[&str] = &["zero", "manhattan", "euclidean"];

/// Distance estimate used by A* on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Zero,
    Manhattan,
    Euclidean,
}

impl FromStr for HeuristicKind {
    type Err = TrailblazerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(HeuristicKind::Zero),
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            _ => Err(TrailblazerError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// What to search for, and how.
#[derive(Debug, Clone)]
pub struct Options {
    pub algorithm: Algorithm,
    pub from: String,
    pub to: String,
    pub grid: bool,
    pub heuristic: Option<HeuristicKind>,
    pub render: bool,
}

impl Options {
    pub fn new(algorithm: Algorithm, from: &str, to: &str) -> Self {
        Self {
            algorithm,
            from: from.to_string(),
            to: to.to_string(),
            grid: false,
            heuristic: None,
            render: false,
        }
    }
}

/// The outcome of a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub from: String,
    pub to: String,
    pub labels: Vec<String>,
    pub cost: f64,
    pub finalized: usize,
    pub rendered: Option<String>,
}

impl Report {
    pub fn found(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn edges(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(rendered) = &self.rendered {
            write!(f, "{}", rendered)?;
        }

        if !self.found() {
            writeln!(f, "No path from {} to {}", self.from, self.to)?;
        } else {
            writeln!(f, "{}", self.labels.join(" -> "))?;
            writeln!(f, "Cost: {}", self.cost)?;
            writeln!(f, "Edges: {}", self.edges())?;
        }
        write!(f, "Finalized: {}", self.finalized)
    }
}

/// Run one search over the input from `reader`.
pub fn run<R: Read>(options: &Options, mut reader: R) -> Result<Report, Error> {
    if let Some(kind) = options.heuristic {
        if options.algorithm != Algorithm::AStar {
            return Err(TrailblazerError::HeuristicNeedsAStar(kind, options.algorithm).into());
        }
    }

    if options.grid {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        let grid: Grid = buffer.parse()?;
        search_grid(options, &grid)
    } else {
        let graph = input::read_graph(reader)?;
        search_graph(options, &graph)
    }
}

fn search_graph(options: &Options, graph: &Graph<String>) -> Result<Report, Error> {
    match options.heuristic {
        None | Some(HeuristicKind::Zero) => {}
        Some(kind) => return Err(TrailblazerError::HeuristicNeedsGrid(kind).into()),
    }
    if options.render {
        return Err(TrailblazerError::RenderNeedsGrid.into());
    }

    let find = |label: &str| {
        graph
            .vertex_id(&label.to_string())
            .ok_or_else(|| TrailblazerError::UnknownLabel(label.to_string()))
    };
    let start = find(&options.from)?;
    let end = find(&options.to)?;

    let mut traversal = Traversal::for_graph(graph);
    let path = search(options, graph, &mut traversal, start, end, &ZeroHeuristic)?;

    Ok(Report {
        algorithm: options.algorithm,
        from: options.from.clone(),
        to: options.to.clone(),
        labels: graph.labels(&path).into_iter().cloned().collect(),
        cost: path.cost(graph)?,
        finalized: traversal.count(Color::Finalized),
        rendered: None,
    })
}

fn search_grid(options: &Options, grid: &Grid) -> Result<Report, Error> {
    let locate = |name: &str| -> Result<VertexId, Error> {
        let point = match name {
            "S" => grid.start().ok_or(TrailblazerError::MissingMarker('S'))?,
            "E" => grid.goal().ok_or(TrailblazerError::MissingMarker('E'))?,
            _ => name.parse::<Point>()?,
        };
        grid.vertex(point)
            .ok_or_else(|| TrailblazerError::OutOfBounds(point).into())
    };
    let start = locate(&options.from)?;
    let end = locate(&options.to)?;

    let kind = options.heuristic.unwrap_or(HeuristicKind::Manhattan);
    let heuristic: Box<dyn Heuristic + '_> = match kind {
        HeuristicKind::Zero => Box::new(ZeroHeuristic),
        HeuristicKind::Manhattan => Box::new(Manhattan::new(grid)),
        HeuristicKind::Euclidean => Box::new(Euclidean::new(grid)),
    };

    let mut traversal = Traversal::for_graph(grid);
    let path = search(options, grid, &mut traversal, start, end, heuristic.as_ref())?;

    let rendered = if options.render {
        Some(grid.render(&path, Some(&traversal)))
    } else {
        None
    };

    Ok(Report {
        algorithm: options.algorithm,
        from: options.from.clone(),
        to: options.to.clone(),
        labels: grid.points(&path).iter().map(Point::to_string).collect(),
        cost: path.cost(grid)?,
        finalized: traversal.count(Color::Finalized),
        rendered,
    })
}

fn search<G, H>(
    options: &Options,
    graph: &G,
    traversal: &mut Traversal,
    start: VertexId,
    end: VertexId,
    heuristic: &H,
) -> Result<Path, Error>
where
    G: Graphable + ?Sized,
    H: Heuristic + ?Sized,
{
    info!(algorithm = %options.algorithm, %start, %end, vertices = graph.vertex_count(), "searching");
    let path = options
        .algorithm
        .search(graph, traversal, start, end, heuristic)?;
    info!(length = path.len(), "search complete");
    Ok(path)
}

pub fn driver() -> Result<(), Error> {
    let matches = App::new("Trailblazer")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through graphs and grids")
        .arg(
            Arg::with_name("algorithm")
                .value_name("ALGORITHM")
                .required(true)
                .takes_value(true)
                .possible_values(&ALGORITHMS),
        )
        .arg(
            Arg::with_name("from")
                .value_name("FROM")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .value_name("TO")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("grid")
                .long("grid")
                .short("g")
                .help("Read the input as a grid, with FROM and TO as x,y points or S and E"),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(HEURISTICS)
                .help("Distance estimate used by astar on a grid"),
        )
        .arg(
            Arg::with_name("render")
                .long("render")
                .short("r")
                .help("Print the grid with the path and search state drawn on it"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for more detail"),
        )
        .get_matches();

    logging::init_tracing(matches.occurrences_of("verbose"))?;

    let heuristic = match matches.value_of("heuristic") {
        Some(name) => Some(name.parse::<HeuristicKind>()?),
        None => None,
    };

    let options = Options {
        algorithm: value_t!(matches, "algorithm", Algorithm)?,
        from: matches.value_of("from").unwrap_or_default().to_string(),
        to: matches.value_of("to").unwrap_or_default().to_string(),
        grid: matches.is_present("grid"),
        heuristic,
        render: matches.is_present("render"),
    };

    let reader = get_input_reader(matches.value_of("input"))?;
    let report = run(&options, reader)?;
    println!("{}", report);
    Ok(())
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| TrailblazerError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum TrailblazerError {
    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("No vertex labeled {0:?}")]
    UnknownLabel(String),

    #[error("Grid has no {0} marker")]
    MissingMarker(char),

    #[error("Point {0} is not on the grid")]
    OutOfBounds(Point),

    #[error("Unknown heuristic {0:?}")]
    UnknownHeuristic(String),

    #[error("The {0:?} heuristic only applies to grids")]
    HeuristicNeedsGrid(HeuristicKind),

    #[error("The {0:?} heuristic is only used by astar, not {1}")]
    HeuristicNeedsAStar(HeuristicKind, Algorithm),

    #[error("Only grids can be rendered")]
    RenderNeedsGrid,
}
