//! Edge-list input for labeled graphs.
//!
//! ```text
//! # comments and blank lines are skipped
//! directed
//! A B 2.5
//! B C
//! D
//! ```
//!
//! The optional first line picks the orientation (undirected when absent).
//! Each other line is an edge `FROM TO [COST]`, with a cost of 1 when
//! omitted, or a lone label for an isolated vertex. Costs must be finite
//! and non-negative.

use std::io::Read;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use searcher::{Graph, GraphBuilder, Orientation};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unable to read input")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: can't parse {text:?}")]
    InvalidLine { line: usize, text: String },

    #[error("Line {line}: invalid cost {text:?}")]
    InvalidCost { line: usize, text: String },

    #[error("Line {line}: orientation must come before any edges")]
    LateOrientation { line: usize },
}

pub type Result<T> = std::result::Result<T, InputError>;

/// A single meaningful line of an edge list.
#[derive(Debug, PartialEq)]
enum Line<'s> {
    Orientation(Orientation),
    Vertex(&'s str),
    Edge(&'s str, &'s str, f64),
}

fn parse_line(number: usize, text: &str) -> Result<Option<Line<'_>>> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(?P<from>[^\s#]+)(?:\s+(?P<to>[^\s#]+)(?:\s+(?P<cost>[^\s#]+))?)?$")
                .unwrap();
    };

    let text = match text.find('#') {
        Some(comment) => &text[..comment],
        None => text,
    }
    .trim();

    match text {
        "" => return Ok(None),
        "directed" => return Ok(Some(Line::Orientation(Orientation::Directed))),
        "undirected" => return Ok(Some(Line::Orientation(Orientation::Undirected))),
        _ => {}
    }

    let cap = RE.captures(text).ok_or_else(|| InputError::InvalidLine {
        line: number,
        text: text.to_string(),
    })?;

    let from = cap.name("from").map(|m| m.as_str()).unwrap_or_default();
    let to = match cap.name("to") {
        None => return Ok(Some(Line::Vertex(from))),
        Some(m) => m.as_str(),
    };

    let cost = match cap.name("cost") {
        None => 1.0,
        Some(m) => {
            let invalid = || InputError::InvalidCost {
                line: number,
                text: m.as_str().to_string(),
            };
            let cost: f64 = m.as_str().parse().map_err(|_| invalid())?;
            if !cost.is_finite() || cost < 0.0 {
                return Err(invalid());
            }
            cost
        }
    };

    Ok(Some(Line::Edge(from, to, cost)))
}

/// Parse an edge list from a string.
pub fn parse_graph(input: &str) -> Result<Graph<String>> {
    let mut builder: Option<GraphBuilder<String>> = None;

    for (i, text) in input.lines().enumerate() {
        let number = i + 1;
        let line = match parse_line(number, text)? {
            None => continue,
            Some(line) => line,
        };

        match line {
            Line::Orientation(orientation) => {
                if builder.is_some() {
                    return Err(InputError::LateOrientation { line: number });
                }
                builder = Some(GraphBuilder::new(orientation));
            }
            Line::Vertex(label) => {
                builder
                    .get_or_insert_with(GraphBuilder::undirected)
                    .vertex(label.to_string());
            }
            Line::Edge(from, to, cost) => {
                let graph = builder.get_or_insert_with(GraphBuilder::undirected);
                if !graph.edge(from.to_string(), to.to_string(), cost) {
                    debug!(line = number, label = from, "skipping self-loop");
                }
            }
        }
    }

    Ok(builder
        .unwrap_or_else(GraphBuilder::undirected)
        .build())
}

/// Read and parse an edge list.
pub fn read_graph<R: Read>(mut reader: R) -> Result<Graph<String>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_graph(&buffer)
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::{dijkstra, Graphable};

    #[test]
    fn lines() {
        assert_eq!(parse_line(1, "  # nothing").unwrap(), None);
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(
            parse_line(1, "directed").unwrap(),
            Some(Line::Orientation(Orientation::Directed))
        );
        assert_eq!(parse_line(1, "A").unwrap(), Some(Line::Vertex("A")));
        assert_eq!(
            parse_line(1, "A B").unwrap(),
            Some(Line::Edge("A", "B", 1.0))
        );
        assert_eq!(
            parse_line(1, "A\tB 2.5 # cheap").unwrap(),
            Some(Line::Edge("A", "B", 2.5))
        );
    }

    #[test]
    fn line_errors() {
        assert!(matches!(
            parse_line(3, "A B C D"),
            Err(InputError::InvalidLine { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(4, "A B many"),
            Err(InputError::InvalidCost { line: 4, .. })
        ));
        assert!(matches!(
            parse_line(5, "A B inf"),
            Err(InputError::InvalidCost { line: 5, .. })
        ));
        assert!(matches!(
            parse_line(6, "C B -5"),
            Err(InputError::InvalidCost { line: 6, .. })
        ));
        assert_eq!(
            parse_line(7, "A B 0").unwrap(),
            Some(Line::Edge("A", "B", 0.0))
        );
    }

    #[test]
    fn negative_cost_graph() {
        assert!(matches!(
            parse_graph("directed\nA B 1\nA C 2\nC B -5\n"),
            Err(InputError::InvalidCost { line: 4, .. })
        ));
    }

    #[test]
    fn graph() {
        let graph = parse_graph(
            "
            # A square, with a diagonal
            A B
            B C
            C D
            D A
            A C 1.5
            E
            ",
        )
        .unwrap();

        assert_eq!(graph.orientation(), Orientation::Undirected);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 5);

        let a = graph.vertex_id(&"A".to_string()).unwrap();
        let c = graph.vertex_id(&"C".to_string()).unwrap();
        let path = dijkstra(&graph, a, c).unwrap();
        assert_eq!(graph.labels(&path), vec!["A", "C"]);

        let e = graph.vertex_id(&"E".to_string()).unwrap();
        assert!(graph.neighbors(e).is_empty());
    }

    #[test]
    fn directed() {
        let graph = parse_graph("directed\nA B\n").unwrap();
        let a = graph.vertex_id(&"A".to_string()).unwrap();
        let b = graph.vertex_id(&"B".to_string()).unwrap();

        assert_eq!(graph.orientation(), Orientation::Directed);
        assert_eq!(graph.neighbors(a), vec![b]);
        assert!(graph.neighbors(b).is_empty());
    }

    #[test]
    fn late_orientation() {
        assert!(matches!(
            parse_graph("A B\n\ndirected\n"),
            Err(InputError::LateOrientation { line: 3 })
        ));
    }

    #[test]
    fn empty() {
        let graph = read_graph("# nothing here\n".as_bytes()).unwrap();
        assert!(graph.is_empty());
    }
}
