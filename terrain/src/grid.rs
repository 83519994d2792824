//! Rectangular worlds of walls and open ground.
//!
//! Grids are written as text, one row per line:
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#.E
//! ```
//!
//! `#` is a wall, `.` is flat ground, and the digits `0`-`9` are ground
//! at that height. `S` and `E` mark optional start and end cells, which
//! are flat ground. Moving one step between open cells costs one, plus
//! the difference in height.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use thiserror::Error;
use tracing::debug;

use searcher::{Color, Graphable, Path, SearchError, SearchResult, Traversal, VertexId};

use crate::point::Point;
use crate::Position;

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,

    /// Open ground at some height.
    Ground(u8),
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Ground(_))
    }

    fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Ground(0) => '.',
            Cell::Ground(h) => char::from(b'0' + h),
        }
    }
}

/// Error when parsing a grid from text.
#[derive(Debug, Error, PartialEq)]
pub enum ParseGridError {
    #[error("Grid has no cells")]
    Empty,

    #[error("Line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected grid character {character:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        character: char,
    },

    #[error("Marker {0:?} appears more than once")]
    DuplicateMarker(char),
}

/// A rectangular grid, searchable as a graph.
///
/// Each cell is a vertex, numbered in reading order. Walls are
/// vertices without any edges; open cells are connected to the
/// open cells next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Marked start cell, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Marked end cell, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Is this point within the grid?
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.vertex(point).map(|v| self.cells[v.index()])
    }

    /// Can a search step onto this point?
    pub fn is_traversable(&self, point: Point) -> bool {
        self.cell(point).map(Cell::is_open).unwrap_or(false)
    }

    /// The vertex for a point on the grid.
    pub fn vertex(&self, point: Point) -> Option<VertexId> {
        if self.contains_point(point) {
            Some(VertexId::new(point.y as usize * self.width + point.x as usize))
        } else {
            None
        }
    }

    /// The point for a vertex of the grid.
    pub fn point(&self, vertex: VertexId) -> Option<Point> {
        if vertex.index() < self.cells.len() {
            let x = vertex.index() % self.width;
            let y = vertex.index() / self.width;
            Some(Point::new(x as Position, y as Position))
        } else {
            None
        }
    }

    /// Points along a path.
    pub fn points(&self, path: &Path) -> Vec<Point> {
        path.iter().filter_map(|v| self.point(*v)).collect()
    }

    fn height_at(&self, vertex: VertexId) -> Option<u8> {
        match self.cells.get(vertex.index()) {
            Some(Cell::Ground(h)) => Some(*h),
            _ => None,
        }
    }

    fn glyph(&self, point: Point) -> char {
        if Some(point) == self.start {
            'S'
        } else if Some(point) == self.goal {
            'E'
        } else {
            self.cell(point).map(Cell::glyph).unwrap_or(' ')
        }
    }

    /// Draw the grid with the outcome of a search on top.
    ///
    /// Cells on the path are drawn as `*`. With a traversal, cells the
    /// search finalized are drawn as `o`, cells it discovered but never
    /// expanded as `+`, and abandoned dead ends as `x`.
    pub fn render(&self, path: &Path, traversal: Option<&Traversal>) -> String {
        let on_path: HashSet<VertexId> = path.iter().copied().collect();
        let mut drawing = String::with_capacity((self.width + 1) * self.height);

        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let point = Point::new(x as Position, y as Position);
            let vertex = VertexId::new(y * self.width + x);

            let color = traversal
                .and_then(|t| t.get(vertex))
                .map(|s| s.color)
                .unwrap_or(Color::Unvisited);
            let glyph = if on_path.contains(&vertex) {
                '*'
            } else {
                match color {
                    Color::Finalized => 'o',
                    Color::Discovered => '+',
                    Color::Abandoned => 'x',
                    Color::Unvisited => self.glyph(point),
                }
            };

            drawing.push(glyph);
            if x + 1 == self.width {
                drawing.push('\n');
            }
        }
        drawing
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(&Path::empty(), None))
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;

        for (n, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();

            let mut found = 0;
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as Position, height as Position);
                let cell = match c {
                    '#' => Cell::Wall,
                    '.' => Cell::Ground(0),
                    '0'..='9' => Cell::Ground(c as u8 - b'0'),
                    'S' | 'E' => {
                        let marker = if c == 'S' { &mut start } else { &mut goal };
                        if marker.replace(point).is_some() {
                            return Err(ParseGridError::DuplicateMarker(c));
                        }
                        Cell::Ground(0)
                    }
                    _ => {
                        return Err(ParseGridError::UnexpectedCharacter {
                            line: n + 1,
                            column: indent + x + 1,
                            character: c,
                        })
                    }
                };
                cells.push(cell);
                found += 1;
            }

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseGridError::Ragged {
                        line: n + 1,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = match width {
            Some(w) if w > 0 => w,
            _ => return Err(ParseGridError::Empty),
        };

        debug!(width, height, "parsed grid");
        Ok(Grid {
            width,
            height,
            cells,
            start,
            goal,
        })
    }
}

impl Graphable for Grid {
    fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        let origin = match self.point(vertex) {
            Some(p) if self.is_traversable(p) => p,
            _ => return Vec::new(),
        };

        origin
            .adjacent()
            .filter(|p| self.is_traversable(*p))
            .filter_map(|p| self.vertex(p))
            .collect()
    }

    fn edge_cost(&self, from: VertexId, to: VertexId) -> SearchResult<f64> {
        let adjacent = match (self.point(from), self.point(to)) {
            (Some(a), Some(b)) => a.direction(b).is_some(),
            _ => false,
        };

        match (self.height_at(from), self.height_at(to)) {
            (Some(a), Some(b)) if adjacent => Ok(1.0 + f64::from(a.max(b) - a.min(b))),
            _ => Err(SearchError::MissingEdge(from, to)),
        }
    }
}
