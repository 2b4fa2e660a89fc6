//! Station types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A station's membership of one line: the line name and the station's
/// position along it.
///
/// Sequence values only need to be strictly increasing along a line, not
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineStop {
    pub line: String,
    pub sequence: i64,
}

impl LineStop {
    /// Create a new line membership.
    pub fn new(line: impl Into<String>, sequence: i64) -> Self {
        Self {
            line: line.into(),
            sequence,
        }
    }
}

/// A station within one city's metro network.
///
/// Names are unique within a city and are what routes are expressed in.
/// Coordinates are for display only and never influence routing.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let esplanade = Station::new("Esplanade")
///     .on_line("Blue Line", 12)
///     .on_line("Green Line", 4)
///     .at(400.0, 350.0);
///
/// assert!(esplanade.is_interchange());
/// assert_eq!(esplanade.sequence_on("Green Line"), Some(4));
/// assert_eq!(esplanade.sequence_on("Purple Line"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,

    #[serde(default)]
    pub lines: Vec<LineStop>,

    #[serde(default)]
    pub x: f64,

    #[serde(default)]
    pub y: f64,
}

impl Station {
    /// Create a station that belongs to no line yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Add a line membership.
    pub fn on_line(mut self, line: impl Into<String>, sequence: i64) -> Self {
        self.lines.push(LineStop::new(line, sequence));
        self
    }

    /// Set display coordinates.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// True if the station is served by two or more distinct lines.
    pub fn is_interchange(&self) -> bool {
        let distinct: HashSet<&str> = self.lines.iter().map(|l| l.line.as_str()).collect();
        distinct.len() >= 2
    }

    /// Position of this station on `line`, if it is served by it.
    pub fn sequence_on(&self, line: &str) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.line == line)
            .map(|l| l.sequence)
    }

    /// Names of the lines serving this station, in declaration order.
    pub fn line_names(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.line.as_str())
    }
}
