use std::fmt;

use crate::geom::Point;

/// Errors raised by [`GridArena`](crate::GridArena) construction and edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested dimensions cannot hold distinct start and end cells.
    TooSmall { rows: i32, cols: i32 },
    /// The coordinate lies outside the grid.
    OutOfBounds(Point),
    /// Start and end cells may not be overwritten by wall or weight edits.
    ProtectedCell(Point),
    /// Start and end must be distinct cells.
    SameEndpoints(Point),
    /// Weights must be at least 1.
    InvalidWeight(u32),
    /// Text layout rows have different widths.
    InconsistentSize(String),
    /// Text layout contains a character with no cell meaning.
    InvalidRune { ch: char, pos: Point },
    /// Text layout lacks exactly one start (`S`) or end (`E`) marker.
    MissingEndpoint,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { rows, cols } => {
                write!(f, "grid {rows}x{cols} is too small (need at least 1x2)")
            }
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the grid"),
            Self::ProtectedCell(p) => write!(f, "cell {p} holds the start or end marker"),
            Self::SameEndpoints(p) => write!(f, "start and end cannot both be {p}"),
            Self::InvalidWeight(w) => write!(f, "weight {w} is invalid (must be >= 1)"),
            Self::InconsistentSize(s) => write!(f, "grid layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEndpoint => {
                f.write_str("grid layout needs exactly one start (S) and one end (E)")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An algorithm or maze key that names nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// What was being looked up, e.g. "algorithm".
    pub what: &'static str,
    pub key: String,
}

impl ParseKindError {
    pub fn new(what: &'static str, key: impl Into<String>) -> Self {
        Self {
            what,
            key: key.into(),
        }
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} \u{201c}{}\u{201d}", self.what, self.key)
    }
}

impl std::error::Error for ParseKindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GridError::ProtectedCell(Point::new(2, 3)).to_string(),
            "cell (2, 3) holds the start or end marker"
        );
        assert_eq!(
            ParseKindError::new("maze", "spiral").to_string(),
            "unknown maze \u{201c}spiral\u{201d}"
        );
    }
}
