//! The [`Cell`] type: one square of the grid arena.

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    /// Passable, entering it multiplies the step cost by the weight (≥ 1).
    Weighted(u32),
    Start,
    End,
}

impl CellKind {
    /// Whether searches may enter the cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Traversal weight. Anything but a weighted cell costs 1.
    #[inline]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Weighted(w) => w,
            _ => 1,
        }
    }

    /// Text form used by [`GridArena::parse`](crate::GridArena::parse) and
    /// `Display`. Weights above 9 print as `9`.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Weighted(w) => char::from_digit(w.min(9), 10).unwrap_or('9'),
        }
    }

    /// Whether the cell is the start or end marker.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A grid cell with optional runtime annotations.
///
/// `distance` and `heuristic` belong to the presentation layer. Trace
/// generation never reads or writes them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub distance: Option<f64>,
    pub heuristic: Option<f64>,
}

impl Cell {
    /// A cell of the given kind with no annotations.
    #[inline]
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            distance: None,
            heuristic: None,
        }
    }
}
