use std::fmt;
use std::str::FromStr;

use algotrace_core::ParseKindError;

/// The maze generators, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    RecursiveDivision,
    Prim,
    Kruskal,
    Wilson,
    AldousBroder,
    Eller,
    RandomWalls,
}

impl MazeKind {
    pub const ALL: [MazeKind; 7] = [
        Self::RecursiveDivision,
        Self::Prim,
        Self::Kruskal,
        Self::Wilson,
        Self::AldousBroder,
        Self::Eller,
        Self::RandomWalls,
    ];

    /// Lookup key, as accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::RecursiveDivision => "recursive-division",
            Self::Prim => "randomized-prims",
            Self::Kruskal => "kruskal",
            Self::Wilson => "wilson",
            Self::AldousBroder => "aldous-broder",
            Self::Eller => "eller",
            Self::RandomWalls => "random-walls",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RecursiveDivision => "Recursive Division",
            Self::Prim => "Randomized Prim's",
            Self::Kruskal => "Kruskal's",
            Self::Wilson => "Wilson's",
            Self::AldousBroder => "Aldous-Broder",
            Self::Eller => "Eller's",
            Self::RandomWalls => "Random Walls",
        }
    }

    /// Whether the generator carves a spanning tree over the odd-coordinate
    /// lattice, starting from a solid grid.
    pub const fn is_lattice(self) -> bool {
        !matches!(self, Self::RecursiveDivision | Self::RandomWalls)
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| ParseKindError::new("maze", s))
    }
}
