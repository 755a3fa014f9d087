/// Tuning knobs shared by the maze generators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Recursive division stops once a chamber is narrower or shorter than
    /// this.
    pub min_chamber: i32,
    /// Fraction of a division wall left open, drawn uniformly from
    /// `gap_ratio.0..gap_ratio.1`. At least one gap is always made.
    pub gap_ratio: (f64, f64),
    /// Probability that a cell becomes a wall in the random-walls layout.
    pub wall_density: f64,
    /// Whether to knock down walls until start reaches end.
    pub repair: bool,
    /// Upper bound on walls removed by the repair pass.
    pub repair_attempts: usize,
    /// Aldous-Broder gives up after `rows * cols * walk_factor` moves.
    pub walk_factor: usize,
    /// Eller's algorithm: chance of joining two horizontally adjacent sets.
    pub eller_merge_chance: f64,
    /// Eller's algorithm: chance of an extra downward link per cell, on top
    /// of the one every set gets.
    pub eller_drop_chance: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            min_chamber: 5,
            gap_ratio: (0.2, 0.4),
            wall_density: 0.25,
            repair: true,
            repair_attempts: 100,
            walk_factor: 10,
            eller_merge_chance: 0.5,
            eller_drop_chance: 0.3,
        }
    }
}
