//! Maze and spanning-tree generators for the algotrace grid arena.
//!
//! [`MazeGen`] owns an injected random source and a [`MazeConfig`], and
//! builds a [`GridArena`](algotrace_core::GridArena) for any [`MazeKind`]:
//!
//! - **Recursive division** and **random walls** start from an open grid and
//!   add walls, then rely on the repair pass for solvability.
//! - **Prim's**, **Kruskal's**, **Wilson's**, **Aldous-Broder** and
//!   **Eller's** start solid and carve a spanning tree over the passage
//!   lattice (odd rows and columns inside the border).
//!
//! ```
//! use algotrace_maze::{MazeGen, MazeKind};
//! use rand::SeedableRng;
//!
//! let mut mg = MazeGen::new(rand::rngs::StdRng::seed_from_u64(1));
//! let maze = mg.generate(MazeKind::Kruskal, 15, 25).unwrap();
//! assert!(maze.report.solvable);
//! ```

mod aldous_broder;
pub mod config;
mod division;
mod dsu;
mod eller;
pub mod kind;
mod kruskal;
pub mod mapgen;
mod prim;
mod random_walls;
mod wilson;

pub use config::MazeConfig;
pub use dsu::Dsu;
pub use kind::MazeKind;
pub use mapgen::{Maze, MazeGen, MazeReport};
