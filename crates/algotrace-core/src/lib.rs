//! **algotrace-core**: shared types for algorithm trace generation.
//!
//! This crate provides the foundational types used across the *algotrace*
//! workspace: geometry primitives, the grid arena that pathfinding and maze
//! generation operate on, the step types that make up a trace, and the
//! benchmark harness that times the silent algorithm runs.

pub mod bench;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod step;

pub use bench::{benchmark, distribute_execution_time};
pub use cell::{Cell, CellKind};
pub use config::TraceConfig;
pub use error::{GridError, ParseKindError};
pub use geom::{Point, Range};
pub use grid::{GridArena, default_endpoints};
pub use step::{PathStats, PathfindingStep, SortStats, SortingStep, Step, Timed};
