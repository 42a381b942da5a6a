//! Kinematics and facelet encoding for the 3x3x3 Rubik's Cube.
//!
//! A [`Lattice`] owns 27 [`Cubelet`]s keyed by their position. Moves rotate
//! one outer layer by quarter turns, updating both the position and the
//! sticker orientation of each cubelet in that layer. The state can be
//! serialized to the 54-character facelet string used by two-phase solvers,
//! and a solver's answer can be replayed one quarter turn at a time.

mod color;
mod cubelet;
mod error;
pub mod facelet;
mod geometry;
mod lattice;
pub mod rotation;
pub mod sequence;

/// Re-export of `cubekin_notation`.
pub use cubekin_notation as notation;
pub use cubekin_notation::{Family, Move, Multiplier};

pub use crate::color::Color;
pub use crate::cubelet::Cubelet;
pub use crate::error::CubeError;
pub use crate::facelet::SolverAlphabet;
pub use crate::geometry::{Axis, Coord, Face, PerFace};
pub use crate::lattice::{Lattice, SliceCubelets};
pub use crate::rotation::{Affected, LayerTurn};
pub use crate::sequence::{Playback, Presenter, ReplaySummary, Step};

/// Number of cubelets in the lattice, including the hidden center.
pub const CUBELET_COUNT: usize = 27;
/// Number of cubelets in one layer.
pub const SLICE_LEN: usize = 9;
/// Number of facelets in a facelet string.
pub const FACELET_COUNT: usize = 54;

#[cfg(test)]
mod tests;
