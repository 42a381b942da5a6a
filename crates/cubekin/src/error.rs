use cubekin_notation::MoveParseError;
use thiserror::Error;

use crate::{Axis, Color};

/// Error produced by the cube engine.
///
/// Every variant indicates a programming error on the caller's side or a bug
/// in the engine; nothing here is transient. Only
/// [`CubeError::InvariantViolation`] may leave a lattice in an untrustworthy
/// state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Coordinate outside the 3x3x3 lattice
    #[error("coordinate {0:?} is outside the 3x3x3 lattice")]
    OutOfRange([i8; 3]),
    /// Slice selector is not an outer layer
    #[error("slice {layer} on axis {axis} is not an outer layer")]
    InvalidSlice {
        /// Axis perpendicular to the slice.
        axis: Axis,
        /// Requested coordinate along `axis`; must be `-1` or `1`.
        layer: i8,
    },
    /// Rotation did not permute the lattice onto itself
    #[error("lattice invariant violated: {0}")]
    InvariantViolation(String),
    /// Move token not in the notation table
    #[error(transparent)]
    UnknownMove(#[from] MoveParseError),
    /// Color has no letter in the solver alphabet
    ///
    /// `None` means an interior face was found on the outside of the cube.
    #[error("no solver letter for color {0:?}")]
    UntranslatableColor(Option<Color>),
    /// Solver alphabet maps two colors to the same letter
    #[error("solver alphabet maps both {0} and {1} to {2:?}")]
    AlphabetNotInjective(Color, Color, char),
}
