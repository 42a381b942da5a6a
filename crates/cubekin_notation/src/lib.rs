//! Face-turn notation parser and serializer for the 3x3x3 cube.
//!
//! A move is a face letter (`F`, `R`, `U`, `B`, `L`, `D`) followed by an
//! optional multiplier suffix: `'` for one counterclockwise quarter turn, `2`
//! for a half turn, or `2'` for a half turn performed counterclockwise.

#[macro_use]
extern crate lazy_static;

pub mod common;
mod errors;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;

pub use common::{Family, Multiplier};
pub use errors::MoveParseError;
pub use parse::{format_moves, parse_move, parse_moves};

/// Single move in face-turn notation, such as `R`, `U'`, or `F2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face being turned.
    pub family: Family,
    /// Number of clockwise quarter turns. Negative numbers are
    /// counterclockwise.
    pub multiplier: Multiplier,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.multiplier)
    }
}

impl Move {
    /// Constructs a move of `family` with the given multiplier.
    pub const fn new(family: Family, multiplier: i32) -> Self {
        Self {
            family,
            multiplier: Multiplier(multiplier),
        }
    }
    /// Constructs a single clockwise quarter turn.
    pub const fn cw(family: Family) -> Self {
        Self::new(family, 1)
    }
    /// Constructs a single counterclockwise quarter turn.
    pub const fn ccw(family: Family) -> Self {
        Self::new(family, -1)
    }
    /// Constructs a half turn.
    pub const fn double(family: Family) -> Self {
        Self::new(family, 2)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            family: self.family,
            multiplier: Multiplier(-self.multiplier.0),
        }
    }

    /// Returns whether the move is a single quarter turn.
    pub fn is_quarter_turn(self) -> bool {
        self.multiplier.0.abs() == 1
    }

    /// Returns the number of quarter turns in the move, ignoring direction.
    pub fn quarter_turn_count(self) -> u32 {
        self.multiplier.0.unsigned_abs()
    }

    /// Returns a single quarter turn of the same face in the same direction.
    ///
    /// Repeating this move [`Move::quarter_turn_count()`] times has the same
    /// effect as the original move.
    #[must_use]
    pub fn quarter_turn(self) -> Self {
        Self::new(self.family, self.multiplier.0.signum())
    }

    /// Every move in the 18-move half-turn metric, in a fixed order: for each
    /// family, the clockwise, counterclockwise, and double move.
    pub fn all() -> impl Iterator<Item = Move> {
        Family::ALL
            .into_iter()
            .flat_map(|family| [Self::cw(family), Self::ccw(family), Self::double(family)])
    }
}
