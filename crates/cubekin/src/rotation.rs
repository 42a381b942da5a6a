//! Rotation of outer layers.
//!
//! Every move resolves through [`family_turn()`], which is the only place
//! that decides which layer a face letter turns and in which direction.

use cubekin_notation::{Family, Move};
use smallvec::SmallVec;

use crate::lattice::slice_positions;
use crate::{Axis, CubeError, Cubelet, Lattice, SLICE_LEN};

/// Cubelets moved by a single rotation, in their new positions.
pub type Affected = SmallVec<[Cubelet; SLICE_LEN]>;

/// Rotation of one outer layer, resolved from a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerTurn {
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`: `-1` or `1`.
    pub layer: i8,
    /// Number of quarter turns, clockwise as seen from the positive end of
    /// `axis`.
    pub quarter_turns: i32,
}

impl From<Move> for LayerTurn {
    fn from(mv: Move) -> Self {
        let base = family_turn(mv.family);
        Self {
            quarter_turns: base.quarter_turns * mv.multiplier.0,
            ..base
        }
    }
}

/// Returns the layer turned by a single clockwise move of `family`.
///
/// Clockwise is relative to the face being turned, so faces on the negative
/// end of an axis turn by a negative quarter turn about that axis.
pub const fn family_turn(family: Family) -> LayerTurn {
    let (axis, layer, quarter_turns) = match family {
        Family::F => (Axis::Y, -1, -1),
        Family::B => (Axis::Y, 1, 1),
        Family::L => (Axis::X, -1, -1),
        Family::R => (Axis::X, 1, 1),
        Family::U => (Axis::Z, 1, 1),
        Family::D => (Axis::Z, -1, -1),
    };
    LayerTurn {
        axis,
        layer,
        quarter_turns,
    }
}

impl Lattice {
    /// Applies a move and returns the cubelets it moved.
    ///
    /// Half turns are applied as a single rotation; see
    /// [`crate::sequence`] for replaying them as two quarter turns.
    pub fn apply(&mut self, mv: Move) -> Result<Affected, CubeError> {
        let turn = LayerTurn::from(mv);
        log::trace!("applying {mv} as {turn:?}");
        self.apply_turn(turn)
    }

    /// Parses and applies a single move token such as `R'`.
    ///
    /// The lattice is not modified if the token is invalid.
    pub fn apply_str(&mut self, token: &str) -> Result<Affected, CubeError> {
        self.apply(token.parse()?)
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) -> Result<(), CubeError> {
        for mv in moves {
            self.apply(mv)?;
        }
        Ok(())
    }

    /// Rotates one outer layer and returns the cubelets it moved.
    ///
    /// The new state is computed on the side and only written back once the
    /// moved cubelets are known to fill exactly the slots they came from. If
    /// they do not, this returns [`CubeError::InvariantViolation`] and the
    /// lattice is unchanged.
    pub fn apply_turn(&mut self, turn: LayerTurn) -> Result<Affected, CubeError> {
        let LayerTurn {
            axis,
            layer,
            quarter_turns,
        } = turn;

        let old_positions = slice_positions(axis, layer)?;
        let moved: Affected = old_positions
            .iter()
            .map(|&pos| {
                let mut cubelet = *self.cubelet(pos);
                cubelet.turn(axis, quarter_turns);
                cubelet
            })
            .collect();

        let mut new_positions: SmallVec<[_; SLICE_LEN]> =
            moved.iter().map(Cubelet::position).collect();
        new_positions.sort();
        // `slice_positions()` returns positions in slot order, which is sorted
        if new_positions != old_positions {
            return Err(CubeError::InvariantViolation(format!(
                "{turn:?} moved layer {old_positions:?} onto {new_positions:?}",
            )));
        }

        for cubelet in &moved {
            self.cubelets[cubelet.position().slot()] = *cubelet;
        }
        Ok(moved)
    }
}
