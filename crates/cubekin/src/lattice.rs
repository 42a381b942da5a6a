use std::collections::HashSet;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Axis, CUBELET_COUNT, Coord, CubeError, Cubelet, SLICE_LEN, facelet};

/// Cubelets in one layer of the lattice.
pub type SliceCubelets<'a> = SmallVec<[&'a Cubelet; SLICE_LEN]>;

/// State of a whole cube: 27 cubelets, each at a distinct position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lattice {
    /// Cubelets indexed by the slot of their current position.
    pub(crate) cubelets: [Cubelet; CUBELET_COUNT],
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Lattice {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            cubelets: std::array::from_fn(|slot| Cubelet::solved(Coord::from_slot(slot))),
        }
    }

    /// Returns the cubelet at position `[x, y, z]`, or
    /// [`CubeError::OutOfRange`] if the position is not in the lattice.
    pub fn get(&self, pos: [i8; 3]) -> Result<&Cubelet, CubeError> {
        Ok(self.cubelet(Coord::try_from(pos)?))
    }
    /// Returns the cubelet at `pos`.
    pub fn cubelet(&self, pos: Coord) -> &Cubelet {
        &self.cubelets[pos.slot()]
    }
    /// Returns an iterator over all 27 cubelets, including the hidden center.
    pub fn cubelets(&self) -> impl Iterator<Item = &Cubelet> {
        self.cubelets.iter()
    }

    /// Returns the 9 cubelets whose coordinate along `axis` is `layer`.
    ///
    /// Returns [`CubeError::InvalidSlice`] unless `layer` is `-1` or `1`.
    pub fn slice(&self, axis: Axis, layer: i8) -> Result<SliceCubelets<'_>, CubeError> {
        Ok(slice_positions(axis, layer)?
            .into_iter()
            .map(|pos| self.cubelet(pos))
            .collect())
    }

    /// Returns whether every face of the cube shows a single color.
    pub fn is_solved(&self) -> bool {
        facelet::facelet_colors(self).is_ok_and(|colors| {
            colors
                .chunks_exact(SLICE_LEN)
                .all(|face| face.iter().all_equal())
        })
    }

    /// Checks that every cubelet is stored at its own position and that no
    /// cubelet appears twice.
    pub fn check_bijection(&self) -> Result<(), CubeError> {
        let mut homes = HashSet::new();
        for (slot, cubelet) in self.cubelets.iter().enumerate() {
            if cubelet.position().slot() != slot {
                return Err(CubeError::InvariantViolation(format!(
                    "cubelet from {} is at {} but stored in slot {slot}",
                    cubelet.home(),
                    cubelet.position(),
                )));
            }
            if !homes.insert(cubelet.home()) {
                return Err(CubeError::InvariantViolation(format!(
                    "cubelet from {} appears twice",
                    cubelet.home(),
                )));
            }
        }
        Ok(())
    }
}

/// Returns the 9 positions whose coordinate along `axis` is `layer`.
pub(crate) fn slice_positions(
    axis: Axis,
    layer: i8,
) -> Result<SmallVec<[Coord; SLICE_LEN]>, CubeError> {
    if layer != -1 && layer != 1 {
        return Err(CubeError::InvalidSlice { axis, layer });
    }
    Ok(Coord::all().filter(|pos| pos.get(axis) == layer).collect())
}
