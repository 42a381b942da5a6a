//! Serialization of a cube to the 54-character facelet string read by
//! two-phase solvers.
//!
//! Faces are written in the order U, R, F, D, L, B. Within each face, the nine
//! facelets are read row by row as seen when looking straight at that face
//! from outside the cube, with U viewed with B at the top and D viewed with F
//! at the top. This is the layout used by Kociemba's solver.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Color, Coord, CubeError, FACELET_COUNT, Face, Lattice};

/// Mapping from sticker colors to the six letters a solver expects.
///
/// The mapping is injective: no two colors share a letter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "BTreeMap<Color, char>", into = "BTreeMap<Color, char>")]
pub struct SolverAlphabet {
    letters: BTreeMap<Color, char>,
}

impl Default for SolverAlphabet {
    /// Names each color after the face it occupies on a solved cube, which is
    /// the alphabet Kociemba's solver uses.
    fn default() -> Self {
        Self {
            letters: Color::ALL
                .into_iter()
                .map(|color| (color, color.solved_face().letter()))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<Color, char>> for SolverAlphabet {
    type Error = CubeError;

    fn try_from(letters: BTreeMap<Color, char>) -> Result<Self, Self::Error> {
        let mut seen = BTreeMap::new();
        for (&color, &letter) in &letters {
            if let Some(other) = seen.insert(letter, color) {
                return Err(CubeError::AlphabetNotInjective(other, color, letter));
            }
        }
        Ok(Self { letters })
    }
}

impl From<SolverAlphabet> for BTreeMap<Color, char> {
    fn from(value: SolverAlphabet) -> Self {
        value.letters
    }
}

impl SolverAlphabet {
    /// Constructs an alphabet from `(color, letter)` pairs.
    ///
    /// Colors missing from `letters` cannot be encoded; encoding a cube that
    /// shows them returns [`CubeError::UntranslatableColor`].
    pub fn new(letters: impl IntoIterator<Item = (Color, char)>) -> Result<Self, CubeError> {
        Self::try_from(letters.into_iter().collect::<BTreeMap<_, _>>())
    }

    /// Alphabet of lowercase color initials (`w`, `g`, `o`, `y`, `b`, `r`).
    pub fn initials() -> Self {
        Self {
            letters: Color::ALL
                .into_iter()
                .map(|color| (color, color.initial()))
                .collect(),
        }
    }

    /// Returns the letter for `color`.
    pub fn letter(&self, color: Color) -> Result<char, CubeError> {
        self.letters
            .get(&color)
            .copied()
            .ok_or(CubeError::UntranslatableColor(Some(color)))
    }
}

/// Returns the key that sorts positions on `face` into reading order: rows
/// top to bottom, then columns left to right.
fn raster_key(face: Face, pos: Coord) -> (i8, i8) {
    let [x, y, z] = <[i8; 3]>::from(pos);
    match face {
        Face::Up => (-y, x),
        Face::Right => (-z, y),
        Face::Front => (-z, x),
        Face::Down => (y, x),
        Face::Left => (-z, -y),
        Face::Back => (-z, -x),
    }
}

/// Returns the positions on `face` in reading order.
pub fn face_positions(face: Face) -> impl Iterator<Item = Coord> {
    Coord::all()
        .filter(move |&pos| face.contains(pos))
        .sorted_by_key(move |&pos| raster_key(face, pos))
}

/// Returns the colors of all 54 facelets in facelet string order.
///
/// Returns [`CubeError::UntranslatableColor`] with `None` if an interior face
/// is showing, which can only happen if the lattice is corrupt.
pub fn facelet_colors(lattice: &Lattice) -> Result<[Color; FACELET_COUNT], CubeError> {
    let mut ret = [Color::White; FACELET_COUNT];
    let facelets = Face::ALL
        .into_iter()
        .flat_map(|face| face_positions(face).map(move |pos| (face, pos)));
    for (out, (face, pos)) in ret.iter_mut().zip(facelets) {
        *out = lattice
            .cubelet(pos)
            .color_on_face(face)
            .ok_or(CubeError::UntranslatableColor(None))?;
    }
    Ok(ret)
}

/// Encodes the cube as a facelet string using `alphabet`.
pub fn encode(lattice: &Lattice, alphabet: &SolverAlphabet) -> Result<String, CubeError> {
    facelet_colors(lattice)?
        .into_iter()
        .map(|color| alphabet.letter(color))
        .collect()
}

impl Lattice {
    /// Encodes the cube as a facelet string using `alphabet`.
    ///
    /// See [`encode()`].
    pub fn encode(&self, alphabet: &SolverAlphabet) -> Result<String, CubeError> {
        encode(self, alphabet)
    }
}
