use crate::{Axis, Color, Coord, Face, PerFace};

/// One of the 27 small cubes in the lattice.
///
/// A cubelet knows where it is, where it started, and which color faces in
/// each of the six directions. Interior faces have no color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubelet {
    /// Position on a solved cube, which never changes.
    home: Coord,
    /// Current position.
    position: Coord,
    /// Color facing each direction, in world space.
    stickers: PerFace<Option<Color>>,
}

impl Cubelet {
    /// Constructs the cubelet that sits at `home` on a solved cube.
    pub fn solved(home: Coord) -> Self {
        Self {
            home,
            position: home,
            stickers: PerFace::from_fn(|face| {
                face.contains(home).then(|| Color::of_solved_face(face))
            }),
        }
    }

    /// Returns the position of the cubelet on a solved cube. This uniquely
    /// identifies the cubelet.
    pub fn home(&self) -> Coord {
        self.home
    }
    /// Returns the current position of the cubelet.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Returns the color facing `face`, or `None` if that side of the cubelet
    /// is an interior face.
    pub fn color_on_face(&self, face: Face) -> Option<Color> {
        self.stickers[face]
    }
    /// Sets the color facing `face`.
    pub fn set_color_on_face(&mut self, face: Face, color: Option<Color>) {
        self.stickers[face] = color;
    }
    /// Returns an iterator over the colored faces of the cubelet.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        self.stickers
            .iter()
            .filter_map(|(face, color)| Some((face, (*color)?)))
    }
    /// Returns the number of colored faces: 0 for the center, 1 for face
    /// centers, 2 for edges, and 3 for corners.
    pub fn colored_face_count(&self) -> usize {
        self.stickers().count()
    }
    /// Returns whether the cubelet has no colored faces.
    pub fn is_interior(&self) -> bool {
        self.colored_face_count() == 0
    }

    /// Rotates the stickers of the cubelet about `axis` without moving it.
    ///
    /// The sticker facing each direction `d` ends up facing `d` rotated by
    /// `quarter_turns`. Stickers facing along `axis` stay put.
    pub fn rotate_orientation(&mut self, axis: Axis, quarter_turns: i32) {
        let old = self.stickers;
        for (face, &color) in old.iter() {
            self.stickers[face.rotated(axis, quarter_turns)] = color;
        }
    }

    /// Moves the cubelet about `axis`, updating its position and orientation.
    pub(crate) fn turn(&mut self, axis: Axis, quarter_turns: i32) {
        self.position = self.position.rotated(axis, quarter_turns);
        self.rotate_orientation(axis, quarter_turns);
    }
}
