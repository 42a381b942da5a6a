//! Integer geometry of the 3x3x3 lattice: axes, coordinates, and faces.

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::iproduct;

use crate::CubeError;

/// Axis of the lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum Axis {
    /// Left to right
    X,
    /// Front to back
    Y,
    /// Down to up
    Z,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the two axes perpendicular to `self`, ordered `(a, b)` so that
    /// a positive quarter turn maps `(a, b)` to `(-b, a)`.
    ///
    /// With this ordering, a positive quarter turn is clockwise when viewed
    /// from the positive end of `self`.
    pub fn plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Z, Axis::Y),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::Y, Axis::X),
        }
    }
}

/// Position of a cubelet in the lattice. Each component is `-1`, `0`, or `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: i8,
    y: i8,
    z: i8,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl TryFrom<[i8; 3]> for Coord {
    type Error = CubeError;

    fn try_from([x, y, z]: [i8; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl From<Coord> for [i8; 3] {
    fn from(value: Coord) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Coord {
    /// Hidden center of the cube.
    pub const CENTER: Self = Self { x: 0, y: 0, z: 0 };

    /// Constructs a coordinate, or returns [`CubeError::OutOfRange`] if any
    /// component is outside `-1..=1`.
    pub fn new(x: i8, y: i8, z: i8) -> Result<Self, CubeError> {
        if [x, y, z].iter().all(|v| (-1..=1).contains(v)) {
            Ok(Self { x, y, z })
        } else {
            Err(CubeError::OutOfRange([x, y, z]))
        }
    }

    /// Returns all 27 coordinates in slot order.
    pub fn all() -> impl Iterator<Item = Coord> {
        iproduct!(-1..=1, -1..=1, -1..=1).map(|(x, y, z)| Self { x, y, z })
    }

    /// Returns the component along `axis`.
    pub fn get(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
    fn set(&mut self, axis: Axis, value: i8) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Returns the number of axes along which the coordinate lies on the
    /// surface of the cube: 0 for the center, 1 for face centers, 2 for edges,
    /// and 3 for corners.
    pub fn boundary_count(self) -> usize {
        Axis::ALL.iter().filter(|&&axis| self.get(axis) != 0).count()
    }

    /// Returns the index of the coordinate in `0..27`.
    pub fn slot(self) -> usize {
        ((self.x + 1) as usize * 3 + (self.y + 1) as usize) * 3 + (self.z + 1) as usize
    }
    /// Returns the coordinate with the given slot index.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in `0..27`.
    pub(crate) fn from_slot(slot: usize) -> Self {
        assert!(slot < crate::CUBELET_COUNT, "slot {slot} out of range");
        let component = |n: usize| n as i8 - 1;
        Self {
            x: component(slot / 9),
            y: component(slot / 3 % 3),
            z: component(slot % 3),
        }
    }

    /// Rotates the coordinate about `axis` by `quarter_turns` clockwise
    /// quarter turns, as seen from the positive end of `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Self {
        let (a, b) = axis.plane();
        let mut ret = self;
        for _ in 0..quarter_turns.rem_euclid(4) {
            let (va, vb) = (ret.get(a), ret.get(b));
            ret.set(a, -vb);
            ret.set(b, va);
        }
        ret
    }
}

/// Outward direction of a face of the cube, in facelet string order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum Face {
    /// +Z
    Up,
    /// +X
    Right,
    /// -Y
    Front,
    /// -Z
    Down,
    /// -X
    Left,
    /// +Y
    Back,
}

impl Face {
    /// All six faces in facelet string order: U, R, F, D, L, B.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Front | Face::Back => Axis::Y,
            Face::Up | Face::Down => Axis::Z,
        }
    }
    /// Returns the sign of the outward direction along [`Face::axis()`].
    pub fn sign(self) -> i8 {
        match self {
            Face::Up | Face::Right | Face::Back => 1,
            Face::Front | Face::Down | Face::Left => -1,
        }
    }

    /// Returns the outward unit vector of the face.
    pub fn normal(self) -> Coord {
        let mut ret = Coord::CENTER;
        ret.set(self.axis(), self.sign());
        ret
    }
    /// Returns the face whose outward unit vector is `normal`, or `None` if
    /// `normal` is not a unit vector.
    pub fn from_normal(normal: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// Returns the face that this one points toward after rotating the cube
    /// about `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Self {
        let normal = self.normal().rotated(axis, quarter_turns);
        match Self::from_normal(normal) {
            Some(face) => face,
            None => unreachable!("rotation of a unit vector is a unit vector"),
        }
    }

    /// Returns the single-letter name of the face used in facelet strings.
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Returns whether a cubelet at `pos` has a sticker on this face of the
    /// cube.
    pub fn contains(self, pos: Coord) -> bool {
        pos.get(self.axis()) == self.sign()
    }
}

/// Value for each face of a cubelet.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>([T; 6]);

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}

impl<T> PerFace<T> {
    /// Constructs a value for each face using `f`.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(Face::ALL.map(&mut f))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(&self.0)
    }
}
