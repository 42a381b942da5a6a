use serde::{Deserialize, Serialize};

use crate::Face;

/// Sticker color.
#[allow(missing_docs)]
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    White,
    Green,
    Orange,
    Yellow,
    Blue,
    Red,
}

impl Color {
    /// All six colors.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Green,
        Color::Orange,
        Color::Yellow,
        Color::Blue,
        Color::Red,
    ];

    /// Returns the color of `face` on a solved cube.
    pub fn of_solved_face(face: Face) -> Self {
        match face {
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Right => Color::Green,
            Face::Left => Color::Blue,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
        }
    }

    /// Returns the face that has this color on a solved cube.
    pub fn solved_face(self) -> Face {
        match self {
            Color::Yellow => Face::Up,
            Color::White => Face::Down,
            Color::Green => Face::Right,
            Color::Blue => Face::Left,
            Color::Red => Face::Front,
            Color::Orange => Face::Back,
        }
    }

    /// Returns the lowercase initial of the color name.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'w',
            Color::Green => 'g',
            Color::Orange => 'o',
            Color::Yellow => 'y',
            Color::Blue => 'b',
            Color::Red => 'r',
        }
    }
}
