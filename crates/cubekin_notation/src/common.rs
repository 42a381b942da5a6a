//! Building blocks of a move: the face letter and the multiplier suffix.

use std::fmt;
use std::str::FromStr;

/// Face letter naming which outer layer of the cube a move turns.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Family {
    /// Front
    F,
    /// Right
    R,
    /// Up
    U,
    /// Back
    B,
    /// Left
    L,
    /// Down
    D,
}

impl Family {
    /// All six families in notation order.
    pub const ALL: [Family; 6] = [
        Family::F,
        Family::R,
        Family::U,
        Family::B,
        Family::L,
        Family::D,
    ];

    /// Returns the family of the opposite face.
    pub fn opposite(self) -> Self {
        match self {
            Family::F => Family::B,
            Family::R => Family::L,
            Family::U => Family::D,
            Family::B => Family::F,
            Family::L => Family::R,
            Family::D => Family::U,
        }
    }
}

/// Multiplier suffix using `'` for negative numbers.
///
/// The default multiplier is `Multiplier(1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier(pub i32);

impl Default for Multiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if abs != 1 {
            write!(f, "{abs}")?;
        }
        if self.0 < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for Multiplier {
    type Err = ();

    /// Parses a multiplier suffix. Only the suffixes produced by solvers are
    /// accepted: ``, `'`, `2`, and `2'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, sign) = match s.strip_suffix('\'') {
            Some(rest) => (rest, -1),
            None => (s, 1),
        };
        let abs = match digits {
            "" => 1,
            "2" => 2,
            _ => return Err(()),
        };
        Ok(Self(abs * sign))
    }
}
