//! Functions for parsing and formatting move sequences.

use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;

use crate::{Family, Move, MoveParseError, Multiplier};

/// Formats a sequence of moves as a space-separated string.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

/// Parses a whitespace-separated sequence of moves, as returned by a solver.
///
/// Each token is parsed independently, so the iterator yields an error for
/// each bad token and keeps going.
pub fn parse_moves(s: &str) -> impl '_ + Iterator<Item = Result<Move, MoveParseError>> {
    s.split_whitespace().map(parse_move)
}

/// Parses a single move such as `R`, `U'`, `F2`, or `B2'`.
pub fn parse_move(s: &str) -> Result<Move, MoveParseError> {
    const MOVE_PATTERN: &str = r"^([FRUBLD])(.*)$";
    // match the whole string ^           $
    // capture one face letter ([FRUBLD])
    // then capture the suffix           (.*)

    lazy_static! {
        static ref MOVE_REGEX: Regex = Regex::new(MOVE_PATTERN).expect("bad regex");
    }

    let captures = MOVE_REGEX
        .captures(s)
        .ok_or_else(|| MoveParseError::UnknownMove(s.to_owned()))?;
    // need `.get()` for lifetime reasons
    let family_str = captures.get(1).expect("missing regex group").as_str();
    let suffix_str = captures.get(2).expect("missing regex group").as_str();

    let family =
        Family::from_str(family_str).map_err(|_| MoveParseError::UnknownMove(s.to_owned()))?;
    let multiplier =
        Multiplier::from_str(suffix_str).map_err(|()| MoveParseError::BadMultiplier {
            token: s.to_owned(),
            suffix: suffix_str.to_owned(),
        })?;

    Ok(Move { family, multiplier })
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
