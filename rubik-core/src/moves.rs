//! Face-turn notation: single moves and move sequences.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::CoreError, face::Face};

/// How far a face is turned, as seen looking at that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn clockwise (no suffix).
    Clockwise,
    /// Quarter turn counter-clockwise (`'`).
    CounterClockwise,
    /// Half turn (`2`).
    Half,
}

impl Turn {
    /// All turn modifiers.
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    /// Number of clockwise quarter turns equivalent to this turn.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A single face turn such as `R`, `U'` or `F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The face being turned.
    pub face: Face,
    /// How far it is turned.
    pub turn: Turn,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self { face: self.face, turn: self.turn.inverse() }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// An ordered sequence of moves: a scramble or a solution.
///
/// Serialises as its notation string, e.g. `"R U R' U'"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    /// Wrap a list of moves.
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    /// The moves in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|m| m.inverse()).collect())
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// Parses standard notation. Whitespace between moves is optional, so
/// `"RU'F2"` and `"R U' F2"` are equivalent. `'` and `’` both mark a
/// counter-clockwise turn; `2'` is read as a half turn.
///
/// Error positions are character offsets into the input.
impl FromStr for MoveSequence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = Vec::new();
        let mut chars = s.chars().enumerate().peekable();

        while let Some((position, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            let face = Face::from_letter(c)
                .ok_or_else(|| CoreError::InvalidMove { token: c.to_string(), position })?;

            let turn = match chars.peek().map(|&(_, next)| next) {
                Some('\'' | '’') => {
                    chars.next();
                    Turn::CounterClockwise
                }
                Some('2') => {
                    chars.next();
                    if matches!(chars.peek(), Some((_, '\'' | '’'))) {
                        chars.next();
                    }
                    Turn::Half
                }
                _ => Turn::Clockwise,
            };
            moves.push(Move::new(face, turn));
        }

        Ok(Self(moves))
    }
}

impl TryFrom<String> for MoveSequence {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MoveSequence> for String {
    fn from(seq: MoveSequence) -> Self {
        seq.to_string()
    }
}
