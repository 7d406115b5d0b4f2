use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six faces of the cube, named by standard notation letter.
///
/// The declaration order is the solver's canonical order `U R F D L B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// Up.
    U,
    /// Right.
    R,
    /// Front.
    F,
    /// Down.
    D,
    /// Left.
    L,
    /// Back.
    B,
}

impl Face {
    /// All faces in canonical facelet order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The notation letter for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Parse an upper-case notation letter.
    ///
    /// Lower-case letters are rejected; in move notation they denote wide
    /// turns, which the cube model does not support.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Sticker colour of this face on a freshly built cube.
    #[must_use]
    pub const fn default_colour(self) -> &'static str {
        match self {
            Face::U => "yellow",
            Face::R => "orange",
            Face::F => "green",
            Face::D => "white",
            Face::L => "red",
            Face::B => "blue",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Face {
    type Error = CoreError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or_else(|| CoreError::InvalidFacelets {
            reason: format!("'{letter}' is not a face letter"),
        })
    }
}
