//! Sticker-level cube model.
//!
//! Stickers are stored in Kociemba facelet order: faces `U R F D L B`, each
//! face row-major as seen looking straight at it with `U` (or `B` for the
//! `U` face, `F` for the `D` face) at the top.

use indexmap::IndexMap;

use crate::{
    colour::Colour,
    error::CoreError,
    face::Face,
    facelet::FaceletString,
    moves::{Move, MoveSequence},
};

/// Number of stickers on the cube.
pub const STICKER_COUNT: usize = 54;

/// Number of stickers on one face.
pub const FACE_SIZE: usize = 9;

/// Index of the centre sticker within a face.
pub const CENTRE: usize = 4;

/// Face-to-stickers view of a cube, keyed in canonical face order.
pub type ColourMap = IndexMap<Face, Vec<Colour>>;

/// Sticker cycles for a clockwise quarter turn of each face, indexed by
/// [`Face::index`]. In each cycle `[a, b, c, d]` the sticker at `a` moves to
/// `b`, `b` to `c`, `c` to `d` and `d` back to `a`.
const QUARTER_TURN_CYCLES: [[[usize; 4]; 5]; 6] = [
    // U
    [[0, 2, 8, 6], [1, 5, 7, 3], [9, 18, 36, 45], [10, 19, 37, 46], [11, 20, 38, 47]],
    // R
    [[2, 51, 29, 20], [5, 48, 32, 23], [8, 45, 35, 26], [9, 11, 17, 15], [10, 14, 16, 12]],
    // F
    [[6, 9, 29, 44], [7, 12, 28, 41], [8, 15, 27, 38], [18, 20, 26, 24], [19, 23, 25, 21]],
    // D
    [[15, 51, 42, 24], [16, 52, 43, 25], [17, 53, 44, 26], [27, 29, 35, 33], [28, 32, 34, 30]],
    // L
    [[0, 18, 27, 53], [3, 21, 30, 50], [6, 24, 33, 47], [36, 38, 44, 42], [37, 41, 43, 39]],
    // B
    [[0, 42, 35, 11], [1, 39, 34, 14], [2, 36, 33, 17], [45, 47, 53, 51], [46, 50, 52, 48]],
];

/// A 3x3x3 cube as 54 coloured stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    stickers: [Colour; STICKER_COUNT],
}

impl Cube {
    /// A solved cube in the default colour scheme.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            stickers: std::array::from_fn(|i| Colour::of_face(Face::ALL[i / FACE_SIZE])),
        }
    }

    /// Build a cube from a face-to-stickers map.
    ///
    /// Every face must be present with exactly nine stickers. Labels are
    /// taken as given; they are not required to form a legal cube.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidColourMap`] if a face is missing or has the
    /// wrong number of stickers.
    pub fn from_colour_map(map: &ColourMap) -> Result<Self, CoreError> {
        let mut stickers = Vec::with_capacity(STICKER_COUNT);
        for face in Face::ALL {
            let face_stickers = map.get(&face).ok_or_else(|| CoreError::InvalidColourMap {
                reason: format!("missing face {face}"),
            })?;
            if face_stickers.len() != FACE_SIZE {
                return Err(CoreError::InvalidColourMap {
                    reason: format!(
                        "face {face} has {} stickers, expected {FACE_SIZE}",
                        face_stickers.len()
                    ),
                });
            }
            stickers.extend(face_stickers.iter().cloned());
        }
        let stickers: [Colour; STICKER_COUNT] =
            stickers.try_into().map_err(|_| CoreError::InvalidColourMap {
                reason: format!("expected {STICKER_COUNT} stickers"),
            })?;
        Ok(Self { stickers })
    }

    /// Build a cube from a facelet string, painting each letter with that
    /// face's default colour.
    #[must_use]
    pub fn from_facelets(facelets: &FaceletString) -> Self {
        let faces = facelets.faces();
        Self { stickers: std::array::from_fn(|i| Colour::of_face(faces[i])) }
    }

    /// Apply a single move in place.
    pub fn apply(&mut self, m: Move) {
        for _ in 0..m.turn.quarter_turns() {
            self.quarter_turn(m.face);
        }
    }

    /// Apply every move of `sequence` in order.
    pub fn apply_all(&mut self, sequence: &MoveSequence) {
        for &m in sequence.moves() {
            self.apply(m);
        }
    }

    fn quarter_turn(&mut self, face: Face) {
        for cycle in &QUARTER_TURN_CYCLES[face.index()] {
            for &target in &cycle[1..] {
                self.stickers.swap(cycle[0], target);
            }
        }
    }

    /// The nine stickers of `face`, row-major.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Colour] {
        let start = face.index() * FACE_SIZE;
        &self.stickers[start..start + FACE_SIZE]
    }

    /// The centre sticker of `face`.
    #[must_use]
    pub fn centre(&self, face: Face) -> &Colour {
        &self.face(face)[CENTRE]
    }

    /// Whether every sticker on each face matches that face's centre.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let centre = self.centre(face);
            self.face(face).iter().all(|sticker| sticker == centre)
        })
    }

    /// Snapshot of the sticker colours, keyed by face in canonical order.
    #[must_use]
    pub fn colour_map(&self) -> ColourMap {
        Face::ALL.into_iter().map(|face| (face, self.face(face).to_vec())).collect()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}
