//! Translation of sticker colours into the solver's facelet string.
//!
//! The solver names every sticker by the face whose centre shares its
//! colour. Colour labels are free-form, so translation first decides which
//! colour belongs to each face and then classifies every sticker against
//! that table.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    colour::Colour,
    cube::{Cube, CENTRE, FACE_SIZE, STICKER_COUNT},
    error::CoreError,
    face::Face,
};

/// A 54-letter facelet string over the alphabet `URFDLB`, in canonical
/// face order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FaceletString([Face; STICKER_COUNT]);

impl FaceletString {
    /// The face letter of every sticker.
    #[must_use]
    pub fn faces(&self) -> [Face; STICKER_COUNT] {
        self.0
    }

    /// Whether every face shows only its own letter.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().enumerate().all(|(i, face)| face.index() == i / FACE_SIZE)
    }
}

impl fmt::Display for FaceletString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|face| write!(f, "{face}"))
    }
}

impl FromStr for FaceletString {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != STICKER_COUNT {
            return Err(CoreError::InvalidFacelets {
                reason: format!("expected {STICKER_COUNT} characters, got {count}"),
            });
        }
        let mut faces = [Face::U; STICKER_COUNT];
        for (slot, letter) in faces.iter_mut().zip(s.chars()) {
            *slot = Face::try_from(letter)?;
        }
        Ok(Self(faces))
    }
}

impl TryFrom<String> for FaceletString {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FaceletString> for String {
    fn from(facelets: FaceletString) -> Self {
        facelets.to_string()
    }
}

/// Decide the colour of each face, in canonical order.
///
/// The centre sticker is authoritative unless its label is unknown, in which
/// case the face's most common known colour is used instead.
#[must_use]
pub fn infer_centres(cube: &Cube) -> IndexMap<Face, Colour> {
    Face::ALL
        .into_iter()
        .map(|face| {
            let centre = cube.centre(face);
            let colour = if centre.is_unknown() {
                most_common(cube.face(face)).unwrap_or(centre).clone()
            } else {
                centre.clone()
            };
            (face, colour)
        })
        .collect()
}

/// Most frequent known label; ties go to the label seen first.
fn most_common(stickers: &[Colour]) -> Option<&Colour> {
    let mut counts: IndexMap<&Colour, usize> = IndexMap::new();
    for sticker in stickers.iter().filter(|s| !s.is_unknown()) {
        *counts.entry(sticker).or_insert(0) += 1;
    }
    let mut best: Option<(&Colour, usize)> = None;
    for (colour, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((colour, count));
        }
    }
    best.map(|(colour, _)| colour)
}

/// Encode `cube` as the solver's facelet string.
///
/// # Errors
/// Returns [`CoreError::AmbiguousColour`] if two faces resolve to the same
/// centre colour, or [`CoreError::UnrecognizedColour`] if a sticker matches
/// no centre colour either exactly or by prefix.
pub fn to_facelets(cube: &Cube) -> Result<FaceletString, CoreError> {
    let mut table: Vec<(Colour, Face)> = Vec::with_capacity(Face::ALL.len());
    for (face, colour) in infer_centres(cube) {
        if let Some(&(_, first)) = table.iter().find(|(known, _)| *known == colour) {
            return Err(CoreError::AmbiguousColour {
                colour: colour.to_string(),
                first,
                second: face,
            });
        }
        table.push((colour, face));
    }

    let mut faces = [Face::U; STICKER_COUNT];
    for face in Face::ALL {
        let start = face.index() * FACE_SIZE;
        for (offset, sticker) in cube.face(face).iter().enumerate() {
            // Centres never move, whatever their label.
            faces[start + offset] = if offset == CENTRE {
                face
            } else {
                classify(sticker, face, &table)?
            };
        }
    }
    Ok(FaceletString(faces))
}

fn classify(sticker: &Colour, face: Face, table: &[(Colour, Face)]) -> Result<Face, CoreError> {
    if let Some(&(_, owner)) = table.iter().find(|(known, _)| known == sticker) {
        return Ok(owner);
    }
    // Blank labels would prefix-match everything.
    if !sticker.is_unknown() {
        if let Some(&(_, owner)) = table.iter().find(|(known, _)| known.prefix_matches(sticker)) {
            return Ok(owner);
        }
    }
    Err(CoreError::UnrecognizedColour { colour: sticker.to_string(), face })
}
