use std::fmt;

use serde::{Deserialize, Serialize};

use crate::face::Face;

/// A normalised sticker colour label.
///
/// Labels are trimmed and lower-cased on construction, so `" Red"` and
/// `"red"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Colour(String);

impl Colour {
    /// Normalise a raw colour label.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// The default colour of `face`.
    #[must_use]
    pub fn of_face(face: Face) -> Self {
        Self(face.default_colour().to_owned())
    }

    /// The normalised label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label carries no usable colour (`""`, `none`, `unknown`).
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self.as_str(), "" | "none" | "unknown")
    }

    /// Whether either label is a prefix of the other.
    #[must_use]
    pub fn prefix_matches(&self, other: &Colour) -> bool {
        self.0.starts_with(&other.0) || other.0.starts_with(&self.0)
    }
}

impl From<String> for Colour {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
