use crate::face::Face;

/// Errors produced by the `rubik-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A move token in a scramble or solution could not be parsed.
    #[error("invalid move '{token}' at position {position}")]
    InvalidMove { token: String, position: usize },

    /// A facelet string failed validation.
    #[error("invalid facelet string: {reason}")]
    InvalidFacelets { reason: String },

    /// Two faces share the same centre colour, so stickers cannot be assigned.
    #[error("ambiguous colour '{colour}' for faces {first} and {second}")]
    AmbiguousColour { colour: String, first: Face, second: Face },

    /// A sticker colour matches none of the centre colours.
    #[error("unrecognized sticker colour '{colour}' on face {face}")]
    UnrecognizedColour { colour: String, face: Face },

    /// A caller-supplied colour map does not describe a 6 x 9 cube.
    #[error("invalid colour map: {reason}")]
    InvalidColourMap { reason: String },
}
