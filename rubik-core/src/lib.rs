//! Core types for the rubik scramble-and-solve service.
//!
//! Defines face-turn notation, random scramble generation, a sticker-level
//! cube model, and the translation from sticker colours to the 54-letter
//! facelet string consumed by two-phase solvers.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod colour;
pub mod cube;
pub mod error;
pub mod face;
pub mod facelet;
pub mod moves;
pub mod scramble;

pub use colour::Colour;
pub use cube::{ColourMap, Cube};
pub use error::CoreError;
pub use face::Face;
pub use facelet::{to_facelets, FaceletString};
pub use moves::{Move, MoveSequence, Turn};
pub use scramble::{random_scramble, DEFAULT_SCRAMBLE_LENGTH};
