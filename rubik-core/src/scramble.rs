//! Random scramble generation.

use rand::Rng;

use crate::{
    face::Face,
    moves::{Move, MoveSequence, Turn},
};

/// Scramble length used when none is configured.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Generate a random scramble of `length` moves.
///
/// Faces and turn modifiers are drawn uniformly, except that a move never
/// turns the same face as the move before it.
pub fn random_scramble<R: Rng + ?Sized>(rng: &mut R, length: usize) -> MoveSequence {
    let mut moves = Vec::with_capacity(length);
    let mut previous: Option<Face> = None;

    for _ in 0..length {
        let candidates: Vec<Face> =
            Face::ALL.into_iter().filter(|&face| Some(face) != previous).collect();
        let face = candidates[rng.gen_range(0..candidates.len())];
        let turn = Turn::ALL[rng.gen_range(0..Turn::ALL.len())];
        moves.push(Move::new(face, turn));
        previous = Some(face);
    }

    MoveSequence::new(moves)
}
