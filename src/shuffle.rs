use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, thread_rng, Rng, SeedableRng};

use crate::{
    board::{inversion_count, Board, CELLS, GOAL},
    error::PuzzleError,
};

/// Ordered tiles the shuffle starts from.
const CANONICAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Upper bound on rejected samples before giving up.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 10_000;

/// Whether `board` can reach [`GOAL`]: both must share inversion parity.
pub fn is_solvable(board: &Board) -> bool {
    board.inversion_parity() == GOAL.inversion_parity()
}

/// A random solvable board that is not the goal.
pub fn shuffle() -> Result<Board, PuzzleError> {
    shuffle_with(&mut thread_rng())
}

/// Same as [`shuffle`], reproducible from `seed`.
pub fn shuffle_seeded(seed: u64) -> Result<Board, PuzzleError> {
    shuffle_with(&mut StdRng::seed_from_u64(seed))
}

pub fn shuffle_with<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, PuzzleError> {
    let goal_parity = GOAL.inversion_parity();
    let mut flattened = CANONICAL;

    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        flattened.shuffle(rng);

        if inversion_count(&flattened) % 2 != goal_parity {
            trace!("rejected {flattened:?}: parity differs from the goal");
            continue;
        }
        let board = Board::from_flat(&flattened)?;
        if board.is_goal() {
            trace!("rejected the goal board");
            continue;
        }

        debug!("shuffled board accepted after {attempt} attempts");
        return Ok(board);
    }

    Err(PuzzleError::ShuffleExhausted {
        attempts: MAX_SHUFFLE_ATTEMPTS,
    })
}
