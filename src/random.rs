use itertools::Itertools;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::board::{Board, BLANK, GOAL};

pub fn count_inversions(board: &Board) -> usize {
    board
        .tiles()
        .iter()
        .filter(|&&t| t != BLANK)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// On an odd-width board the blank's row never changes inversion parity,
/// so even parity alone decides solvability.
pub fn is_solvable(board: &Board) -> bool {
    count_inversions(board) % 2 == 0
}

/// Draws uniform permutations until one is solvable; half of them are.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut tiles = GOAL.key();
    loop {
        tiles.shuffle(rng);
        let board = Board::from_permutation(tiles);
        if is_solvable(&board) {
            return board;
        }
    }
}

pub fn generate_random_puzzle() -> Board {
    random_board(&mut thread_rng())
}
