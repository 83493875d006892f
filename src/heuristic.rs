use itertools::Itertools;

use crate::board::{Board, BLANK};

// every tile out of place needs at least one slide, so this never overestimates
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip_eq(goal.tiles())
        .filter(|(b, g)| **b != BLANK && b != g)
        .count() as u32
}
