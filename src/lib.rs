pub mod board;
pub mod error;
pub mod heuristic;
pub mod random;
pub mod search;

use pathfinding::directed::bfs::bfs;

pub use board::{parse_board, Board, Move, GOAL, MOVES};
pub use error::{BoardError, NoSolution};
pub use heuristic::misplaced_tiles;
pub use random::{generate_random_puzzle, is_solvable, random_board};
pub use search::{Solution, Stats, Strategy, VisitPolicy, DEFAULT_MAX_DEPTH};

/// Length of a shortest solution by plain breadth-first search, or `None`
/// if the goal cannot be reached from `start`.
pub fn shortest_solution_len(start: &Board, goal: &Board) -> Option<usize> {
    bfs(
        start,
        |b| b.successors().into_iter().map(|(next, _)| next),
        |b| b.is_goal(goal),
    )
    .map(|path| path.len() - 1)
}
