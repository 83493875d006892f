use std::{cmp::Ordering, collections::BinaryHeap};

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::{
    node::{Arena, NodeId},
    Solution, Stats,
};
use crate::{board::Board, error::NoSolution, heuristic::misplaced_tiles};

// heap entry: lowest f first, then deepest, then oldest
#[derive(Debug, PartialEq, Eq)]
struct Open {
    f: u32,
    g: u32,
    id: NodeId,
}

impl Open {
    fn new(arena: &Arena, id: NodeId) -> Open {
        let node = &arena[id];
        Open {
            f: node.f(),
            g: node.g,
            id,
        }
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search on `g + misplaced_tiles`.
///
/// The closed set only stops re-expansion. A board already waiting in the
/// open heap is pushed again when reached by another path, so the same board
/// may be queued several times and each copy counts as generated.
pub fn astar(start: &Board, goal: &Board) -> Result<Solution, NoSolution> {
    let mut arena = Arena::default();
    let mut open = BinaryHeap::new();
    let mut closed = FxHashSet::default();
    let mut stats = Stats::default();

    debug!("A* from {:?}", start.key());

    let root = arena.root(*start, misplaced_tiles(start, goal));
    open.push(Open::new(&arena, root));
    stats.generated += 1;

    while let Some(Open { id, .. }) = open.pop() {
        stats.iterations += 1;
        stats.record_stored(open.len() + closed.len());

        let board = arena[id].board;
        if board.is_goal(goal) {
            let moves = arena.moves(id);
            debug!(
                "A* solved in {} moves after {} iterations ({} nodes)",
                moves.len(),
                stats.iterations,
                arena.len()
            );
            return Ok(Solution { moves, stats });
        }

        closed.insert(board.key());
        trace!("expanding {:?} at g={}", board.key(), arena[id].g);

        for (next, mv) in board.successors() {
            if closed.contains(&next.key()) {
                continue;
            }

            let child = arena.child(id, next, mv, misplaced_tiles(&next, goal));
            open.push(Open::new(&arena, child));
            stats.generated += 1;
        }
    }

    debug!("A* exhausted the open set after {} iterations", stats.iterations);
    Err(NoSolution { stats })
}
