use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::{node::Arena, Solution, Stats, VisitPolicy};
use crate::{board::Board, error::NoSolution};

/// Stack-based depth-first search that abandons nodes at `max_depth`.
///
/// Not complete: the visited set is global rather than per path, so a board
/// first reached by a long path is not explored again from a shorter one.
pub fn limited_dfs(
    start: &Board,
    goal: &Board,
    max_depth: u32,
    policy: VisitPolicy,
) -> Result<Solution, NoSolution> {
    let mut arena = Arena::default();
    let mut stack = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stats = Stats::default();
    let mut dead_ends = 0;

    debug!(
        "limited DFS from {:?}, max depth {}, {:?}",
        start.key(),
        max_depth,
        policy
    );

    stack.push(arena.root(*start, 0));
    stats.generated += 1;
    if policy == VisitPolicy::OnPush {
        visited.insert(start.key());
    }

    while let Some(id) = stack.pop() {
        stats.iterations += 1;
        stats.record_stored(match policy {
            VisitPolicy::OnExpand => stack.len() + visited.len(),
            // every stacked board is already in visited
            VisitPolicy::OnPush => visited.len(),
        });

        let node = arena[id];
        if node.board.is_goal(goal) {
            stats.dead_ends = Some(dead_ends);
            let moves = arena.moves(id);
            debug!(
                "limited DFS solved in {} moves after {} iterations, {} dead ends",
                moves.len(),
                stats.iterations,
                dead_ends
            );
            return Ok(Solution { moves, stats });
        }

        if node.g >= max_depth {
            // left unvisited, another path may push it again
            dead_ends += 1;
            trace!("dead end {:?} at g={}", node.board.key(), node.g);
            continue;
        }

        if policy == VisitPolicy::OnExpand {
            visited.insert(node.board.key());
        }

        for (next, mv) in node.board.successors() {
            let fresh = match policy {
                VisitPolicy::OnExpand => !visited.contains(&next.key()),
                VisitPolicy::OnPush => visited.insert(next.key()),
            };
            if !fresh {
                continue;
            }

            stack.push(arena.child(id, next, mv, 0));
            stats.generated += 1;
        }
    }

    stats.dead_ends = Some(dead_ends);
    debug!(
        "limited DFS exhausted the stack after {} iterations, {} dead ends",
        stats.iterations, dead_ends
    );
    Err(NoSolution { stats })
}
