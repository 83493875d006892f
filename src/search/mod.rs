use std::fmt::Display;

use crate::{
    board::{Board, Move},
    error::NoSolution,
};

mod astar;
mod ldfs;
mod node;

pub use astar::astar;
pub use ldfs::limited_dfs;

pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Bookkeeping for a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub iterations: usize,
    pub generated: usize,
    /// Largest frontier + visited size seen right after a pop.
    pub max_stored: usize,
    /// Nodes abandoned at the depth bound; only depth-limited search has these.
    pub dead_ends: Option<usize>,
}

impl Stats {
    fn record_stored(&mut self, stored: usize) {
        self.max_stored = self.max_stored.max(stored);
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of iterations: {}", self.iterations)?;
        writeln!(f, "Generated states: {}", self.generated)?;
        write!(f, "Max stored states: {}", self.max_stored)?;
        if let Some(dead_ends) = self.dead_ends {
            write!(f, "\nNumber of dead ends: {}", dead_ends)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: Stats,
}

/// When depth-limited search records a board as visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitPolicy {
    /// Only boards that get expanded. Boards abandoned at the depth bound
    /// stay unvisited and can be pushed again by another path.
    #[default]
    OnExpand,
    /// As soon as a board is pushed, so each board enters the stack once.
    OnPush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    AStar,
    LimitedDfs { max_depth: u32, policy: VisitPolicy },
}

impl Strategy {
    pub fn limited_dfs(max_depth: u32) -> Strategy {
        Strategy::LimitedDfs {
            max_depth,
            policy: VisitPolicy::default(),
        }
    }

    pub fn search(&self, start: &Board, goal: &Board) -> Result<Solution, NoSolution> {
        match *self {
            Strategy::AStar => astar(start, goal),
            Strategy::LimitedDfs { max_depth, policy } => limited_dfs(start, goal, max_depth, policy),
        }
    }
}
