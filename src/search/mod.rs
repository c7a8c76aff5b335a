use std::{fmt, time::Duration};

use crate::board::{moves_along, Board, Move};

pub mod astar;
pub mod bfs;

pub use astar::{solve_astar, solve_astar_with_budget};
pub use bfs::{solve_bfs, solve_bfs_with_budget};

/// Optional cap on the work a single search may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    pub max_expansions: Option<usize>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Whether another node may be expanded after `expanded` expansions.
    pub(crate) fn allows(&self, expanded: usize) -> bool {
        self.max_expansions.map_or(true, |max| expanded < max)
    }
}

/// Result of one solver call.
///
/// `path` is `None` when the frontier ran dry or the budget ran out; it is a
/// regular outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Boards from the start to the goal, both included.
    pub path: Option<Vec<Board>>,
    /// Nodes popped from the frontier.
    pub expanded: usize,
    pub elapsed: Duration,
    /// Set when the search stopped because of its [`SearchBudget`].
    pub budget_exhausted: bool,
}

impl Solution {
    pub(crate) fn found(path: Vec<Board>, expanded: usize, elapsed: Duration) -> Self {
        Self {
            path: Some(path),
            expanded,
            elapsed,
            budget_exhausted: false,
        }
    }

    pub(crate) fn unreachable(expanded: usize, elapsed: Duration) -> Self {
        Self {
            path: None,
            expanded,
            elapsed,
            budget_exhausted: false,
        }
    }

    pub(crate) fn out_of_budget(expanded: usize, elapsed: Duration) -> Self {
        Self {
            path: None,
            expanded,
            elapsed,
            budget_exhausted: true,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves on the path.
    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }

    pub fn moves(&self) -> Option<Vec<Move>> {
        self.path.as_deref().and_then(moves_along)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Bfs];

    pub fn solve(&self, start: Board) -> Solution {
        self.solve_with_budget(start, &SearchBudget::unlimited())
    }

    pub fn solve_with_budget(&self, start: Board, budget: &SearchBudget) -> Solution {
        match self {
            Algorithm::AStar => solve_astar_with_budget(start, budget),
            Algorithm::Bfs => solve_bfs_with_budget(start, budget),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Algorithm::AStar => "A*",
            Algorithm::Bfs => "BFS",
        };
        write!(f, "{}", s)
    }
}
