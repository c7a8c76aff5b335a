mod board;
mod error;
mod node;
mod search;
mod shuffle;

pub use board::{inversion_count, moves_along, Board, Move, CELLS, COLS, GOAL, ROWS};
pub use error::PuzzleError;
pub use node::{AStarNode, BfsNode, NodeId, SearchNode, SearchTree};
pub use search::{
    solve_astar, solve_astar_with_budget, solve_bfs, solve_bfs_with_budget, Algorithm,
    SearchBudget, Solution,
};
pub use shuffle::{is_solvable, shuffle, shuffle_seeded, shuffle_with, MAX_SHUFFLE_ATTEMPTS};
