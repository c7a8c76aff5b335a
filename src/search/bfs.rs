use std::{
    collections::{HashSet, VecDeque},
    time::Instant,
};

use log::debug;

use super::{SearchBudget, Solution};
use crate::{
    board::Board,
    node::{BfsNode, SearchNode, SearchTree},
};

/// Shortest path to the goal by breadth-first search.
pub fn solve_bfs(start: Board) -> Solution {
    solve_bfs_with_budget(start, &SearchBudget::unlimited())
}

/// Breadth-first search bounded by `budget`.
///
/// Boards are marked visited when first discovered, so each one is queued at
/// most once.
pub fn solve_bfs_with_budget(start: Board, budget: &SearchBudget) -> Solution {
    let started = Instant::now();
    debug!("BFS starting from {:?}", start.cells());

    let mut tree = SearchTree::new();
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();

    visited.insert(start);
    queue.push_back(tree.insert(BfsNode::root(start)));

    let mut expanded = 0;
    while let Some(id) = queue.pop_front() {
        if !budget.allows(expanded) {
            debug!("BFS stopped by its budget after {expanded} expansions");
            return Solution::out_of_budget(expanded, started.elapsed());
        }
        expanded += 1;

        let node = tree.get(id);
        if node.board().is_goal() {
            let path = tree.path_to(id);
            debug!(
                "BFS found a {} move path after {expanded} expansions ({} boards seen)",
                path.len() - 1,
                visited.len()
            );
            return Solution::found(path, expanded, started.elapsed());
        }

        for child in node.expand(id) {
            if visited.insert(*child.board()) {
                queue.push_back(tree.insert(child));
            }
        }
    }

    debug!("BFS exhausted its frontier after {expanded} expansions");
    Solution::unreachable(expanded, started.elapsed())
}
