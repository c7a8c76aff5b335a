use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    time::Instant,
};

use log::debug;

use super::{SearchBudget, Solution};
use crate::{
    board::Board,
    node::{AStarNode, SearchNode, SearchTree},
};

/// Shortest path to the goal using A* with the Manhattan heuristic.
pub fn solve_astar(start: Board) -> Solution {
    solve_astar_with_budget(start, &SearchBudget::unlimited())
}

/// A* bounded by `budget`.
///
/// The frontier is ordered by `f_cost`; equal costs pop in insertion order
/// (node ids increase monotonically), which fixes the returned path among
/// equally short ones.
pub fn solve_astar_with_budget(start: Board, budget: &SearchBudget) -> Solution {
    let started = Instant::now();
    debug!("A* starting from {:?}", start.cells());

    let mut tree = SearchTree::new();
    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<Board, u32> = HashMap::new();

    let root = AStarNode::root(start);
    best_g.insert(start, root.g_cost());
    let root_f = root.f_cost();
    let root_id = tree.insert(root);
    open.push(Reverse((root_f, root_id)));

    let mut expanded = 0;
    while let Some(Reverse((_, id))) = open.pop() {
        if !budget.allows(expanded) {
            debug!("A* stopped by its budget after {expanded} expansions");
            return Solution::out_of_budget(expanded, started.elapsed());
        }
        expanded += 1;

        let node = tree.get(id);
        if node.board().is_goal() {
            let path = tree.path_to(id);
            debug!(
                "A* found a {} move path after {expanded} expansions ({} nodes created)",
                path.len() - 1,
                tree.len()
            );
            return Solution::found(path, expanded, started.elapsed());
        }

        for child in node.expand(id) {
            let g_cost = child.g_cost();
            let improves = best_g
                .get(child.board())
                .map_or(true, |&best| g_cost < best);
            if improves {
                best_g.insert(*child.board(), g_cost);
                let f_cost = child.f_cost();
                let child_id = tree.insert(child);
                open.push(Reverse((f_cost, child_id)));
            }
        }
    }

    debug!("A* exhausted its frontier after {expanded} expansions");
    Solution::unreachable(expanded, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, GOAL};

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn goal_start_needs_no_moves() {
        let solution = solve_astar(GOAL);
        assert_eq!(solution.path, Some(vec![GOAL]));
        assert_eq!(solution.move_count(), Some(0));
        assert_eq!(solution.expanded, 1);
    }

    #[test]
    fn one_move_from_goal() {
        let start = board("1 0 3 8 2 4 7 6 5");
        let solution = solve_astar(start);
        assert_eq!(solution.path, Some(vec![start, GOAL]));
        assert_eq!(solution.moves(), Some(vec![Move::Down]));
        assert!(solution.expanded >= 1);
    }

    #[test]
    fn textbook_board_takes_five_moves() {
        let start = board("2 8 3 1 6 4 7 0 5");
        let solution = solve_astar(start);
        assert_eq!(solution.move_count(), Some(5));
        assert_eq!(
            solution.moves(),
            Some(vec![Move::Up, Move::Up, Move::Left, Move::Down, Move::Right])
        );
    }

    #[test]
    fn unsolvable_board_yields_no_path() {
        // tiles 1 and 2 swapped: opposite inversion parity to the goal
        let start = board("2 1 3 8 0 4 7 6 5");
        let solution = solve_astar(start);
        assert_eq!(solution.path, None);
        assert!(!solution.budget_exhausted);
        assert!(solution.expanded >= 181_440);
    }

    #[test]
    fn budget_stops_the_search() {
        let start = board("2 8 3 1 6 4 7 0 5");
        let solution = solve_astar_with_budget(start, &SearchBudget::with_max_expansions(2));
        assert_eq!(solution.path, None);
        assert!(solution.budget_exhausted);
        assert_eq!(solution.expanded, 2);
    }
}
