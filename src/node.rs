//! Search nodes and the arena that owns them.
//!
//! Nodes never point at each other directly: a node stores the [`NodeId`] of
//! its parent inside a [`SearchTree`], so the backward links always form a
//! tree rooted at the start board.

use crate::board::Board;

/// Position of a node inside its [`SearchTree`]. Ids grow with insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Shared shape of the node kinds the solvers expand.
pub trait SearchNode: Sized {
    fn root(board: Board) -> Self;

    /// A node for `board` reached in one move from `self`, stored at `parent`.
    fn child(&self, parent: NodeId, board: Board) -> Self;

    fn board(&self) -> &Board;

    fn parent(&self) -> Option<NodeId>;

    /// Children for every legal move of the blank, in successor order.
    fn expand(&self, id: NodeId) -> Vec<Self> {
        self.board()
            .successors()
            .map(|(board, _)| self.child(id, board))
            .collect()
    }
}

/// Node tracking path cost and the Manhattan estimate for A*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AStarNode {
    board: Board,
    parent: Option<NodeId>,
    g_cost: u32,
    h_cost: u32,
}

impl AStarNode {
    fn new(board: Board, g_cost: u32, parent: Option<NodeId>) -> Self {
        Self {
            board,
            parent,
            g_cost,
            h_cost: board.manhattan_distance(),
        }
    }

    /// Moves from the start board.
    pub fn g_cost(&self) -> u32 {
        self.g_cost
    }

    pub fn h_cost(&self) -> u32 {
        self.h_cost
    }

    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl SearchNode for AStarNode {
    fn root(board: Board) -> Self {
        Self::new(board, 0, None)
    }

    fn child(&self, parent: NodeId, board: Board) -> Self {
        Self::new(board, self.g_cost + 1, Some(parent))
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsNode {
    board: Board,
    parent: Option<NodeId>,
}

impl SearchNode for BfsNode {
    fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
        }
    }

    fn child(&self, parent: NodeId, board: Board) -> Self {
        Self {
            board,
            parent: Some(parent),
        }
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Growable arena holding every node created during one search.
#[derive(Debug)]
pub struct SearchTree<N> {
    nodes: Vec<N>,
}

impl<N: SearchNode> SearchTree<N> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn insert(&mut self, node: N) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &N {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Boards from the root down to `id`, both included.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path: Vec<Board> = std::iter::successors(Some(id), |&id| self.get(id).parent())
            .map(|id| *self.get(id).board())
            .collect();
        path.reverse();
        path
    }
}

impl<N: SearchNode> Default for SearchTree<N> {
    fn default() -> Self {
        Self::new()
    }
}
