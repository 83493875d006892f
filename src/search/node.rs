use std::ops::Index;

use crate::board::{Board, Move};

pub(crate) type NodeId = usize;

/// A board reached by a particular path. Never changed once pushed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub board: Board,
    pub g: u32,
    pub h: u32,
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Every node a search creates, addressed by index so children can point
/// back at their parent without shared ownership.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn root(&mut self, board: Board, h: u32) -> NodeId {
        self.push(Node {
            board,
            g: 0,
            h,
            mv: None,
            parent: None,
        })
    }

    pub fn child(&mut self, parent: NodeId, board: Board, mv: Move, h: u32) -> NodeId {
        let g = self.nodes[parent].g + 1;
        self.push(Node {
            board,
            g,
            h,
            mv: Some(mv),
            parent: Some(parent),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Moves from the root to `id`.
    pub fn moves(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self[id].g as usize);
        let mut current = &self[id];
        while let (Some(mv), Some(parent)) = (current.mv, current.parent) {
            moves.push(mv);
            current = &self[parent];
        }

        moves.reverse();
        moves
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}
