// src/frontier.rs
//! Search-node arena and the frontier disciplines.

use std::collections::VecDeque;

use crate::error::{CostarError, Result};
use crate::store::{MovieId, PersonId};

/// Handle into the search arena. Handles are only ever minted by
/// [`NodeArena::alloc`], so indexing with one cannot miss.
pub type NodeId = usize;

/// One node in the search tree: the person reached, the node that produced
/// it, and the movie that connects the two. The root has neither.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: PersonId,
    pub parent: Option<NodeId>,
    pub action: Option<MovieId>,
}

/// Arena backing one search call. Children hold their parent's handle for
/// path reconstruction; parents never reference children.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(
        &mut self,
        state: PersonId,
        parent: Option<NodeId>,
        action: Option<MovieId>,
    ) -> NodeId {
        self.nodes.push(Node {
            state,
            parent,
            action,
        });
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

/// The working set of not-yet-expanded nodes. The removal-order policy is
/// the only difference between the variants; the search engine is written
/// against push/pop/is_empty alone. Shortest-path correctness requires the
/// queue discipline specifically.
#[derive(Debug)]
pub enum Frontier {
    /// LIFO: pops the most recently pushed node (depth-first order).
    Stack(Vec<NodeId>),
    /// FIFO: pops the earliest pushed node still present (breadth-first order).
    Queue(VecDeque<NodeId>),
}

impl Frontier {
    #[must_use]
    pub fn stack() -> Self {
        Self::Stack(Vec::new())
    }

    #[must_use]
    pub fn queue() -> Self {
        Self::Queue(VecDeque::new())
    }

    pub fn push(&mut self, node: NodeId) {
        match self {
            Self::Stack(nodes) => nodes.push(node),
            Self::Queue(nodes) => nodes.push_back(node),
        }
    }

    /// Removes the next node according to the discipline.
    ///
    /// # Errors
    /// Returns `EmptyFrontier` if the frontier is empty. The search engine
    /// checks `is_empty` before popping, so hitting this is a contract
    /// violation by the caller, not a runtime condition.
    pub fn pop(&mut self) -> Result<NodeId> {
        let node = match self {
            Self::Stack(nodes) => nodes.pop(),
            Self::Queue(nodes) => nodes.pop_front(),
        };
        node.ok_or(CostarError::EmptyFrontier)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Stack(nodes) => nodes.is_empty(),
            Self::Queue(nodes) => nodes.is_empty(),
        }
    }
}
