// src/search.rs
//! Breadth-first shortest-path search over the co-starring graph.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::error::{CostarError, Result};
use crate::frontier::{Frontier, NodeArena, NodeId};
use crate::store::{DatasetStore, MovieId, PersonId};

/// One hop of a returned path: the shared movie and the person reached.
pub type PathStep = (MovieId, PersonId);

/// Finds the shortest chain of co-starring edges from `source` to `target`.
///
/// Returns `Ok(None)` when `source == target` (no path is reported for a
/// person to themself, by policy) and when the two are in disconnected
/// components. On success the steps run from the source outward; the source
/// itself is implicit and not an element.
///
/// The timeout is polled once per node expansion, not per neighbor, so a
/// neighbor-heavy node (a blockbuster with hundreds of co-stars) can
/// overshoot the nominal budget. Known latency-bound looseness.
///
/// # Errors
/// Returns `Timeout` when the elapsed wall-clock time exceeds `timeout`;
/// the abort is clean and no partial result is returned.
pub fn shortest_path(
    store: &DatasetStore,
    source: &str,
    target: &str,
    timeout: Duration,
) -> Result<Option<Vec<PathStep>>> {
    if source == target {
        return Ok(None);
    }

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::queue();
    let mut explored: HashSet<(MovieId, PersonId)> = HashSet::new();

    let root = arena.alloc(source.to_string(), None, None);
    frontier.push(root);

    let start = Instant::now();
    loop {
        if start.elapsed() > timeout {
            return Err(CostarError::Timeout { budget: timeout });
        }

        // An exhausted frontier means the components are disconnected.
        if frontier.is_empty() {
            return Ok(None);
        }

        let id = frontier.pop()?;
        let (state, action) = {
            let node = arena.get(id);
            (node.state.clone(), node.action.clone())
        };
        if let Some(action) = action {
            explored.insert((action, state.clone()));
        }

        for step in store.neighbors_for(&state) {
            if explored.contains(&step) {
                continue;
            }
            let (movie, person) = step;
            let reached_target = person == target;
            let child = arena.alloc(person, Some(id), Some(movie));
            if reached_target {
                return Ok(Some(reconstruct(&arena, child)));
            }
            frontier.push(child);
        }
    }
}

/// Walks the parent chain from the goal node back to the root, collecting
/// (movie, person) pairs, then reverses them into traversal order.
fn reconstruct(arena: &NodeArena, goal: NodeId) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut node = arena.get(goal);
    while let (Some(action), parent) = (&node.action, node.parent) {
        path.push((action.clone(), node.state.clone()));
        match parent {
            Some(parent) => node = arena.get(parent),
            None => break,
        }
    }
    path.reverse();
    path
}
