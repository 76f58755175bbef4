// tests/unit_frontier.rs
//! Tests for the frontier disciplines and the search-node arena.

use costar_core::error::CostarError;
use costar_core::frontier::{Frontier, NodeArena};

#[test]
fn test_queue_pops_in_push_order() {
    let mut arena = NodeArena::new();
    let n1 = arena.alloc("a".into(), None, None);
    let n2 = arena.alloc("b".into(), Some(n1), Some("m1".into()));
    let n3 = arena.alloc("c".into(), Some(n1), Some("m2".into()));

    let mut frontier = Frontier::queue();
    frontier.push(n1);
    frontier.push(n2);
    frontier.push(n3);

    assert_eq!(frontier.pop().unwrap(), n1, "Queue must be FIFO");
    assert_eq!(frontier.pop().unwrap(), n2, "Queue must be FIFO");
    assert_eq!(frontier.pop().unwrap(), n3, "Queue must be FIFO");
    assert!(frontier.is_empty());
}

#[test]
fn test_stack_pops_in_reverse_order() {
    let mut arena = NodeArena::new();
    let n1 = arena.alloc("a".into(), None, None);
    let n2 = arena.alloc("b".into(), Some(n1), Some("m1".into()));
    let n3 = arena.alloc("c".into(), Some(n1), Some("m2".into()));

    let mut frontier = Frontier::stack();
    frontier.push(n1);
    frontier.push(n2);
    frontier.push(n3);

    assert_eq!(frontier.pop().unwrap(), n3, "Stack must be LIFO");
    assert_eq!(frontier.pop().unwrap(), n2, "Stack must be LIFO");
    assert_eq!(frontier.pop().unwrap(), n1, "Stack must be LIFO");
    assert!(frontier.is_empty());
}

#[test]
fn test_pop_on_empty_frontier_is_an_error() {
    let mut queue = Frontier::queue();
    assert!(matches!(queue.pop(), Err(CostarError::EmptyFrontier)));

    let mut stack = Frontier::stack();
    assert!(matches!(stack.pop(), Err(CostarError::EmptyFrontier)));
}

#[test]
fn test_is_empty_tracks_push_and_pop() {
    let mut arena = NodeArena::new();
    let root = arena.alloc("a".into(), None, None);

    let mut frontier = Frontier::queue();
    assert!(frontier.is_empty());
    frontier.push(root);
    assert!(!frontier.is_empty());
    frontier.pop().unwrap();
    assert!(frontier.is_empty());
}

#[test]
fn test_arena_parent_chain() {
    let mut arena = NodeArena::new();
    let root = arena.alloc("a".into(), None, None);
    let child = arena.alloc("b".into(), Some(root), Some("m1".into()));

    let node = arena.get(child);
    assert_eq!(node.state, "b");
    assert_eq!(node.parent, Some(root));
    assert_eq!(node.action.as_deref(), Some("m1"));

    let root_node = arena.get(root);
    assert!(root_node.parent.is_none(), "Root has no parent");
    assert!(root_node.action.is_none(), "Root has no action");
}
