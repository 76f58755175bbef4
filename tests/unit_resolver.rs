// tests/unit_resolver.rs
//! Tests for free-text name resolution and disambiguation.

use std::collections::HashSet;

use costar_core::error::CostarError;
use costar_core::resolver::{self, Candidate};
use costar_core::store::{DatasetStore, Person};

fn person(id: &str, name: &str, birth: Option<&str>) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        birth: birth.map(str::to_string),
        movies: HashSet::new(),
    }
}

fn store_with_two_sams() -> DatasetStore {
    let mut store = DatasetStore::new();
    store.insert_person(person("p1", "Sam Smith", Some("1950")));
    store.insert_person(person("p2", "Sam Smith", Some("1992")));
    store.insert_person(person("p3", "Uma Unique", None));
    store
}

#[test]
fn test_unique_name_resolves_directly() {
    let store = store_with_two_sams();
    let mut never = |_: &[Candidate]| -> Option<String> {
        panic!("Selector must not run for a unique name")
    };
    let id = resolver::resolve(&store, "Uma Unique", &mut never).unwrap();
    assert_eq!(id, "p3");
}

#[test]
fn test_lookup_is_trimmed_and_case_insensitive() {
    let store = store_with_two_sams();
    let id = resolver::resolve(&store, "  UMA unique ", &mut resolver::first_match).unwrap();
    assert_eq!(id, "p3");
}

#[test]
fn test_unknown_name_is_not_found() {
    let store = store_with_two_sams();
    let result = resolver::resolve(&store, "Nobody Here", &mut resolver::first_match);
    assert!(matches!(result, Err(CostarError::NotFound { .. })));
}

#[test]
fn test_ambiguous_name_surfaces_all_candidates() {
    let store = store_with_two_sams();
    let mut seen: Vec<String> = Vec::new();
    let mut pick_p2 = |candidates: &[Candidate]| -> Option<String> {
        seen = candidates.iter().map(|c| c.id.clone()).collect();
        Some("p2".to_string())
    };
    let id = resolver::resolve(&store, "Sam Smith", &mut pick_p2).unwrap();
    assert_eq!(id, "p2");
    assert_eq!(seen, ["p1", "p2"], "Both Sams must be offered");
}

#[test]
fn test_selection_outside_candidates_is_not_found() {
    let store = store_with_two_sams();
    let mut pick_other = |_: &[Candidate]| -> Option<String> { Some("p3".to_string()) };
    let result = resolver::resolve(&store, "Sam Smith", &mut pick_other);
    assert!(
        matches!(result, Err(CostarError::NotFound { .. })),
        "p3 is a real person but not a 'Sam Smith' candidate"
    );
}

#[test]
fn test_declined_selection_is_not_found() {
    let store = store_with_two_sams();
    let mut decline = |_: &[Candidate]| -> Option<String> { None };
    let result = resolver::resolve(&store, "Sam Smith", &mut decline);
    assert!(matches!(result, Err(CostarError::NotFound { .. })));
}

#[test]
fn test_first_match_picks_a_candidate() {
    let store = store_with_two_sams();
    let id = resolver::resolve(&store, "Sam Smith", &mut resolver::first_match).unwrap();
    assert!(id == "p1" || id == "p2", "first_match must stay in the set");
}
