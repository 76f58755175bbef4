// src/resolver.rs
//! Free-text name resolution with caller-driven disambiguation.

use crate::error::{CostarError, Result};
use crate::store::{DatasetStore, PersonId};

/// One disambiguation choice: a person sharing the queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
}

/// Chooses among several people sharing a name. The resolver never guesses;
/// ambiguity is a human-in-the-loop interaction at the system boundary, and
/// this seam is where the console prompt, a programmatic callback, or a
/// fixed-first test harness plugs in.
pub trait Selector {
    /// Returns the id of the chosen candidate, or None to abort.
    fn select(&mut self, candidates: &[Candidate]) -> Option<PersonId>;
}

impl<F> Selector for F
where
    F: FnMut(&[Candidate]) -> Option<PersonId>,
{
    fn select(&mut self, candidates: &[Candidate]) -> Option<PersonId> {
        self(candidates)
    }
}

/// Unconditionally picks the first candidate. Selector for non-interactive
/// harnesses.
#[must_use]
pub fn first_match(candidates: &[Candidate]) -> Option<PersonId> {
    candidates.first().map(|c| c.id.clone())
}

/// Resolves free text to a unique person id. The lookup key is the
/// lowercased, trimmed text.
///
/// # Errors
/// Returns `NotFound` when the key matches nobody, when the selector
/// declines to choose, or when it returns an id outside the candidate list.
pub fn resolve(
    store: &DatasetStore,
    free_text: &str,
    selector: &mut dyn Selector,
) -> Result<PersonId> {
    let query = free_text.trim();
    let not_found = || CostarError::NotFound {
        query: query.to_string(),
    };

    let ids = store
        .ids_for_name(&query.to_lowercase())
        .ok_or_else(not_found)?;

    let mut candidates: Vec<Candidate> = ids
        .iter()
        .filter_map(|id| store.person(id))
        .map(|p| Candidate {
            id: p.id.clone(),
            name: p.name.clone(),
            birth: p.birth.clone(),
        })
        .collect();

    match candidates.len() {
        0 => Err(not_found()),
        1 => Ok(candidates.remove(0).id),
        _ => {
            // Id sets come out of a hash map; sort for a stable prompt.
            candidates.sort_by(|a, b| a.id.cmp(&b.id));
            let chosen = selector.select(&candidates).ok_or_else(not_found)?;
            if candidates.iter().any(|c| c.id == chosen) {
                Ok(chosen)
            } else {
                Err(not_found())
            }
        }
    }
}
