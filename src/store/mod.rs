// src/store/mod.rs
//! The in-memory dataset: people, movies, and the starred-in relation.

mod load;
mod snapshot;

pub use load::{LoadOrigin, LoadOutcome};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::Result;

pub type PersonId = String;
pub type MovieId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
    pub movies: HashSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub stars: HashSet<PersonId>,
}

/// The co-starring graph plus the name index, read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    /// Lowercased display name -> ids sharing it. Names are not unique keys.
    names: HashMap<String, HashSet<PersonId>>,
}

impl DatasetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a dataset directory, preferring its snapshot.
    ///
    /// # Errors
    /// Returns `DataLoad` if a required CSV file is missing or malformed.
    pub fn load(dir: &Path) -> Result<LoadOutcome> {
        load::load(dir)
    }

    /// Inserts a person and indexes their name.
    pub fn insert_person(&mut self, person: Person) {
        self.names
            .entry(person.name.to_lowercase())
            .or_default()
            .insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Links a person to a movie they starred in. Returns false (dropping
    /// the edge) when either id is unknown, so cross-table references hold
    /// by construction.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        if !self.people.contains_key(person_id) || !self.movies.contains_key(movie_id) {
            return false;
        }
        if let Some(person) = self.people.get_mut(person_id) {
            person.movies.insert(movie_id.to_string());
        }
        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.stars.insert(person_id.to_string());
        }
        true
    }

    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    #[must_use]
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Looks up the ids sharing a lowercased name.
    #[must_use]
    pub fn ids_for_name(&self, key: &str) -> Option<&HashSet<PersonId>> {
        self.names.get(key)
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Returns (movie, person) pairs for everyone who shared a movie with
    /// the given person. The person themself appears in the result; the
    /// search engine's explored set keeps that from looping.
    #[must_use]
    pub fn neighbors_for(&self, person_id: &str) -> HashSet<(MovieId, PersonId)> {
        let mut neighbors = HashSet::new();
        let Some(person) = self.people.get(person_id) else {
            return neighbors;
        };
        for movie_id in &person.movies {
            let Some(movie) = self.movies.get(movie_id) else {
                continue;
            };
            for star in &movie.stars {
                neighbors.insert((movie_id.clone(), star.clone()));
            }
        }
        neighbors
    }
}
