// src/store/load.rs
//! CSV parsing and the snapshot fast path.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::snapshot;
use super::{DatasetStore, Movie, Person};
use crate::error::{CostarError, Result};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Where the loaded store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Deserialized from the snapshot file; no CSV was touched.
    Snapshot,
    /// Parsed from the CSV tables. The snapshot write is advisory and its
    /// failure never fails the load, so the flag records whether it stuck.
    Csv { snapshot_written: bool },
}

pub struct LoadOutcome {
    pub store: DatasetStore,
    pub origin: LoadOrigin,
}

pub(super) fn load(dir: &Path) -> Result<LoadOutcome> {
    if let Some(store) = snapshot::read(dir) {
        return Ok(LoadOutcome {
            store,
            origin: LoadOrigin::Snapshot,
        });
    }

    let store = parse_tables(dir)?;
    let snapshot_written = snapshot::write(dir, &store).is_ok();
    Ok(LoadOutcome {
        store,
        origin: LoadOrigin::Csv { snapshot_written },
    })
}

fn parse_tables(dir: &Path) -> Result<DatasetStore> {
    let mut store = DatasetStore::new();
    load_people(&dir.join("people.csv"), &mut store)?;
    load_movies(&dir.join("movies.csv"), &mut store)?;
    load_stars(&dir.join("stars.csv"), &mut store)?;
    Ok(store)
}

fn load_people(path: &Path, store: &mut DatasetStore) -> Result<()> {
    let mut reader = open_table(path)?;
    for row in reader.deserialize() {
        let row: PersonRow = row.map_err(|e| table_error(path, &e))?;
        store.insert_person(Person {
            id: row.id,
            name: row.name,
            birth: (!row.birth.is_empty()).then_some(row.birth),
            movies: HashSet::new(),
        });
    }
    Ok(())
}

fn load_movies(path: &Path, store: &mut DatasetStore) -> Result<()> {
    let mut reader = open_table(path)?;
    for row in reader.deserialize() {
        let row: MovieRow = row.map_err(|e| table_error(path, &e))?;
        store.insert_movie(Movie {
            id: row.id,
            title: row.title,
            year: row.year,
            stars: HashSet::new(),
        });
    }
    Ok(())
}

fn load_stars(path: &Path, store: &mut DatasetStore) -> Result<()> {
    let mut reader = open_table(path)?;
    for row in reader.deserialize() {
        let row: StarRow = row.map_err(|e| table_error(path, &e))?;
        // Rows naming unknown ids are dropped here, not surfaced.
        store.add_star(&row.person_id, &row.movie_id);
    }
    Ok(())
}

fn open_table(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(|e| table_error(path, &e))
}

fn table_error(path: &Path, err: &dyn std::fmt::Display) -> CostarError {
    CostarError::DataLoad {
        reason: err.to_string(),
        path: path.to_path_buf(),
    }
}
