// src/store/snapshot.rs
//! Whole-store snapshot persisted inside the dataset directory, so repeated
//! runs over the same large dataset skip CSV re-parsing entirely.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::DatasetStore;

const SNAPSHOT_FILE: &str = "store.json";

fn snapshot_path(dir: &Path) -> PathBuf {
    dir.join(SNAPSHOT_FILE)
}

/// Returns the cached store, or None when no usable snapshot exists.
/// An unreadable or corrupt snapshot is treated as missing; the caller
/// falls back to the CSV parse and overwrites it.
pub(super) fn read(dir: &Path) -> Option<DatasetStore> {
    let file = File::open(snapshot_path(dir)).ok()?;
    serde_json::from_reader(BufReader::new(file)).ok()
}

/// Advisory write: the caller records a failure but never fails the load.
pub(super) fn write(dir: &Path, store: &DatasetStore) -> std::io::Result<()> {
    let file = File::create(snapshot_path(dir))?;
    serde_json::to_writer(BufWriter::new(file), store).map_err(std::io::Error::from)
}
