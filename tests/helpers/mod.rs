#![allow(dead_code)]

use chrono::NaiveDate;
use diet::config::DisplayConfig;
use diet::store::Store;
use std::path::PathBuf;
use tempfile::TempDir;

/// A store backed by a file inside a fresh temp dir. The dir is returned so it
/// outlives the test body.
pub fn test_store() -> (TempDir, Store) {
    let tmp = TempDir::new().unwrap();
    let store = Store::load(db_path(&tmp)).unwrap();
    (tmp, store)
}

/// Path of the store file inside `tmp`. Nested so writes must create the dir.
pub fn db_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("diet").join("db.json")
}

/// Fixed reference date: Monday, 2024-01-15.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

pub fn display() -> DisplayConfig {
    DisplayConfig::default()
}

/// Re-read the store from disk, as a later invocation would.
pub fn reload(store: &Store) -> Store {
    Store::load(store.path()).unwrap()
}

/// Run `f` with an output buffer and return what it printed.
pub fn capture(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}
