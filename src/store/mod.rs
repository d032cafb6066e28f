//! JSON-file backed store.
//!
//! The whole [`Document`] is read once at startup and rewritten in full by
//! [`Store::write`]. There are no query methods beyond a couple of helpers on
//! [`Document`]; commands mutate `store.doc` directly.

pub mod types;

pub use types::{Document, Food, User};

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{days_ago} days before {today} is not a valid date")]
    DayOutOfRange { today: NaiveDate, days_ago: u32 },
}

/// In-memory state plus the file it came from.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    pub doc: Document,
}

impl Store {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let doc = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store file yet, starting empty");
                Document::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::debug!(
            path = %path.display(),
            foods = doc.food.len(),
            days = doc.calories.len(),
            "store loaded"
        );
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the full current state.
    ///
    /// Creates the parent directory if needed. Writes to a temp sibling and
    /// renames it into place.
    pub fn write(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = to_pretty_json(&self.doc)?;

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}

/// Four-space indented JSON, newline terminated.
fn to_pretty_json(doc: &Document) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// The calendar day `days_ago` days before `today`.
pub fn day_key(today: NaiveDate, days_ago: u32) -> Result<NaiveDate, StoreError> {
    today
        .checked_sub_days(Days::new(u64::from(days_ago)))
        .ok_or(StoreError::DayOutOfRange { today, days_ago })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_counts_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(day_key(today, 0).unwrap(), today);
        assert_eq!(
            day_key(today, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            day_key(today, 366).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
    }

    #[test]
    fn day_key_rejects_underflow() {
        let err = day_key(NaiveDate::MIN, 1).unwrap_err();
        assert!(matches!(err, StoreError::DayOutOfRange { .. }));
    }

    #[test]
    fn serialization_is_sorted_and_indented() {
        let mut doc = Document::default();
        doc.food.insert(
            "zucchini".into(),
            Food {
                calories: 17.0,
                description: "raw".into(),
            },
        );
        doc.food.insert(
            "apple".into(),
            Food {
                calories: 52.0,
                description: String::new(),
            },
        );
        doc.calories
            .insert(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 300.0);
        doc.user.target = Some(2000.0);

        let json = String::from_utf8(to_pretty_json(&doc).unwrap()).unwrap();
        let expected = r#"{
    "calories": {
        "2024-01-02": 300.0
    },
    "food": {
        "apple": {
            "cal": 52.0,
            "desc": ""
        },
        "zucchini": {
            "cal": 17.0,
            "desc": "raw"
        }
    },
    "user": {
        "target": 2000.0
    }
}
"#;
        assert_eq!(json, expected);
    }
}
