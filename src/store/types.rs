//! On-disk document shape.
//!
//! A single JSON object with three namespaces: [`Document::calories`] (daily
//! totals), [`Document::food`] (remembered foods), and [`Document::user`]
//! (preferences). Every map is a `BTreeMap` and the fields are declared in
//! alphabetical order, so serialization is key-sorted and diffs stay stable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Accumulated calories per day, keyed by `YYYY-MM-DD`.
    pub calories: BTreeMap<NaiveDate, f64>,
    /// Remembered foods, keyed by their case-sensitive name.
    pub food: BTreeMap<String, Food>,
    pub user: User,
}

/// A remembered food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Calories per portion.
    #[serde(rename = "cal", alias = "calories")]
    pub calories: f64,
    /// Free-text description, empty when none was given.
    #[serde(rename = "desc", alias = "description", default)]
    pub description: String,
}

/// User preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Daily calorie goal. Never stored as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl Document {
    /// Case-insensitive substring search over food names, sorted alphabetically.
    pub fn search_food(&self, needle: &str) -> Vec<&str> {
        let needle = needle.to_lowercase();
        // BTreeMap iteration is already in key order.
        self.food
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Current total for `day`, zero when nothing was eaten.
    pub fn total_for(&self, day: NaiveDate) -> f64 {
        self.calories.get(&day).copied().unwrap_or(0.0)
    }
}
