//! CLI `remember` command — store a food with its calories.

use anyhow::{ensure, Result};

use crate::store::{Food, Store};

/// Store `name` with its calories and description, replacing any previous
/// entry under the same name. Returns the replaced entry, if any.
pub fn remember(
    store: &mut Store,
    name: &str,
    calories: f64,
    description: &str,
) -> Result<Option<Food>> {
    ensure!(
        calories >= 0.0,
        "calories must not be negative, got {calories}"
    );

    let previous = store.doc.food.insert(
        name.to_string(),
        Food {
            calories,
            description: description.to_string(),
        },
    );
    store.write()?;

    tracing::debug!(name, calories, replaced = previous.is_some(), "food remembered");
    Ok(previous)
}
