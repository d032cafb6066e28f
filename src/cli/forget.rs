//! CLI `forget` command — remove a food from the database.

use anyhow::Result;

use crate::store::Store;

/// Remove `name` from the food database. Unknown names are ignored and
/// nothing is written. Returns whether an entry was removed.
pub fn forget(store: &mut Store, name: &str) -> Result<bool> {
    if store.doc.food.remove(name).is_none() {
        tracing::debug!(name, "nothing to forget");
        return Ok(false);
    }

    store.write()?;
    tracing::debug!(name, "food forgotten");
    Ok(true)
}
