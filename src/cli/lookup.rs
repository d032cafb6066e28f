//! CLI `lookup` command — show remembered foods matching a search string.

use anyhow::Result;
use std::io::Write;

use crate::store::Store;

/// Print a table of foods matching `needle`.
///
/// With `exact`, only a food named exactly `needle` matches. Otherwise any
/// food whose name contains `needle`, ignoring case.
pub fn lookup(store: &Store, needle: &str, exact: bool, out: &mut dyn Write) -> Result<()> {
    let results: Vec<&str> = if exact {
        store
            .doc
            .food
            .get_key_value(needle)
            .map(|(name, _)| name.as_str())
            .into_iter()
            .collect()
    } else {
        store.doc.search_food(needle)
    };

    if results.is_empty() {
        writeln!(out, "Found no match.")?;
        return Ok(());
    }

    if results.len() == 1 {
        writeln!(out, "Found one match:\n")?;
    } else {
        writeln!(out, "Found {} matches:\n", results.len())?;
    }

    let width = results
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    writeln!(out, "{:<width$}  {:>5}  {}", "name", "cal", "description")?;
    for name in results {
        let food = &store.doc.food[name];
        writeln!(
            out,
            "{:<width$}  {:>5.0}  {}",
            name, food.calories, food.description
        )?;
    }

    Ok(())
}
