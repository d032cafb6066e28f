//! CLI `eat` command — add calories to a day's total.

use anyhow::{ensure, Result};
use chrono::NaiveDate;
use std::io::Write;

use crate::cli::report;
use crate::config::DisplayConfig;
use crate::store::{self, Document, Store};

/// Where the per-portion calorie value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodSource {
    /// Look the food up by name, falling back to a fuzzy match.
    Named(String),
    /// Use this many calories directly.
    Calories(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EatArgs {
    pub source: FoodSource,
    pub portions: f64,
    pub days_ago: u32,
}

/// Add `portions` times the source's calories to the total of the chosen day.
///
/// The store is written before the status is printed, so the reported total is
/// always the persisted one. An unknown or ambiguous food name prints a notice
/// and leaves the store untouched.
pub fn eat(
    store: &mut Store,
    args: &EatArgs,
    today: NaiveDate,
    display: &DisplayConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let base = match &args.source {
        FoodSource::Named(query) => match resolve_calories(&store.doc, query, out)? {
            Some(calories) => calories,
            None => return Ok(()),
        },
        FoodSource::Calories(calories) => *calories,
    };

    let day = store::day_key(today, args.days_ago)?;
    let added = base * args.portions;
    let total = store.doc.total_for(day) + added;
    ensure!(
        total.is_finite(),
        "adding {base} x {} calories would overflow the total for {day}",
        args.portions
    );
    store.doc.calories.insert(day, total);
    store.write()?;

    tracing::debug!(%day, added, total, "calories added");

    report::print_status(out, &store.doc, day, args.days_ago, Some(added), display)?;
    Ok(())
}

/// Exact name first, then a unique case-insensitive substring match.
fn resolve_calories(doc: &Document, query: &str, out: &mut dyn Write) -> Result<Option<f64>> {
    if let Some(food) = doc.food.get(query) {
        return Ok(Some(food.calories));
    }

    match doc.search_food(query).as_slice() {
        [name] => {
            writeln!(
                out,
                "No match for '{query}', but found '{name}'. Using this instead."
            )?;
            Ok(Some(doc.food[*name].calories))
        }
        matches => {
            tracing::debug!(query, candidates = matches.len(), "no unique food match");
            writeln!(out, "Could not find '{query}' in the food database.")?;
            Ok(None)
        }
    }
}
