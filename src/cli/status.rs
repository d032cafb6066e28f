//! CLI `status` command — show a day's calorie total.

use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

use crate::cli::report;
use crate::config::DisplayConfig;
use crate::store::{self, Store};

/// Print the total for the day `days_ago` days before `today`.
pub fn status(
    store: &Store,
    days_ago: u32,
    today: NaiveDate,
    display: &DisplayConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let day = store::day_key(today, days_ago)?;
    report::print_status(out, &store.doc, day, days_ago, None, display)?;
    Ok(())
}
