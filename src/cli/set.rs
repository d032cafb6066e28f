//! CLI `set` command — personal parameters that shape the status report.

use anyhow::{ensure, Result};
use std::io::Write;

use crate::store::Store;

/// Set the daily calorie target. A target of zero clears it, since the status
/// report divides by it. Without a value, print the current target instead.
pub fn set(store: &mut Store, target: Option<f64>, out: &mut dyn Write) -> Result<()> {
    let Some(target) = target else {
        match store.doc.user.target {
            Some(target) => writeln!(out, "Daily target: {target:.0} calories")?,
            None => writeln!(out, "No daily target set.")?,
        }
        return Ok(());
    };

    ensure!(target >= 0.0, "target must not be negative, got {target}");

    store.doc.user.target = (target != 0.0).then_some(target);
    store.write()?;

    tracing::debug!(target = ?store.doc.user.target, "target updated");
    Ok(())
}
