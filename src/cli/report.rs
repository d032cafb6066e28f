//! Status message and the ASCII target bar shared by `eat` and `status`.

use chrono::NaiveDate;
use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::store::Document;

/// Geometry of the target progress bar.
///
/// Under target the border spans the full width and the fill grows toward it.
/// At or over target the fill spans the full width and the border shrinks, so
/// the border still marks where the target sits inside the overflowing fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub width: usize,
    pub border: usize,
    pub fill: usize,
}

impl Bar {
    pub fn new(total: f64, target: f64, width: usize) -> Self {
        let width = width.max(2);
        let w = width as f64;
        let (border, fill) = if total < target {
            (width, scale(w * total / target, 0, width))
        } else {
            (scale(w * target / total, 2, width), width)
        };
        Self {
            width,
            border,
            fill,
        }
    }

    /// Top frame, body, bottom frame.
    pub fn lines(&self) -> [String; 3] {
        let frame = format!(" {} ", "-".repeat(self.border - 2));
        let body = format!(
            "{}{}",
            "=".repeat(self.fill),
            " ".repeat(self.width - self.fill)
        );
        let middle = format!("|{}|{}", &body[..self.border - 2], &body[self.border..]);
        [frame.clone(), middle, frame]
    }
}

// Ties go to the even neighbour, so 0.5 and 2.5 cells become 0 and 2.
fn scale(value: f64, min: usize, max: usize) -> usize {
    value.round_ties_even().clamp(min as f64, max as f64) as usize
}

/// Human label for a day: `today`, `yesterday`, or e.g. `Monday, 2024-01-01`.
pub fn day_label(day: NaiveDate, days_ago: u32) -> String {
    match days_ago {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        _ => day.format("%A, %Y-%m-%d").to_string(),
    }
}

/// Print the daily total for `day`, with an "added" clause when `added` is set,
/// followed by the target percentage and bar if the user has a target.
pub fn print_status(
    out: &mut dyn Write,
    doc: &Document,
    day: NaiveDate,
    days_ago: u32,
    added: Option<f64>,
    display: &DisplayConfig,
) -> io::Result<()> {
    let total = doc.total_for(day);
    let label = day_label(day, days_ago);

    match added {
        Some(added) => writeln!(
            out,
            "Added {added:.0} calories for {label}. Daily total: {total:.0}"
        )?,
        None => writeln!(out, "Daily total for {label}: {total}")?,
    }

    if let Some(target) = doc.user.target {
        writeln!(
            out,
            "{:.0}% of targeted {:.0} calories",
            total / target * 100.0,
            target
        )?;
        for line in Bar::new(total, target, display.bar_width).lines() {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
