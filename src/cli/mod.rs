//! Command layer. One module per subcommand, each reading or mutating an
//! explicitly passed [`Store`](crate::store::Store) and writing its output to a
//! caller-supplied sink.

pub mod eat;
pub mod forget;
pub mod lookup;
pub mod remember;
pub mod report;
pub mod set;
pub mod status;

pub use eat::{eat, EatArgs, FoodSource};
pub use forget::forget;
pub use lookup::lookup;
pub use remember::remember;
pub use set::set;
pub use status::status;

/// Parse a finite calorie amount; negatives are allowed for corrections.
pub fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' must be a finite number"))
    }
}

/// Parse a calorie amount that must not be negative.
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    match parse_finite(s)? {
        value if value >= 0.0 => Ok(value),
        _ => Err(format!("'{s}' must be a non-negative number")),
    }
}
