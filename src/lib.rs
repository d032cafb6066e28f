//! Minimalistic calorie tracking.
//!
//! `diet` remembers the calories of foods you eat often, keeps a running total
//! per day, and compares it against an optional daily target:
//!
//! ```text
//! $ diet remember egg 78 boiled
//! $ diet set 2000
//! $ diet eat egg -n 2
//! Added 156 calories for today. Daily total: 156
//! 8% of targeted 2000 calories
//! ```
//!
//! # Storage
//!
//! Everything lives in one JSON document (`db.json` in the per-OS data
//! directory) with three namespaces:
//!
//! | Field | Contents |
//! |-------|----------|
//! | `calories` | `YYYY-MM-DD` → accumulated calories for that day |
//! | `food` | name → `{ "cal": …, "desc": … }` |
//! | `user` | optional `target` daily goal |
//!
//! The document is loaded once per invocation and rewritten in full, with
//! sorted keys, by each command that changes it.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`store`] — The JSON document, its load and write paths, and day keys
//! - [`cli`] — The `eat`, `remember`, `forget`, `lookup`, `set`, and `status` commands

pub mod cli;
pub mod config;
pub mod store;
