//! Configuration module for nav.
//!
//! This module owns the runtime configuration record and its sources:
//! - Hard-coded defaults, built fresh for every parse
//! - JSON config file overlays (merge by presence)
//! - Decoding and range checks for switch arguments
//!
//! # Configuration File
//!
//! Pass a JSON file with `-f`. Only the keys present are applied:
//!
//! ```json
//! {
//!   "DBUrl": "db.example.org",
//!   "DBPort": 6543,
//!   "ExcludedAfter": ["rcu", "sched"]
//! }
//! ```

mod defaults;
pub mod file;
mod types;
pub mod validation;

// Re-export main types
pub use defaults::{
    DEFAULT_DB_HOST, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_TARGET, DEFAULT_DB_USER,
    DEFAULT_OUTPUT_FORMAT, UNLIMITED_DEPTH,
};
pub use file::{config_schema, generate_example_config, load_config_file, ConfigOverlay};
pub use types::{DisplayMode, NavConfig, UnknownDisplayMode};
