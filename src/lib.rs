//! **Runtime configuration resolver for the `nav` kernel symbol navigator.**
//!
//! `nav` walks the call graph of a kernel symbol stored in a database. Before
//! it can do anything it needs a single, immutable [`NavConfig`], resolved
//! from three layers:
//!
//! 1. Built-in defaults ([`NavConfig::default`])
//! 2. An optional JSON config file, given with `-f` and merged by presence
//! 3. Command-line switches, applied left to right
//!
//! ## Core Concepts & Modules
//!
//! - **[`config`]**: the [`NavConfig`] record, its defaults, the JSON overlay
//!   loader and the decoding rules for switch arguments.
//! - **[`switches`]**: the [`SwitchRegistry`] catalog, the [`SwitchAction`]
//!   handlers, the sequential [`parse_args`] scanner and the usage renderer.
//! - **[`error`]**: the [`NavError`] hierarchy.
//!
//! ## Getting Started
//!
//! ```
//! use nav::{parse_args, Resolution, SwitchRegistry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = SwitchRegistry::builtin()?;
//!     let resolution = parse_args(&registry, ["-s", "vfs_read", "-i", "1", "-x", "3"])
//!         .map_err(|rejected| rejected.error)?;
//!
//!     if let Resolution::Resolved(config) = resolution {
//!         assert_eq!(config.symbol, "vfs_read");
//!         assert_eq!(config.max_depth, 3);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A failed parse never leaks the half-applied configuration: the caller gets
//! the error together with a fresh default [`NavConfig`] in [`Rejected`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors sections are implied by the Result types
    clippy::missing_errors_doc,
    // Registration calls pass the argument/mandatory flags positionally
    clippy::fn_params_excessive_bools
)]

pub mod config;
pub mod error;
pub mod switches;

// Re-export main types for convenience
pub use config::{ConfigOverlay, DisplayMode, NavConfig};
pub use error::{DecodeErrorKind, NavError, RegistryError, Result};
pub use switches::{
    parse_args, render_help, Rejected, RequiredSwitchTracker, Resolution, SwitchAction,
    SwitchDescriptor, SwitchRegistry,
};
