//! Command-line switch engine.
//!
//! The engine turns the raw argument stream into a [`NavConfig`]:
//! - [`SwitchRegistry`] holds the ordered catalog of switches
//! - [`SwitchAction`] is the handler bound to each switch
//! - [`parse_args`] drives the scan and checks mandatory switches
//! - [`render_help`] formats the catalog as usage text
//!
//! [`NavConfig`]: crate::config::NavConfig

mod handlers;
mod help;
mod parser;
mod registry;

pub use handlers::{ActionOutcome, SwitchAction};
pub use help::{render_help, APP_DESCRIPTION, APP_NAME};
pub use parser::{parse_args, ParserState, Rejected, RequiredSwitchTracker, Resolution};
pub use registry::{SwitchDescriptor, SwitchRegistry};
