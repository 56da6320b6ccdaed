//! nav: kernel symbol navigator
//!
//! Resolves the runtime configuration from defaults, an optional JSON config
//! file and the command line, then prints it as JSON for the navigator stages.
//!
//! Two leading commands bypass resolution:
//! - `nav config-schema` prints the JSON Schema of the config file
//! - `nav example-config` prints a config file holding every default

use anyhow::{Context, Result};
use nav::{config, parse_args, render_help, NavConfig, Resolution, SwitchRegistry};
use std::io::{self, Write as _};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Placeholder written instead of the database password.
const REDACTED: &str = "********";

const CONFIG_SCHEMA_COMMAND: &str = "config-schema";
const EXAMPLE_CONFIG_COMMAND: &str = "example-config";

fn print_document(document: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}

fn print_config(config: &NavConfig) -> Result<()> {
    let mut shown = config.clone();
    shown.db_password = REDACTED.to_string();

    let json = serde_json::to_string_pretty(&shown).context("serializing configuration")?;
    print_document(&json)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match std::env::args().nth(1).as_deref() {
        Some(CONFIG_SCHEMA_COMMAND) => return print_document(&config::config_schema()),
        Some(EXAMPLE_CONFIG_COMMAND) => {
            return print_document(&config::generate_example_config());
        }
        _ => {}
    }

    let registry = SwitchRegistry::builtin().context("building switch registry")?;

    match parse_args(&registry, std::env::args().skip(1)) {
        Ok(Resolution::HelpRequested) => {
            print!("{}", render_help(&registry));
            Ok(())
        }
        Ok(Resolution::Resolved(config)) => {
            tracing::debug!(
                symbol = %config.symbol,
                instance = config.instance,
                mode = %config.mode,
                "configuration resolved"
            );
            print_config(&config)
        }
        Err(rejected) => {
            eprint!("{}", render_help(&registry));
            Err(anyhow::Error::new(rejected.error).context("invalid command line"))
        }
    }
}
