//! Default configuration values for nav.
//!
//! The defaults are produced by a factory rather than kept in a shared
//! value, so every parse starts from a freshly built record.

use super::types::{DisplayMode, NavConfig};

/// Database host used when neither a config file nor `-d` overrides it.
pub const DEFAULT_DB_HOST: &str = "dbs.hqhome163.com";

/// PostgreSQL's well-known port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database user id.
pub const DEFAULT_DB_USER: &str = "alessandro";

/// Placeholder password, meant to be overridden.
pub const DEFAULT_DB_PASSWORD: &str = "<password>";

/// Database holding the kernel symbol tables.
pub const DEFAULT_DB_TARGET: &str = "kernel_bin";

/// Output format tag used when `-j` is absent.
pub const DEFAULT_OUTPUT_FORMAT: &str = "graphOnly";

/// Exploration depth meaning "no limit".
pub const UNLIMITED_DEPTH: u32 = 0;

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            db_host: DEFAULT_DB_HOST.to_string(),
            db_port: DEFAULT_DB_PORT,
            db_user: DEFAULT_DB_USER.to_string(),
            db_password: DEFAULT_DB_PASSWORD.to_string(),
            db_target_db: DEFAULT_DB_TARGET.to_string(),
            symbol: String::new(),
            instance: 0,
            mode: DisplayMode::Subsystems,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            max_depth: UNLIMITED_DEPTH,
            excluded_before: Vec::new(),
            excluded_after: Vec::new(),
            target_subsys: Vec::new(),
        }
    }
}
