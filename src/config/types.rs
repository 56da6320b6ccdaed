//! Configuration types for nav.
//!
//! [`NavConfig`] is the flat record handed to the navigator once the command
//! line has been resolved. Its serialized field names are the ones accepted
//! in a `-f` config file, so a dumped configuration can be fed back in.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavConfig {
    /// Database server host name
    #[serde(rename = "DBUrl")]
    pub db_host: String,
    /// Database server TCP port
    #[serde(rename = "DBPort")]
    pub db_port: u16,
    /// Database user id
    #[serde(rename = "DBUser")]
    pub db_user: String,
    /// Database password
    #[serde(rename = "DBPassword")]
    pub db_password: String,
    /// Name of the database holding the symbol tables
    #[serde(rename = "DBTargetDB")]
    pub db_target_db: String,
    /// Symbol the navigation starts from
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Kernel instance selector
    #[serde(rename = "Instance")]
    pub instance: i64,
    /// What the navigator prints
    #[serde(rename = "Mode")]
    pub mode: DisplayMode,
    /// Output format tag, passed through untouched
    #[serde(rename = "Jout")]
    pub output_format: String,
    /// Maximum call-flow exploration depth (0 = unlimited)
    #[serde(rename = "MaxDepth")]
    pub max_depth: u32,
    /// Subsystems excluded before the starting point
    #[serde(rename = "ExcludedBefore")]
    pub excluded_before: Vec<String>,
    /// Subsystems excluded after the starting point
    #[serde(rename = "ExcludedAfter")]
    pub excluded_after: Vec<String>,
    /// Subsystems targeted by [`DisplayMode::Targeted`]
    #[serde(rename = "TargetSubsys")]
    pub target_subsys: Vec<String>,
}

impl NavConfig {
    /// Whether call-flow exploration is bounded.
    #[must_use]
    pub const fn has_depth_limit(&self) -> bool {
        self.max_depth != 0
    }
}

// ============================================================================
// Display Mode
// ============================================================================

/// Output mode of the navigator, integer-coded on the command line and in
/// config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum DisplayMode {
    /// Every symbol in the call flow
    All = 0,
    /// Only the subsystems crossed by the call flow
    #[default]
    Subsystems = 1,
    /// Subsystems together with the symbols that cross them
    SubsystemsWithSymbols = 2,
    /// Only the subsystems listed in `TargetSubsys`
    Targeted = 3,
}

/// Integer code outside the supported [`DisplayMode`] range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported display mode {0} (supported: 0..=3)")]
pub struct UnknownDisplayMode(pub i64);

impl DisplayMode {
    /// Lowest accepted integer code.
    pub const MIN_CODE: i64 = 0;
    /// Highest accepted integer code.
    pub const MAX_CODE: i64 = 3;

    /// All modes in code order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Subsystems,
            Self::SubsystemsWithSymbols,
            Self::Targeted,
        ]
    }

    /// Integer code of this mode.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Subsystems => "subsystems",
            Self::SubsystemsWithSymbols => "subsystems+symbols",
            Self::Targeted => "targeted",
        }
    }
}

impl TryFrom<i64> for DisplayMode {
    type Error = UnknownDisplayMode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.code() == code)
            .ok_or(UnknownDisplayMode(code))
    }
}

impl From<DisplayMode> for i64 {
    fn from(mode: DisplayMode) -> Self {
        mode.code()
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.code(), self.name())
    }
}

impl JsonSchema for DisplayMode {
    fn schema_name() -> String {
        "DisplayMode".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        let mut schema = gen.subschema_for::<i64>().into_object();
        schema.metadata().description = Some(
            Self::all()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
        let number = schema.number();
        number.minimum = Some(Self::MIN_CODE as f64);
        number.maximum = Some(Self::MAX_CODE as f64);
        schema.into()
    }
}
