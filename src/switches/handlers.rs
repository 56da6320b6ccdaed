//! Switch handlers.
//!
//! Every registered switch is bound to one [`SwitchAction`]. Applying an
//! action is the only way the working configuration changes during a parse.

use crate::config::{file, validation, NavConfig};
use crate::error::{NavError, Result};
use std::path::Path;

/// What a switch does to the working configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchAction {
    /// Set the output format tag verbatim
    OutputFormat,
    /// Set the symbol to navigate from
    Symbol,
    /// Set the instance selector
    Instance,
    /// Overlay a JSON config file
    ConfigFile,
    /// Set the database user
    DbUser,
    /// Set the database password
    DbPassword,
    /// Set the database host
    DbHost,
    /// Set the database port
    DbPort,
    /// Set the display mode
    DisplayMode,
    /// Set the maximum exploration depth
    MaxDepth,
    /// Ask for the usage text
    Help,
}

/// Result of applying a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Keep scanning
    Continue,
    /// Stop scanning and show usage
    HelpRequested,
}

impl SwitchAction {
    /// Whether the action consumes the following token.
    #[must_use]
    pub const fn takes_argument(self) -> bool {
        !matches!(self, Self::Help)
    }

    /// Apply the action for `switch` to `config`.
    ///
    /// `arg` is the token that followed the switch, if the switch takes one.
    pub fn apply(
        self,
        switch: &str,
        config: &mut NavConfig,
        arg: Option<&str>,
    ) -> Result<ActionOutcome> {
        let value = || arg.ok_or_else(|| NavError::missing_argument(switch));
        match self {
            Self::Help => return Ok(ActionOutcome::HelpRequested),
            Self::OutputFormat => config.output_format = value()?.to_string(),
            Self::Symbol => config.symbol = value()?.to_string(),
            Self::Instance => config.instance = validation::parse_integer(switch, value()?)?,
            Self::ConfigFile => file::overlay_config_file(Path::new(value()?), config)?,
            Self::DbUser => config.db_user = value()?.to_string(),
            Self::DbPassword => config.db_password = value()?.to_string(),
            Self::DbHost => config.db_host = value()?.to_string(),
            Self::DbPort => config.db_port = validation::parse_port(switch, value()?)?,
            Self::DisplayMode => config.mode = validation::parse_display_mode(switch, value()?)?,
            Self::MaxDepth => config.max_depth = validation::parse_depth(switch, value()?)?,
        }
        Ok(ActionOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayMode;

    fn apply(action: SwitchAction, arg: &str) -> Result<NavConfig> {
        let mut config = NavConfig::default();
        action.apply("-t", &mut config, Some(arg))?;
        Ok(config)
    }

    #[test]
    fn test_verbatim_string_handlers() {
        let config = apply(SwitchAction::OutputFormat, "JsonOutputB").unwrap();
        assert_eq!(config.output_format, "JsonOutputB");
        let config = apply(SwitchAction::Symbol, "__x64_sys_open").unwrap();
        assert_eq!(config.symbol, "__x64_sys_open");
        assert_eq!(apply(SwitchAction::DbUser, "root").unwrap().db_user, "root");
        let config = apply(SwitchAction::DbPassword, "s3cret").unwrap();
        assert_eq!(config.db_password, "s3cret");
        let config = apply(SwitchAction::DbHost, "localhost").unwrap();
        assert_eq!(config.db_host, "localhost");
    }

    #[test]
    fn test_numeric_handlers() {
        assert_eq!(apply(SwitchAction::Instance, "16").unwrap().instance, 16);
        assert_eq!(apply(SwitchAction::DbPort, "5433").unwrap().db_port, 5433);
        let config = apply(SwitchAction::DisplayMode, "0").unwrap();
        assert_eq!(config.mode, DisplayMode::All);
        assert_eq!(apply(SwitchAction::MaxDepth, "5").unwrap().max_depth, 5);
    }

    #[test]
    fn test_numeric_handlers_reject_garbage() {
        let err = apply(SwitchAction::Instance, "one").unwrap_err();
        assert!(matches!(err, NavError::Decode { .. }));
        let err = apply(SwitchAction::DbPort, "pg").unwrap_err();
        assert!(matches!(err, NavError::Decode { .. }));
        let err = apply(SwitchAction::DisplayMode, "99").unwrap_err();
        assert!(matches!(err, NavError::Validation { .. }));
        let err = apply(SwitchAction::MaxDepth, "-1").unwrap_err();
        assert!(matches!(err, NavError::Validation { .. }));
    }

    #[test]
    fn test_help_requests_usage_without_touching_config() {
        let mut config = NavConfig::default();
        let outcome = SwitchAction::Help.apply("-h", &mut config, None).unwrap();
        assert_eq!(outcome, ActionOutcome::HelpRequested);
        assert_eq!(config, NavConfig::default());
        assert!(!SwitchAction::Help.takes_argument());
    }

    #[test]
    fn test_argument_required() {
        let mut config = NavConfig::default();
        let err = SwitchAction::Symbol.apply("-s", &mut config, None).unwrap_err();
        assert!(matches!(
            err,
            NavError::MissingArgument { ref switch } if switch == "-s"
        ));
    }

    #[test]
    fn test_config_file_missing() {
        let err = apply(SwitchAction::ConfigFile, "/nonexistent/nav.json").unwrap_err();
        assert!(matches!(err, NavError::Io { .. }));
    }
}
