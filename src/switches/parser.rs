//! Sequential command-line parser.
//!
//! Tokens are scanned left to right by a two-state machine. In
//! [`ParserState::ReadyForSwitch`] a token is looked up in the registry:
//! unknown tokens are skipped, argument-less switches run immediately and
//! argument-taking switches move the machine to
//! [`ParserState::AwaitingArgument`], where the next token is handed to the
//! pending handler verbatim (even if it looks like a switch).
//!
//! Mandatory switches are marked satisfied as soon as their token is
//! recognised, before the handler runs. A handler failure aborts the whole
//! run, so a mandatory switch with a bad argument never yields a resolved
//! configuration either way.

use super::handlers::ActionOutcome;
use super::registry::{SwitchDescriptor, SwitchRegistry};
use crate::config::NavConfig;
use crate::error::{NavError, Result};
use indexmap::IndexMap;

// ============================================================================
// Outcomes
// ============================================================================

/// Terminal state of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every mandatory switch was seen and every handler succeeded
    Resolved(NavConfig),
    /// `-h` was seen; scanning stopped there
    HelpRequested,
}

impl Resolution {
    /// The resolved configuration, if any.
    #[must_use]
    pub fn into_config(self) -> Option<NavConfig> {
        match self {
            Self::Resolved(config) => Some(config),
            Self::HelpRequested => None,
        }
    }
}

/// A failed scan.
///
/// The partially updated working configuration is dropped; `defaults` is a
/// freshly built default configuration.
#[derive(Debug)]
pub struct Rejected {
    pub error: NavError,
    pub defaults: NavConfig,
}

impl Rejected {
    fn new(error: NavError) -> Self {
        Self {
            error,
            defaults: NavConfig::default(),
        }
    }

    /// Discard the defaults and keep the error.
    #[must_use]
    pub fn into_error(self) -> NavError {
        self.error
    }
}

// ============================================================================
// Required Switch Tracking
// ============================================================================

/// Satisfaction flag for every mandatory switch, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSwitchTracker {
    seen: IndexMap<String, bool>,
}

impl RequiredSwitchTracker {
    /// Start tracking every mandatory switch in `registry`, all unsatisfied.
    #[must_use]
    pub fn new(registry: &SwitchRegistry) -> Self {
        let seen = registry
            .mandatory()
            .map(|d| (d.token.clone(), false))
            .collect();
        Self { seen }
    }

    /// Mark `token` satisfied. Tokens that are not mandatory are ignored.
    pub fn mark_seen(&mut self, token: &str) {
        if let Some(flag) = self.seen.get_mut(token) {
            *flag = true;
        }
    }

    #[must_use]
    pub fn is_seen(&self, token: &str) -> bool {
        self.seen.get(token).copied().unwrap_or(false)
    }

    /// Mandatory tokens never seen, in registration order.
    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        self.seen
            .iter()
            .filter(|(_, seen)| !**seen)
            .map(|(token, _)| token.clone())
            .collect()
    }

    /// Fail with [`NavError::MissingRequiredSwitch`] if anything is missing.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(NavError::MissingRequiredSwitch { switches: missing })
        }
    }
}

// ============================================================================
// State Machine
// ============================================================================

/// Scanner state between two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState<'r> {
    /// Next token is matched against the registry
    ReadyForSwitch,
    /// Next token is the argument of this switch
    AwaitingArgument(&'r SwitchDescriptor),
}

/// Resolve the runtime configuration from `args` (program name excluded).
///
/// Starts from [`NavConfig::default`], applies every recognised switch in
/// order and checks that all mandatory switches appeared.
pub fn parse_args<I, S>(
    registry: &SwitchRegistry,
    args: I,
) -> std::result::Result<Resolution, Rejected>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan(registry, args).map_err(|error| {
        tracing::warn!(kind = error.kind(), "rejected command line: {error}");
        Rejected::new(error)
    })
}

fn scan<I, S>(registry: &SwitchRegistry, args: I) -> Result<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = NavConfig::default();
    let mut tracker = RequiredSwitchTracker::new(registry);
    let mut state = ParserState::ReadyForSwitch;

    for arg in args {
        let token = arg.as_ref();
        state = match state {
            ParserState::ReadyForSwitch => {
                let Some(descriptor) = registry.find(token) else {
                    tracing::debug!(token, "ignoring unknown token");
                    continue;
                };
                tracing::debug!(switch = %descriptor.token, id = descriptor.id, "matched switch");

                if descriptor.mandatory {
                    tracker.mark_seen(&descriptor.token);
                }
                if descriptor.takes_argument {
                    ParserState::AwaitingArgument(descriptor)
                } else {
                    match descriptor.apply(&mut config, None)? {
                        ActionOutcome::Continue => ParserState::ReadyForSwitch,
                        ActionOutcome::HelpRequested => return Ok(Resolution::HelpRequested),
                    }
                }
            }
            ParserState::AwaitingArgument(descriptor) => {
                match descriptor.apply(&mut config, Some(token))? {
                    ActionOutcome::Continue => ParserState::ReadyForSwitch,
                    ActionOutcome::HelpRequested => return Ok(Resolution::HelpRequested),
                }
            }
        };
    }

    if let ParserState::AwaitingArgument(descriptor) = state {
        return Err(NavError::missing_argument(&descriptor.token));
    }

    tracker.validate()?;
    Ok(Resolution::Resolved(config))
}
