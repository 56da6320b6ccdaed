//! Switch registry.
//!
//! The registry is the ordered catalog of command-line switches. Registration
//! order is the help display order and each descriptor's id; it never changes
//! once the registry is built. Tokens are unique: registering a token twice
//! fails instead of shadowing the later binding.

use super::handlers::{ActionOutcome, SwitchAction};
use crate::config::NavConfig;
use crate::error::RegistryError;
use indexmap::IndexMap;

/// One registered switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchDescriptor {
    /// 1-based registration index
    pub id: usize,
    /// Literal token matched against the argument stream, e.g. `-s`
    pub token: String,
    /// One-line description shown in the usage text
    pub help: String,
    /// Whether the switch consumes the following token
    pub takes_argument: bool,
    /// Whether the switch must appear for the parse to succeed
    pub mandatory: bool,
    /// Handler bound to the switch
    pub action: SwitchAction,
}

impl SwitchDescriptor {
    /// Run the bound handler on `config`, reporting errors under this token.
    pub fn apply(
        &self,
        config: &mut NavConfig,
        arg: Option<&str>,
    ) -> crate::error::Result<ActionOutcome> {
        self.action.apply(&self.token, config, arg)
    }
}

/// Ordered, duplicate-free switch catalog.
#[derive(Debug, Clone, Default)]
pub struct SwitchRegistry {
    entries: IndexMap<String, SwitchDescriptor>,
}

impl SwitchRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a switch, assigning it the next id.
    ///
    /// Fails if `token` is already registered, or if `takes_argument`
    /// disagrees with what `action` consumes.
    pub fn register(
        &mut self,
        token: impl Into<String>,
        help: impl Into<String>,
        takes_argument: bool,
        mandatory: bool,
        action: SwitchAction,
    ) -> Result<usize, RegistryError> {
        let token = token.into();
        if let Some(existing) = self.entries.get(&token) {
            return Err(RegistryError::DuplicateSwitch {
                token,
                existing_id: existing.id,
            });
        }
        if takes_argument != action.takes_argument() {
            return Err(RegistryError::ArgumentMismatch {
                token,
                declared: takes_argument,
            });
        }

        let id = self.entries.len() + 1;
        let descriptor = SwitchDescriptor {
            id,
            token: token.clone(),
            help: help.into(),
            takes_argument,
            mandatory,
            action,
        };
        self.entries.insert(token, descriptor);
        Ok(id)
    }

    /// The switches nav understands.
    pub fn builtin() -> Result<Self, RegistryError> {
        use SwitchAction as A;

        let mut registry = Self::new();
        registry.register(
            "-j",
            "Force Json output with subsystems data",
            true,
            false,
            A::OutputFormat,
        )?;
        registry.register("-s", "Specifies symbol", true, true, A::Symbol)?;
        registry.register("-i", "Specifies instance", true, true, A::Instance)?;
        registry.register("-f", "Specifies config file", true, false, A::ConfigFile)?;
        registry.register(
            "-u",
            "Forces use specified database userid",
            true,
            false,
            A::DbUser,
        )?;
        registry.register(
            "-p",
            "Forces use specified password",
            true,
            false,
            A::DbPassword,
        )?;
        registry.register("-d", "Forces use specified DBHost", true, false, A::DbHost)?;
        registry.register("-P", "Forces use specified DBPort", true, false, A::DbPort)?;
        registry.register(
            "-m",
            "Sets display mode 0=all,1=subsystems,2=subsystems+symbols,3=targeted",
            true,
            false,
            A::DisplayMode,
        )?;
        registry.register(
            "-x",
            "Specify Max depth in call flow exploration",
            true,
            false,
            A::MaxDepth,
        )?;
        registry.register("-h", "This help", false, false, A::Help)?;
        Ok(registry)
    }

    /// Look up the descriptor for an exact token.
    #[must_use]
    pub fn find(&self, token: &str) -> Option<&SwitchDescriptor> {
        self.entries.get(token)
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &SwitchDescriptor> {
        self.entries.values()
    }

    /// Mandatory descriptors in registration order.
    pub fn mandatory(&self) -> impl Iterator<Item = &SwitchDescriptor> {
        self.descriptors().filter(|d| d.mandatory)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
