//! Command templates: literal commands and symbolic placeholders.
//!
//! Registry entries map actions to templates. A template is either a literal
//! command string or a symbolic package-manager placeholder that is resolved
//! against the detected manager at configuration-build time. Keeping the kind
//! as a tagged enum makes template dispatch exhaustive pattern matching, so a
//! typo in a symbolic name can only produce a literal command, never a silent
//! mis-dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic package-manager actions a template can stand for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerAction {
    Install,
    Audit,
    Outdated,
}

impl PackageManagerAction {
    pub fn as_str(&self) -> &str {
        match self {
            PackageManagerAction::Install => "install",
            PackageManagerAction::Audit => "audit",
            PackageManagerAction::Outdated => "outdated",
        }
    }
}

impl fmt::Display for PackageManagerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A command template: either a literal command string or a symbolic
/// placeholder requiring resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandTemplate {
    /// Literal command string, used verbatim (after argv splitting)
    Literal(String),
    /// Symbolic template resolved via package manager detection
    PackageManager(PackageManagerAction),
}

impl CommandTemplate {
    /// The symbolic prefix marking a package-manager template
    pub const PACKAGE_MANAGER_PREFIX: &'static str = "package-manager-";

    /// Parse a template from its registry string form.
    ///
    /// `package-manager-install`, `package-manager-audit` and
    /// `package-manager-outdated` become symbolic templates; everything else
    /// is a literal command string.
    pub fn parse(s: &str) -> Self {
        match s {
            "package-manager-install" => {
                CommandTemplate::PackageManager(PackageManagerAction::Install)
            }
            "package-manager-audit" => {
                CommandTemplate::PackageManager(PackageManagerAction::Audit)
            }
            "package-manager-outdated" => {
                CommandTemplate::PackageManager(PackageManagerAction::Outdated)
            }
            other => CommandTemplate::Literal(other.to_string()),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, CommandTemplate::PackageManager(_))
    }
}

impl From<&str> for CommandTemplate {
    fn from(s: &str) -> Self {
        CommandTemplate::parse(s)
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandTemplate::Literal(s) => write!(f, "{}", s),
            CommandTemplate::PackageManager(action) => {
                write!(f, "{}{}", Self::PACKAGE_MANAGER_PREFIX, action)
            }
        }
    }
}
