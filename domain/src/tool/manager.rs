//! JavaScript package manager enumeration.

use super::template::PackageManagerAction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A JavaScript package manager the orchestrator can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn as_str(&self) -> &str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// The lockfile this manager writes
    pub fn lockfile(&self) -> &str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// The audit severity flag name differs per manager: yarn takes
    /// `--level`, npm and pnpm take `--audit-level`.
    pub fn audit_level_flag(&self) -> &str {
        match self {
            PackageManager::Yarn => "--level",
            PackageManager::Npm | PackageManager::Pnpm => "--audit-level",
        }
    }

    /// Concrete argument vector for a symbolic package-manager action
    pub fn command(&self, action: PackageManagerAction) -> Vec<String> {
        vec![self.as_str().to_string(), action.as_str().to_string()]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            _ => Err(format!("Invalid package manager: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_level_flag_per_manager() {
        assert_eq!(PackageManager::Yarn.audit_level_flag(), "--level");
        assert_eq!(PackageManager::Npm.audit_level_flag(), "--audit-level");
        assert_eq!(PackageManager::Pnpm.audit_level_flag(), "--audit-level");
    }

    #[test]
    fn command_argv() {
        assert_eq!(
            PackageManager::Yarn.command(PackageManagerAction::Audit),
            vec!["yarn", "audit"]
        );
        assert_eq!(
            PackageManager::Npm.command(PackageManagerAction::Install),
            vec!["npm", "install"]
        );
    }

    #[test]
    fn from_str_round_trip() {
        for manager in [
            PackageManager::Npm,
            PackageManager::Yarn,
            PackageManager::Pnpm,
        ] {
            assert_eq!(manager.as_str().parse::<PackageManager>().ok(), Some(manager));
        }
        assert!("bower".parse::<PackageManager>().is_err());
    }
}
