//! Lint scope definitions.
//!
//! A scope is a named grouping of files used for discovery: each scope has
//! its own directory roots, file-extension patterns, and recursion-depth
//! limit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named file grouping for lint discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintScope {
    /// JS/TS application sources
    Frontend,
    /// Python services and scripts
    Backend,
    /// Markdown documentation
    Docs,
    /// JSON/YAML/TOML configuration files
    Config,
    /// Shell and build tooling
    Tooling,
    /// Everything lintable from the project root
    #[default]
    All,
}

impl LintScope {
    /// Directory roots searched for this scope, relative to the project root
    pub fn roots(&self) -> &'static [&'static str] {
        match self {
            LintScope::Frontend => &["src", "app"],
            LintScope::Backend => &["server", "api", "scripts"],
            LintScope::Docs => &["docs"],
            LintScope::Config => &["."],
            LintScope::Tooling => &["tools", "scripts", ".github"],
            LintScope::All => &["."],
        }
    }

    /// File extensions included in this scope; empty means any known
    /// lintable extension
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LintScope::Frontend => &["js", "jsx", "ts", "tsx", "css"],
            LintScope::Backend => &["py"],
            LintScope::Docs => &["md"],
            LintScope::Config => &["json", "yaml", "yml", "toml"],
            LintScope::Tooling => &["sh", "js", "py"],
            LintScope::All => &[],
        }
    }

    /// Recursion depth limit for discovery under each root
    pub fn max_depth(&self) -> usize {
        match self {
            LintScope::Frontend | LintScope::Backend => 8,
            LintScope::Docs => 4,
            LintScope::Config => 2,
            LintScope::Tooling => 6,
            LintScope::All => 10,
        }
    }
}

impl fmt::Display for LintScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LintScope::Frontend => "frontend",
            LintScope::Backend => "backend",
            LintScope::Docs => "docs",
            LintScope::Config => "config",
            LintScope::Tooling => "tooling",
            LintScope::All => "all",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for LintScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(LintScope::Frontend),
            "backend" => Ok(LintScope::Backend),
            "docs" => Ok(LintScope::Docs),
            "config" => Ok(LintScope::Config),
            "tooling" => Ok(LintScope::Tooling),
            "all" => Ok(LintScope::All),
            _ => Err(format!("Invalid scope: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(LintScope::default(), LintScope::All);
    }

    #[test]
    fn from_str_round_trip() {
        for scope in [
            LintScope::Frontend,
            LintScope::Backend,
            LintScope::Docs,
            LintScope::Config,
            LintScope::Tooling,
            LintScope::All,
        ] {
            assert_eq!(scope.to_string().parse::<LintScope>().ok(), Some(scope));
        }
        assert!("middleware".parse::<LintScope>().is_err());
    }

    #[test]
    fn scope_shapes() {
        assert!(LintScope::Frontend.extensions().contains(&"tsx"));
        assert!(LintScope::Backend.extensions().contains(&"py"));
        assert_eq!(LintScope::Config.max_depth(), 2);
        assert!(LintScope::All.extensions().is_empty());
    }
}
