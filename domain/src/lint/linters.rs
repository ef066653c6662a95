//! Known linter specifications for the direct-lint path.
//!
//! Each spec names the external binary, the file extensions it accepts, and
//! how to build its argument vector. A linter only ever receives files that
//! pass its own filter, so Python files never reach a JS linter and vice
//! versa.

use std::path::{Path, PathBuf};

/// Description of one external linter
#[derive(Debug, Clone, Copy)]
pub struct LinterSpec {
    pub name: &'static str,
    /// Executable probed on PATH before running
    pub binary: &'static str,
    pub extensions: &'static [&'static str],
    /// Arguments inserted between the binary and the file list
    pub base_args: &'static [&'static str],
    /// Restrict matches to files that look like API specifications
    pub api_specs_only: bool,
}

impl LinterSpec {
    /// Whether this linter accepts the given file
    pub fn matches(&self, path: &Path) -> bool {
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if !self
            .extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        {
            return false;
        }
        if self.api_specs_only && !looks_like_api_spec(path) {
            return false;
        }
        true
    }

    /// Build the argument vector for a run over the given files
    pub fn command(&self, files: &[PathBuf]) -> Vec<String> {
        let mut argv = vec![self.binary.to_string()];
        argv.extend(self.base_args.iter().map(|a| a.to_string()));
        argv.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        argv
    }
}

/// Heuristic for API-specification JSON/YAML files (OpenAPI and friends)
fn looks_like_api_spec(path: &Path) -> bool {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    stem.contains("openapi")
        || stem.contains("swagger")
        || stem.contains("asyncapi")
        || stem.contains("api")
}

const LINTERS: &[LinterSpec] = &[
    LinterSpec {
        name: "eslint",
        binary: "eslint",
        extensions: &["js", "jsx", "ts", "tsx"],
        base_args: &[],
        api_specs_only: false,
    },
    LinterSpec {
        name: "prettier",
        binary: "prettier",
        extensions: &["js", "jsx", "ts", "tsx", "css", "md"],
        base_args: &["--check"],
        api_specs_only: false,
    },
    LinterSpec {
        name: "ruff",
        binary: "ruff",
        extensions: &["py"],
        base_args: &["check"],
        api_specs_only: false,
    },
    LinterSpec {
        name: "black",
        binary: "black",
        extensions: &["py"],
        base_args: &["--check"],
        api_specs_only: false,
    },
    LinterSpec {
        name: "spectral",
        binary: "spectral",
        extensions: &["json", "yaml", "yml"],
        base_args: &["lint"],
        api_specs_only: true,
    },
];

/// All linters the direct path knows about
pub fn known_linters() -> &'static [LinterSpec] {
    LINTERS
}

/// Linters relevant to the given file set, selected by extension scan
pub fn relevant_linters(files: &[PathBuf]) -> Vec<&'static LinterSpec> {
    LINTERS
        .iter()
        .filter(|spec| files.iter().any(|file| spec.matches(file)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn extension_filtering() {
        let eslint = &LINTERS[0];
        assert!(eslint.matches(Path::new("src/app.tsx")));
        assert!(!eslint.matches(Path::new("server/main.py")));
        assert!(!eslint.matches(Path::new("Makefile")));
    }

    #[test]
    fn js_files_imply_two_linters() {
        let relevant = relevant_linters(&paths(&["src/index.ts"]));
        let names: Vec<&str> = relevant.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["eslint", "prettier"]);
    }

    #[test]
    fn python_files_imply_two_different_linters() {
        let relevant = relevant_linters(&paths(&["server/main.py"]));
        let names: Vec<&str> = relevant.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["ruff", "black"]);
    }

    #[test]
    fn api_spec_heuristic_gates_spectral() {
        let relevant = relevant_linters(&paths(&["config/settings.yaml"]));
        assert!(relevant.iter().all(|s| s.name != "spectral"));

        let relevant = relevant_linters(&paths(&["docs/openapi.yaml"]));
        assert!(relevant.iter().any(|s| s.name == "spectral"));
    }

    #[test]
    fn no_cross_contamination() {
        let files = paths(&["src/app.ts", "server/main.py"]);
        let ruff = LINTERS.iter().find(|s| s.name == "ruff").unwrap();
        let subset: Vec<PathBuf> = files.iter().filter(|f| ruff.matches(f)).cloned().collect();
        assert_eq!(subset, paths(&["server/main.py"]));
    }

    #[test]
    fn command_includes_base_args_and_files() {
        let ruff = LINTERS.iter().find(|s| s.name == "ruff").unwrap();
        let argv = ruff.command(&paths(&["a.py", "b.py"]));
        assert_eq!(argv, vec!["ruff", "check", "a.py", "b.py"]);
    }
}
