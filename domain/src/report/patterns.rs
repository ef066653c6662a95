//! Declarative output-extraction rules per tool family.
//!
//! Each family maps to a small set of named markers: lines containing a
//! warning marker are collected as warnings, lines containing an error
//! marker as errors. Adding a new tool family means adding a table entry,
//! not touching control flow.

/// Extraction rules for one tool family
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRules {
    pub warning_markers: &'static [&'static str],
    pub error_markers: &'static [&'static str],
}

impl ExtractionRules {
    pub fn warning_lines(&self, output: &str) -> Vec<String> {
        self.matching_lines(output, self.warning_markers)
    }

    pub fn error_lines(&self, output: &str) -> Vec<String> {
        self.matching_lines(output, self.error_markers)
    }

    fn matching_lines(&self, output: &str, markers: &[&str]) -> Vec<String> {
        output
            .lines()
            .filter(|line| markers.iter().any(|marker| line.contains(marker)))
            .map(|line| line.trim().to_string())
            .collect()
    }
}

/// Package manager audits flag advisories by severity word
const PACKAGE_MANAGER_RULES: ExtractionRules = ExtractionRules {
    warning_markers: &["moderate", "low", "npm warn", "warning"],
    error_markers: &["npm ERR!", "critical", "high severity", "error"],
};

const TYPESCRIPT_RULES: ExtractionRules = ExtractionRules {
    warning_markers: &["warning TS"],
    error_markers: &["error TS"],
};

const PYTHON_RULES: ExtractionRules = ExtractionRules {
    warning_markers: &["WARNING:", "DEPRECATION:"],
    error_markers: &["ERROR:", "Traceback"],
};

const BUNDLER_RULES: ExtractionRules = ExtractionRules {
    warning_markers: &["warning", "(!)"],
    error_markers: &["error during build", "ERROR", "error"],
};

const DEFAULT_RULES: ExtractionRules = ExtractionRules {
    warning_markers: &["warning", "warn"],
    error_markers: &["error", "ERR"],
};

/// Look up the extraction rules for a tool name
pub fn rules_for(tool: &str) -> ExtractionRules {
    match tool {
        "npm" | "yarn" | "pnpm" | "bun" => PACKAGE_MANAGER_RULES,
        "tsc" | "typescript" => TYPESCRIPT_RULES,
        "pip" | "pip3" | "poetry" | "uv" | "ruff" | "black" => PYTHON_RULES,
        "vite" | "webpack" | "rollup" | "esbuild" => BUNDLER_RULES,
        _ => DEFAULT_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_manager_audit_warnings() {
        let rules = rules_for("npm");
        let output = "found 3 vulnerabilities\n2 moderate severity\n1 low severity\nall good";
        let warnings = rules.warning_lines(output);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("moderate"));
    }

    #[test]
    fn npm_errors() {
        let rules = rules_for("npm");
        let output = "npm ERR! code ERESOLVE\nnpm ERR! peer dep missing";
        assert_eq!(rules.error_lines(output).len(), 2);
    }

    #[test]
    fn typescript_markers() {
        let rules = rules_for("tsc");
        let output = "src/a.ts(3,1): error TS2304: Cannot find name 'x'.\n\
                      src/b.ts(9,5): warning TS6133: unused variable";
        assert_eq!(rules.error_lines(output).len(), 1);
        assert_eq!(rules.warning_lines(output).len(), 1);
    }

    #[test]
    fn pip_errors() {
        let rules = rules_for("pip");
        let output = "ERROR: No matching distribution found for leftpad";
        assert_eq!(rules.error_lines(output).len(), 1);
        assert!(rules.warning_lines(output).is_empty());
    }

    #[test]
    fn unknown_tool_gets_default_rules() {
        let rules = rules_for("mystery-linter");
        let output = "warning: something odd\nerror: something broken";
        assert_eq!(rules.warning_lines(output).len(), 1);
        // "error: something broken" matches the error marker only; the
        // warning line does not contain "error"
        assert_eq!(rules.error_lines(output).len(), 1);
    }
}
