// src/config.rs
// =============================================================================
// Alias rules: rewrite the start of a link destination before it is resolved.
//
// Rules come from two places, in this order:
// 1. An optional TOML file:
//
//        [[alias]]
//        from = "old/"
//        to = "new/"
//
// 2. Any number of `--alias FROM=TO` flags on the command line
//
// The first rule whose `from` prefix matches wins, and it is applied once.
// =============================================================================

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Replaces a destination prefix with another string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasRule {
    pub from: String,
    pub to: String,
}

/// Ordered set of alias rules, fixed for the duration of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Aliases {
    #[serde(default, rename = "alias")]
    rules: Vec<AliasRule>,
}

impl AliasRule {
    // Parses the `FROM=TO` form used by the --alias flag
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let (from, to) = spec.split_once('=').ok_or_else(|| {
            ConfigError::Validation(format!("alias '{}' must look like FROM=TO", spec))
        })?;

        let rule = AliasRule {
            from: from.to_string(),
            to: to.to_string(),
        };
        rule.validate()?;
        Ok(rule)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // An empty prefix would match every single destination
        if self.from.is_empty() {
            return Err(ConfigError::Validation(format!(
                "alias to '{}' has an empty source prefix",
                self.to
            )));
        }
        Ok(())
    }
}

impl Aliases {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Aliases { rules }
    }

    /// Loads rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let aliases: Aliases = toml::from_str(content)?;
        for rule in &aliases.rules {
            rule.validate()?;
        }
        Ok(aliases)
    }

    /// Appends rules after the existing ones (they lose on ties).
    pub fn extend(&mut self, rules: impl IntoIterator<Item = AliasRule>) {
        self.rules.extend(rules);
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Rewrites `destination` with the first matching rule, if any.
    pub fn apply(&self, destination: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| {
                destination
                    .strip_prefix(rule.from.as_str())
                    .map(|rest| format!("{}{}", rule.to, rest))
            })
            .unwrap_or_else(|| destination.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_first_match_wins() {
        let aliases = Aliases::new(vec![
            AliasRule::parse("old/=new/").unwrap(),
            AliasRule::parse("old/=other/").unwrap(),
        ]);
        assert_eq!(aliases.apply("old/doc.md"), "new/doc.md");
    }

    #[test]
    fn test_apply_replaces_prefix_once() {
        let aliases = Aliases::new(vec![AliasRule::parse("a/=b/").unwrap()]);
        assert_eq!(aliases.apply("a/a/x.md"), "b/a/x.md");
    }

    #[test]
    fn test_apply_without_match_is_identity() {
        let aliases = Aliases::new(vec![AliasRule::parse("old/=new/").unwrap()]);
        assert_eq!(aliases.apply("docs/old/x.md"), "docs/old/x.md");
        assert_eq!(Aliases::default().apply("x.md"), "x.md");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(matches!(
            AliasRule::parse("old/"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_prefix() {
        assert!(AliasRule::parse("=new/").is_err());
    }

    #[test]
    fn test_parse_allows_empty_replacement() {
        let rule = AliasRule::parse("/repo/=").unwrap();
        assert_eq!(rule.to, "");
    }

    #[test]
    fn test_from_toml_keeps_order() {
        let aliases = Aliases::from_toml(
            r#"
[[alias]]
from = "https://github.com/me/repo/blob/main/"
to = "/src/repo/"

[[alias]]
from = "old/"
to = "new/"
"#,
        )
        .unwrap();

        assert_eq!(aliases.rules().len(), 2);
        assert_eq!(aliases.rules()[1].from, "old/");
        assert_eq!(
            aliases.apply("https://github.com/me/repo/blob/main/README.md"),
            "/src/repo/README.md"
        );
    }

    #[test]
    fn test_from_toml_empty_file() {
        let aliases = Aliases::from_toml("").unwrap();
        assert!(aliases.rules().is_empty());
    }

    #[test]
    fn test_from_toml_rejects_empty_prefix() {
        let result = Aliases::from_toml("[[alias]]\nfrom = \"\"\nto = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.toml");
        std::fs::write(&path, "[[alias]]\nfrom = \"a/\"\nto = \"b/\"\n").unwrap();

        let mut aliases = Aliases::load(&path).unwrap();
        aliases.extend(vec![AliasRule::parse("c/=d/").unwrap()]);
        assert_eq!(aliases.rules().len(), 2);
        assert_eq!(aliases.apply("c/x.md"), "d/x.md");
    }
}
