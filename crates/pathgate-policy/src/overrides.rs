//! Site-local policy overrides loaded from TOML.
//!
//! ```toml
//! [tools]
//! python3 = "allowed"
//! make = "log"
//! cc = "allowed"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{PolicyError, Preset};

/// Extra or replacement registry entries, applied when a registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOverrides {
    /// Tool name to preset.
    #[serde(default)]
    pub tools: BTreeMap<String, Preset>,
}

impl PolicyOverrides {
    /// Parse and validate overrides from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, PolicyError> {
        let overrides: Self = toml::from_str(content)?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Load overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Check that every key is a bare executable name.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for name in self.tools.keys() {
            if !is_valid_tool_name(name) {
                return Err(PolicyError::InvalidToolName(name.clone()));
            }
        }
        Ok(())
    }
}

fn is_valid_tool_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let overrides = PolicyOverrides::from_toml_str(
            r#"
            [tools]
            python3 = "allowed"
            make = "log"
            "#,
        )
        .unwrap();

        assert_eq!(overrides.tools.len(), 2);
        assert_eq!(overrides.tools["python3"], Preset::Allowed);
        assert_eq!(overrides.tools["make"], Preset::Log);
    }

    #[test]
    fn test_preset_names_match_cli_spelling() {
        let overrides = PolicyOverrides::from_toml_str(
            r#"
            [tools]
            top = "platform-restricted"
            make = "Allowed"
            "#,
        )
        .unwrap();

        assert_eq!(overrides.tools["top"], Preset::PlatformRestricted);
        assert_eq!(overrides.tools["make"], Preset::Allowed);
    }

    #[test]
    fn test_empty_document() {
        let overrides = PolicyOverrides::from_toml_str("").unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let err = PolicyOverrides::from_toml_str("[tools]\nmake = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn test_rejects_paths_as_tool_names() {
        let err =
            PolicyOverrides::from_toml_str("[tools]\n\"/usr/bin/make\" = \"allowed\"\n").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidToolName(name) if name == "/usr/bin/make"));

        let err = PolicyOverrides::from_toml_str("[tools]\n\"\" = \"allowed\"\n").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidToolName(_)));

        let err = PolicyOverrides::from_toml_str("[tools]\n\"my tool\" = \"log\"\n").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidToolName(_)));
    }
}
