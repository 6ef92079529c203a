//! Policy records and the named presets built from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PolicyError;

/// What the sandboxed PATH does with a single host tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathConfig {
    /// Create a passthrough symlink for the tool in the sandboxed PATH.
    pub allow_symlink: bool,

    /// Record each invocation of the tool.
    pub log_usage: bool,

    /// Fail the invocation instead of running the real tool.
    pub deny_execution: bool,

    /// The sandbox ships a prebuilt for this tool that only exists on Linux
    /// hosts. Elsewhere the host executable is used instead.
    #[serde(default)]
    pub platform_restricted: bool,
}

impl PathConfig {
    pub const ALLOWED: Self = Self {
        allow_symlink: true,
        log_usage: false,
        deny_execution: false,
        platform_restricted: false,
    };

    pub const FORBIDDEN: Self = Self {
        allow_symlink: false,
        log_usage: true,
        deny_execution: true,
        platform_restricted: false,
    };

    pub const LOG: Self = Self {
        allow_symlink: true,
        log_usage: true,
        deny_execution: false,
        platform_restricted: false,
    };

    /// Used for any tool that is not listed in the registry.
    ///
    /// Still creates the symlink, but logs and denies every use.
    pub const MISSING: Self = Self {
        allow_symlink: true,
        log_usage: true,
        deny_execution: true,
        platform_restricted: false,
    };

    pub const PLATFORM_RESTRICTED: Self = Self {
        allow_symlink: false,
        log_usage: true,
        deny_execution: true,
        platform_restricted: true,
    };

    /// Short human-readable summary, e.g. `"symlink, log, deny"`.
    pub fn describe(&self) -> String {
        let mut parts = vec![if self.allow_symlink {
            "symlink"
        } else {
            "no symlink"
        }];
        if self.log_usage {
            parts.push("log");
        }
        if self.deny_execution {
            parts.push("deny");
        }
        if self.platform_restricted {
            parts.push("linux-only prebuilt");
        }
        parts.join(", ")
    }
}

/// The named policy regimes every registry entry is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Preset {
    Allowed,
    Forbidden,
    Log,
    Missing,
    PlatformRestricted,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Allowed,
        Preset::Forbidden,
        Preset::Log,
        Preset::Missing,
        Preset::PlatformRestricted,
    ];

    pub fn config(self) -> PathConfig {
        match self {
            Preset::Allowed => PathConfig::ALLOWED,
            Preset::Forbidden => PathConfig::FORBIDDEN,
            Preset::Log => PathConfig::LOG,
            Preset::Missing => PathConfig::MISSING,
            Preset::PlatformRestricted => PathConfig::PLATFORM_RESTRICTED,
        }
    }

    /// Find the preset a record was built from, if any.
    pub fn classify(config: &PathConfig) -> Option<Preset> {
        Self::ALL.into_iter().find(|preset| preset.config() == *config)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Allowed => "allowed",
            Preset::Forbidden => "forbidden",
            Preset::Log => "log",
            Preset::Missing => "missing",
            Preset::PlatformRestricted => "platform_restricted",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| PolicyError::UnknownPreset(s.to_string()))
    }
}

impl TryFrom<String> for Preset {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Preset> for PathConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_differs_from_forbidden_only_by_symlink() {
        let mut missing = PathConfig::MISSING;
        assert!(missing.allow_symlink);
        missing.allow_symlink = false;
        assert_eq!(missing, PathConfig::FORBIDDEN);
    }

    #[test]
    fn test_classify_presets() {
        for preset in Preset::ALL {
            assert_eq!(Preset::classify(&preset.config()), Some(preset));
        }

        let custom = PathConfig {
            allow_symlink: false,
            log_usage: false,
            deny_execution: false,
            platform_restricted: false,
        };
        assert_eq!(Preset::classify(&custom), None);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("allowed".parse::<Preset>().unwrap(), Preset::Allowed);
        assert_eq!("Forbidden".parse::<Preset>().unwrap(), Preset::Forbidden);
        assert_eq!(
            "platform-restricted".parse::<Preset>().unwrap(),
            Preset::PlatformRestricted
        );

        let err = "sometimes".parse::<Preset>().unwrap_err();
        assert!(matches!(err, PolicyError::UnknownPreset(name) if name == "sometimes"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(PathConfig::ALLOWED.describe(), "symlink");
        assert_eq!(PathConfig::FORBIDDEN.describe(), "no symlink, log, deny");
        assert_eq!(PathConfig::MISSING.describe(), "symlink, log, deny");
        assert_eq!(
            PathConfig::PLATFORM_RESTRICTED.describe(),
            "no symlink, log, deny, linux-only prebuilt"
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Preset::PlatformRestricted).unwrap();
        assert_eq!(json, "\"platform_restricted\"");

        for name in ["\"platform-restricted\"", "\"Platform_Restricted\""] {
            let preset: Preset = serde_json::from_str(name).unwrap();
            assert_eq!(preset, Preset::PlatformRestricted);
        }
        let preset: Preset = serde_json::from_str("\"Allowed\"").unwrap();
        assert_eq!(preset, Preset::Allowed);
        assert!(serde_json::from_str::<Preset>("\"sometimes\"").is_err());

        let config: PathConfig = serde_json::from_str(
            r#"{"allow_symlink":true,"log_usage":true,"deny_execution":false}"#,
        )
        .unwrap();
        assert_eq!(config, PathConfig::LOG);
    }
}
