//! Host platform detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PolicyError;

/// Host operating system family the sandbox runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HostPlatform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl HostPlatform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            HostPlatform::Linux
        } else if cfg!(target_os = "macos") {
            HostPlatform::Darwin
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Other
        }
    }

    /// Whether platform-restricted prebuilts are unavailable here, so the
    /// host's own executables must be used instead.
    pub fn lacks_native_prebuilts(self) -> bool {
        matches!(self, HostPlatform::Darwin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HostPlatform::Linux => "linux",
            HostPlatform::Darwin => "darwin",
            HostPlatform::Windows => "windows",
            HostPlatform::Other => "other",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostPlatform {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(HostPlatform::Linux),
            "darwin" | "macos" => Ok(HostPlatform::Darwin),
            "windows" => Ok(HostPlatform::Windows),
            "other" => Ok(HostPlatform::Other),
            _ => Err(PolicyError::UnknownPlatform(s.to_string())),
        }
    }
}

impl TryFrom<String> for HostPlatform {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_darwin_lacks_prebuilts() {
        assert!(HostPlatform::Darwin.lacks_native_prebuilts());
        assert!(!HostPlatform::Linux.lacks_native_prebuilts());
        assert!(!HostPlatform::Windows.lacks_native_prebuilts());
        assert!(!HostPlatform::Other.lacks_native_prebuilts());
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
        assert_eq!("MacOS".parse::<HostPlatform>().unwrap(), HostPlatform::Darwin);
        assert_eq!("darwin".parse::<HostPlatform>().unwrap(), HostPlatform::Darwin);
        assert!(matches!(
            "plan9".parse::<HostPlatform>(),
            Err(PolicyError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_deserialize_accepts_parser_names() {
        let platform: HostPlatform = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(platform, HostPlatform::Darwin);
        let platform: HostPlatform = serde_json::from_str("\"Linux\"").unwrap();
        assert_eq!(platform, HostPlatform::Linux);
        assert_eq!(
            serde_json::to_string(&HostPlatform::Darwin).unwrap(),
            "\"darwin\""
        );
        assert!(serde_json::from_str::<HostPlatform>("\"plan9\"").is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_on_linux() {
        assert_eq!(HostPlatform::current(), HostPlatform::Linux);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_current_on_macos() {
        assert_eq!(HostPlatform::current(), HostPlatform::Darwin);
    }
}
