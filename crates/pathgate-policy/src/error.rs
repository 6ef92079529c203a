//! Policy error types.

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read policy overrides: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse policy overrides: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset '{0}' (expected one of: allowed, forbidden, log, missing, platform_restricted)")]
    UnknownPreset(String),

    #[error("unknown platform '{0}' (expected one of: linux, darwin, windows, other)")]
    UnknownPlatform(String),

    #[error("invalid tool name '{0}': must be a bare executable name")]
    InvalidToolName(String),
}
