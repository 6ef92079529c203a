//! The tool policy registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::table::{BUILTIN_TOOLS, DARWIN_TOOLS};
use crate::{HostPlatform, PathConfig, PolicyOverrides, Preset};

/// Mapping from exact tool name to its [`PathConfig`].
///
/// Lookups never fail: any name without an entry gets
/// [`PathConfig::MISSING`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPolicy {
    entries: HashMap<String, PathConfig>,
}

impl PathPolicy {
    /// The built-in table, without any platform adjustments.
    pub fn builtin() -> Self {
        let entries = BUILTIN_TOOLS
            .iter()
            .map(|(name, preset)| (name.to_string(), preset.config()))
            .collect();
        Self { entries }
    }

    /// The built-in table adjusted for `platform`.
    pub fn for_platform(platform: HostPlatform) -> Self {
        let mut policy = Self::builtin();
        policy.apply_platform_overrides(platform);
        policy
    }

    pub fn builder() -> PathPolicyBuilder {
        PathPolicyBuilder::default()
    }

    /// Policy for `name`, or [`PathConfig::MISSING`] if it is not listed.
    pub fn get_config(&self, name: &str) -> PathConfig {
        self.entries
            .get(name)
            .copied()
            .unwrap_or(PathConfig::MISSING)
    }

    /// Relax the table for hosts without the platform-restricted prebuilts.
    ///
    /// On Darwin the native-only tools are allowed and every
    /// platform-restricted entry falls back to the host executable. Other
    /// platforms are left untouched. Applying this more than once has no
    /// further effect.
    pub fn apply_platform_overrides(&mut self, platform: HostPlatform) {
        if !platform.lacks_native_prebuilts() {
            return;
        }

        for name in DARWIN_TOOLS {
            let previous = self.entries.insert(name.to_string(), PathConfig::ALLOWED);
            if let Some(previous) = previous
                && previous != PathConfig::ALLOWED
            {
                tracing::debug!(
                    tool = %name,
                    %platform,
                    previous = %previous.describe(),
                    "Replacing entry with host executable"
                );
            }
        }

        for (name, config) in self.entries.iter_mut() {
            if config.platform_restricted {
                tracing::debug!(tool = %name, %platform, "Using host executable, no prebuilt available");
                *config = PathConfig::ALLOWED;
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// All entries, sorted by tool name.
    pub fn entries(&self) -> Vec<(&str, PathConfig)> {
        let mut entries: Vec<(&str, PathConfig)> = self
            .entries
            .iter()
            .map(|(name, config)| (name.as_str(), *config))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Names of the tools whose entry equals `preset`, sorted.
    pub fn tools_with(&self, preset: Preset) -> Vec<&str> {
        let target = preset.config();
        self.entries()
            .into_iter()
            .filter(|(_, config)| *config == target)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Builds a [`PathPolicy`] from the built-in table, optional overrides and
/// a platform.
#[derive(Debug, Clone)]
pub struct PathPolicyBuilder {
    platform: HostPlatform,
    overrides: PolicyOverrides,
}

impl Default for PathPolicyBuilder {
    fn default() -> Self {
        Self {
            platform: HostPlatform::current(),
            overrides: PolicyOverrides::default(),
        }
    }
}

impl PathPolicyBuilder {
    pub fn platform(mut self, platform: HostPlatform) -> Self {
        self.platform = platform;
        self
    }

    pub fn overrides(mut self, overrides: &PolicyOverrides) -> Self {
        self.overrides
            .tools
            .extend(overrides.tools.iter().map(|(name, preset)| (name.clone(), *preset)));
        self
    }

    /// Overrides replace built-in entries; the platform pass runs last so
    /// it also sees platform-restricted overrides.
    pub fn build(self) -> PathPolicy {
        let mut policy = PathPolicy::builtin();

        for (name, preset) in &self.overrides.tools {
            tracing::debug!(tool = %name, %preset, "Applying policy override");
            policy.entries.insert(name.clone(), preset.config());
        }

        policy.apply_platform_overrides(self.platform);

        tracing::info!(
            platform = %self.platform,
            tools = policy.len(),
            overrides = self.overrides.tools.len(),
            "Built tool policy"
        );
        policy
    }
}

static GLOBAL_POLICY: OnceLock<PathPolicy> = OnceLock::new();

/// Process-wide registry for the host platform.
///
/// Built on first use; construction finishes before any caller sees it.
pub fn global() -> &'static PathPolicy {
    GLOBAL_POLICY.get_or_init(|| PathPolicy::for_platform(HostPlatform::current()))
}

/// Install a custom process-wide registry.
///
/// Must happen before the first call to [`global`]; otherwise the existing
/// registry is kept and `policy` is handed back.
pub fn install_global(policy: PathPolicy) -> Result<(), PathPolicy> {
    GLOBAL_POLICY.set(policy)
}

/// Look up `name` in the process-wide registry.
pub fn get_config(name: &str) -> PathConfig {
    global().get_config(name)
}
