//! Per-tool policy for sandboxed build PATHs.
//!
//! Maps host executable names to a [`PathConfig`] telling the sandbox
//! whether to symlink the tool into the restricted PATH, log its use, or
//! refuse to run it.
//!
//! # Usage
//!
//! ```rust
//! use pathgate_policy::{HostPlatform, PathConfig, PathPolicy};
//!
//! let policy = PathPolicy::for_platform(HostPlatform::Linux);
//! assert_eq!(policy.get_config("git"), PathConfig::ALLOWED);
//! assert_eq!(policy.get_config("gcc"), PathConfig::FORBIDDEN);
//! assert_eq!(policy.get_config("not-listed"), PathConfig::MISSING);
//! ```
//!
//! Most callers want the process-wide registry for the current host, via
//! [`get_config`] or [`global`].

pub mod config;
pub mod error;
pub mod overrides;
pub mod platform;
pub mod registry;
mod table;

pub use config::{PathConfig, Preset};
pub use error::PolicyError;
pub use overrides::PolicyOverrides;
pub use platform::HostPlatform;
pub use registry::{PathPolicy, PathPolicyBuilder, get_config, global, install_global};
