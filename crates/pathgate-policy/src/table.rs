//! Built-in tool table.

use crate::Preset;

/// Every tool the sandboxed PATH knows about, with its policy.
pub(crate) const BUILTIN_TOOLS: &[(&str, Preset)] = &[
    ("bash", Preset::Allowed),
    ("bindgen", Preset::Allowed),
    ("dd", Preset::Allowed),
    ("diff", Preset::Allowed),
    ("dlv", Preset::Allowed),
    ("expr", Preset::Allowed),
    ("fuser", Preset::Allowed),
    ("getopt", Preset::Allowed),
    ("git", Preset::Allowed),
    ("hexdump", Preset::Allowed),
    ("install", Preset::Allowed),
    ("jar", Preset::Allowed),
    ("java", Preset::Allowed),
    ("javap", Preset::Allowed),
    ("lsof", Preset::Allowed),
    ("openssl", Preset::Allowed),
    ("pahole", Preset::Allowed),
    ("perl", Preset::Allowed),
    ("pstree", Preset::Allowed),
    ("realpath", Preset::Allowed),
    ("rsync", Preset::Allowed),
    ("sh", Preset::Allowed),
    ("rustc", Preset::Allowed),
    ("stubby", Preset::Allowed),
    ("tr", Preset::Allowed),
    ("unzip", Preset::Allowed),
    ("zip", Preset::Allowed),
    ("x86_64-linux-android-addr2line", Preset::Allowed),
    ("x86_64-linux-android-ar", Preset::Allowed),
    ("x86_64-linux-android-as", Preset::Allowed),
    ("x86_64-linux-android-c++filt", Preset::Allowed),
    ("x86_64-linux-android-dwp", Preset::Allowed),
    ("x86_64-linux-android-elfedit", Preset::Allowed),
    ("x86_64-linux-android-gcc", Preset::Allowed),
    ("x86_64-linux-android-gcc-ar", Preset::Allowed),
    ("x86_64-linux-android-gcc-nm", Preset::Allowed),
    ("x86_64-linux-android-gcc-ranlib", Preset::Allowed),
    ("x86_64-linux-android-gcov", Preset::Allowed),
    ("x86_64-linux-android-gcov-tool", Preset::Allowed),
    ("x86_64-linux-android-gprof", Preset::Allowed),
    ("x86_64-linux-android-ld", Preset::Allowed),
    ("x86_64-linux-android-ld.bfd", Preset::Allowed),
    ("x86_64-linux-android-ld.gold", Preset::Allowed),
    ("x86_64-linux-android-nm", Preset::Allowed),
    ("x86_64-linux-android-objcopy", Preset::Allowed),
    ("x86_64-linux-android-objdump", Preset::Allowed),
    ("x86_64-linux-android-ranlib", Preset::Allowed),
    ("x86_64-linux-android-readelf", Preset::Allowed),
    ("x86_64-linux-android-size", Preset::Allowed),
    ("x86_64-linux-android-strings", Preset::Allowed),
    ("x86_64-linux-android-strip", Preset::Allowed),
    // The host toolchain is removed; builds must use the in-tree toolchain.
    // GCC also can't find cc1 through the symlink.
    ("ar", Preset::Forbidden),
    ("as", Preset::Forbidden),
    ("cc", Preset::Forbidden),
    ("clang", Preset::Forbidden),
    ("clang++", Preset::Forbidden),
    ("gcc", Preset::Forbidden),
    ("g++", Preset::Forbidden),
    ("ld", Preset::Forbidden),
    ("ld.bfd", Preset::Forbidden),
    ("ld.gold", Preset::Forbidden),
    ("pkg-config", Preset::Forbidden),
    // Toybox tools that only work on Linux.
    ("pgrep", Preset::PlatformRestricted),
    ("pkill", Preset::PlatformRestricted),
    ("ps", Preset::PlatformRestricted),
];

/// Host tools passed through natively on Darwin.
pub(crate) const DARWIN_TOOLS: &[&str] = &["sw_vers", "xcrun"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_no_duplicate_names() {
        let mut seen = HashSet::new();
        for (name, _) in BUILTIN_TOOLS {
            assert!(seen.insert(*name), "duplicate tool entry: {name}");
        }
    }

    #[test]
    fn test_darwin_tools_not_in_builtin_table() {
        for name in DARWIN_TOOLS {
            assert!(BUILTIN_TOOLS.iter().all(|(tool, _)| tool != name));
        }
    }
}
