//! Read-only runtime platform introspection
//!
//! Thin queries over the compiler-provided platform constants. No side
//! effects, no failure paths.

/// Operating system identifier, e.g. `linux`, `macos`, `windows`
pub fn os() -> &'static str {
    std::env::consts::OS
}

/// CPU architecture identifier, e.g. `x86_64`, `aarch64`
pub fn arch() -> &'static str {
    std::env::consts::ARCH
}

/// Operating system family, e.g. `unix`, `windows`
pub fn family() -> &'static str {
    std::env::consts::FAMILY
}

/// Version string of this library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_non_empty() {
        assert!(!os().is_empty());
        assert!(!arch().is_empty());
        assert!(!family().is_empty());
        assert!(!version().is_empty());
    }

    #[test]
    fn test_os_is_a_known_identifier() {
        let known = [
            "linux", "macos", "windows", "freebsd", "netbsd", "openbsd", "android", "ios",
        ];
        assert!(known.contains(&os()), "unexpected os identifier: {}", os());
    }

    #[test]
    fn test_arch_is_a_known_identifier() {
        let known = [
            "x86", "x86_64", "arm", "aarch64", "riscv64", "powerpc64", "s390x", "loongarch64",
        ];
        assert!(
            known.contains(&arch()),
            "unexpected arch identifier: {}",
            arch()
        );
    }

    #[test]
    fn test_version_looks_like_semver() {
        let mut parts = version().split('.');
        assert!(parts.next().and_then(|p| p.parse::<u32>().ok()).is_some());
        assert!(parts.next().and_then(|p| p.parse::<u32>().ok()).is_some());
    }
}
