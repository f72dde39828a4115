//! Operating system lookup for the driver catalog.
//!
//! The catalog filters drivers by a numeric OS id. Only the descriptors in
//! [`PLATFORM_TABLE`] are known; anything else is an error because a wrong
//! id silently returns drivers for another platform.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::error::{NvduError, Result};

/// Descriptor that also enables the DCH driver-type filter
const DCH_DESCRIPTOR: &str = "Windows 10 64bit";

/// Catalog OS ids keyed by `"{os} {version} {arch}"` (Windows) or `"{os} {arch}"`
pub static PLATFORM_TABLE: Lazy<PlatformTable> = Lazy::new(|| {
    PlatformTable::new(&[
        ("Windows 10 64bit", 57),
        ("Windows 7 64bit", 19),
        ("Linux aarch64", 124),
        ("Linux 64bit", 12),
        ("Solaris x86/x64", 13),
        ("FreeBSD x64", 22),
    ])
});

/// Catalog OS id together with the descriptor it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCode {
    pub descriptor: String,
    pub code: u32,
}

impl PlatformCode {
    /// Only Windows 10 drivers are published in a separate DCH package
    pub fn requires_dch_selection(&self) -> bool {
        self.descriptor == DCH_DESCRIPTOR
    }
}

impl fmt::Display for PlatformCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.descriptor, self.code)
    }
}

/// Immutable descriptor to OS id mapping
#[derive(Debug)]
pub struct PlatformTable {
    codes: HashMap<String, u32>,
}

impl PlatformTable {
    pub fn new(entries: &[(&str, u32)]) -> Self {
        Self {
            codes: entries
                .iter()
                .map(|(descriptor, code)| (descriptor.to_string(), *code))
                .collect(),
        }
    }

    /// Resolve the catalog OS id for a host description
    pub fn identify(&self, os_type: &str, os_version: &str, arch_bits: &str) -> Result<PlatformCode> {
        let descriptor = descriptor(os_type, os_version, arch_bits);

        self.codes
            .get(&descriptor)
            .map(|code| PlatformCode {
                descriptor: descriptor.clone(),
                code: *code,
            })
            .ok_or_else(|| {
                NvduError::platform_lookup(format!("no driver catalog entry for '{}'", descriptor))
            })
    }

    pub fn descriptors(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.codes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Resolve against the built-in table
pub fn identify(os_type: &str, os_version: &str, arch_bits: &str) -> Result<PlatformCode> {
    PLATFORM_TABLE.identify(os_type, os_version, arch_bits)
}

fn descriptor(os_type: &str, os_version: &str, arch_bits: &str) -> String {
    if os_type == "Windows" {
        format!("{} {} {}", os_type, os_version, arch_bits)
    } else {
        format!("{} {}", os_type, arch_bits)
    }
}

/// OS type, version and architecture of the running host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os_type: String,
    pub os_version: String,
    pub arch_bits: String,
}

impl HostPlatform {
    pub fn identify(&self) -> Result<PlatformCode> {
        identify(&self.os_type, &self.os_version, &self.arch_bits)
    }

    /// Replace the detected OS version, e.g. to look up Windows 11 as "10"
    pub fn with_version_override(mut self, version: Option<&str>) -> Self {
        if let Some(version) = version {
            log::debug!("OS version '{}' overridden to '{}'", self.os_version, version);
            self.os_version = version.to_string();
        }
        self
    }
}

/// Describe the running host in the terms the catalog table uses
pub fn detect_host() -> HostPlatform {
    let os_type = match std::env::consts::OS {
        "windows" => "Windows",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        "solaris" | "illumos" => "Solaris",
        "macos" => "Darwin",
        other => other,
    }
    .to_string();

    let os_version = sysinfo::System::os_version()
        .map(|v| windows_release(&v))
        .unwrap_or_default();

    let arch_bits = arch_bits(&os_type, std::env::consts::ARCH).to_string();

    log::debug!(
        "Host platform: type={} version={} arch={}",
        os_type,
        os_version,
        arch_bits
    );

    HostPlatform {
        os_type,
        os_version,
        arch_bits,
    }
}

/// `"10 (19045)"` / `"10.0.19045"` -> `"10"`
fn windows_release(version: &str) -> String {
    version
        .split(|c: char| c == '.' || c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_string()
}

fn arch_bits(os_type: &str, arch: &str) -> &'static str {
    match (os_type, arch) {
        ("Linux", "aarch64") => "aarch64",
        ("Solaris", "x86_64") | ("Solaris", "x86") => "x86/x64",
        ("FreeBSD", "x86_64") => "x64",
        (_, "x86_64") => "64bit",
        (_, "aarch64") => "arm64",
        _ => "32bit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms() {
        assert_eq!(identify("Windows", "10", "64bit").unwrap().code, 57);
        assert_eq!(identify("Windows", "7", "64bit").unwrap().code, 19);
        assert_eq!(identify("Linux", "5.15.0", "64bit").unwrap().code, 12);
        assert_eq!(identify("Linux", "", "aarch64").unwrap().code, 124);
        assert_eq!(identify("Solaris", "11", "x86/x64").unwrap().code, 13);
        assert_eq!(identify("FreeBSD", "13.2", "x64").unwrap().code, 22);
    }

    #[test]
    fn test_linux_ignores_version() {
        let a = identify("Linux", "6.1", "64bit").unwrap();
        let b = identify("Linux", "5.4", "64bit").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.descriptor, "Linux 64bit");
    }

    #[test]
    fn test_unmapped_platforms_are_errors() {
        let cases = [
            ("Windows", "11", "64bit"),
            ("Windows", "10", "32bit"),
            ("Linux", "6.1", "32bit"),
            ("Windows", "10", arch_bits("Windows", "aarch64")),
            ("FreeBSD", "14.0", arch_bits("FreeBSD", "aarch64")),
            ("Darwin", "14.0", "64bit"),
            ("", "", ""),
        ];
        for (os, ver, arch) in cases {
            let err = identify(os, ver, arch).unwrap_err();
            assert!(matches!(err, NvduError::PlatformLookup(_)), "{} {} {}", os, ver, arch);
        }
    }

    #[test]
    fn test_dch_only_for_windows_10() {
        assert!(identify("Windows", "10", "64bit").unwrap().requires_dch_selection());
        assert!(!identify("Windows", "7", "64bit").unwrap().requires_dch_selection());
        assert!(!identify("Linux", "", "64bit").unwrap().requires_dch_selection());
    }

    #[test]
    fn test_custom_table() {
        let table = PlatformTable::new(&[("Linux 64bit", 99)]);
        assert_eq!(table.identify("Linux", "", "64bit").unwrap().code, 99);
        assert!(table.identify("Windows", "10", "64bit").is_err());
        assert_eq!(table.descriptors(), vec!["Linux 64bit"]);
    }

    #[test]
    fn test_windows_release() {
        assert_eq!(windows_release("10 (19045)"), "10");
        assert_eq!(windows_release("10.0.19045"), "10");
        assert_eq!(windows_release("7"), "7");
    }

    #[test]
    fn test_arch_bits() {
        assert_eq!(arch_bits("Windows", "x86_64"), "64bit");
        assert_eq!(arch_bits("Linux", "aarch64"), "aarch64");
        assert_eq!(arch_bits("FreeBSD", "x86_64"), "x64");
        assert_eq!(arch_bits("Linux", "x86"), "32bit");
        assert_eq!(arch_bits("Windows", "aarch64"), "arm64");
    }

    #[test]
    fn test_version_override() {
        let host = HostPlatform {
            os_type: "Windows".to_string(),
            os_version: "11".to_string(),
            arch_bits: "64bit".to_string(),
        };
        assert!(host.identify().is_err());

        let host = host.with_version_override(Some("10"));
        assert_eq!(host.identify().unwrap().code, 57);
        assert_eq!(host.clone().with_version_override(None), host);
    }

    #[test]
    fn test_detect_host_is_populated() {
        let host = detect_host();
        assert!(!host.os_type.is_empty());
        assert!(!host.arch_bits.is_empty());
    }
}
