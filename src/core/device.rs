//! Device name normalization.

use crate::error::{NvduError, Result};

/// Brand token newer drivers prefix to the reported device name
const VENDOR_BRAND: &str = "NVIDIA";

/// Capacity suffixes that mark SKU variants of the same chip (GTX 1060 3GB/6GB)
const MEMORY_SUFFIXES: [&str; 2] = ["3GB", "6GB"];

/// Identity of the local GPU as the catalog knows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub raw_name: String,
    pub canonical_name: String,
    pub is_notebook_variant: bool,
}

impl DeviceIdentity {
    /// Normalize a raw device name as reported by the driver
    ///
    /// `is_notebook_variant` comes from the battery probe, not from the name.
    pub fn parse(raw: &str, is_notebook_variant: bool) -> Result<Self> {
        let trimmed = raw.trim_end_matches(|c: char| c.is_control() || c.is_whitespace());
        if trimmed.trim().is_empty() {
            return Err(NvduError::classification("device name is empty"));
        }

        let canonical_name = canonicalize(trimmed);
        if canonical_name.is_empty() {
            return Err(NvduError::classification(format!(
                "device name '{}' has no model after removing vendor prefix",
                trimmed
            )));
        }

        log::debug!("Canonical device name: '{}' -> '{}'", trimmed, canonical_name);

        Ok(Self {
            raw_name: trimmed.to_string(),
            canonical_name,
            is_notebook_variant,
        })
    }

    pub fn notebook_suffix(&self) -> &'static str {
        if self.is_notebook_variant {
            " (Notebooks)"
        } else {
            ""
        }
    }
}

fn canonicalize(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();

    if tokens.first() == Some(&VENDOR_BRAND) {
        tokens.remove(0);
    }

    if let Some(last) = tokens.last() {
        if MEMORY_SUFFIXES.iter().any(|suffix| last.ends_with(suffix)) {
            tokens.pop();
        }
    }

    tokens.join(" ")
}
