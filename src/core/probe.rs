//! Local device facts gathered before classification.

use crate::core::Config;
use crate::error::Result;

/// Source of the installed GPU name and driver version
///
/// Implementations live in the platform layer (nvidia-smi, NVML).
pub trait DeviceQuery {
    /// Short backend name used in diagnostics
    fn backend(&self) -> &'static str;

    /// Raw device name, unnormalized
    fn device_name(&self) -> Result<String>;

    /// Raw driver version, unvalidated
    fn driver_version(&self) -> Result<String>;
}

/// Everything the classification engine needs from the local machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalReport {
    pub device_name: String,
    pub driver_version: String,
    pub is_notebook: bool,
}

/// Query the device once and resolve the notebook flag
///
/// A configured notebook override wins over the battery probe.
pub fn collect_local_report(
    query: &dyn DeviceQuery,
    config: &Config,
    has_battery: impl FnOnce() -> bool,
) -> Result<LocalReport> {
    let device_name = query.device_name()?;
    let driver_version = query.driver_version()?;

    let is_notebook = match config.notebook_override {
        Some(forced) => {
            log::debug!("Notebook flag forced to {} by config", forced);
            forced
        }
        None => has_battery(),
    };

    log::debug!(
        "Local report via {}: name='{}' version='{}' notebook={}",
        query.backend(),
        device_name.trim_end(),
        driver_version.trim_end(),
        is_notebook
    );

    Ok(LocalReport {
        device_name,
        driver_version,
        is_notebook,
    })
}
