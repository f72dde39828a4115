//! GPU device queries.
//!
//! Provides the installed GPU name and driver version.
//! Supports NVML (feature `nvml`) and the nvidia-smi command line tool.

mod nvidia_smi;
mod nvml;

pub use nvidia_smi::NvidiaSmi;
pub use nvml::NvmlQuery;

use crate::core::{Config, DeviceQuery};
use crate::error::{NvduError, Result};

/// Pick an available device query
///
/// Order of preference:
/// 1. nvidia-smi at the configured path, when one is configured
/// 2. NVML
/// 3. nvidia-smi from PATH or the Windows default location
pub fn get_device_query(config: &Config) -> Result<Box<dyn DeviceQuery>> {
    if let Some(path) = config.nvidia_smi_path.as_deref() {
        return Ok(Box::new(NvidiaSmi::locate(Some(path))?));
    }

    match NvmlQuery::new() {
        Ok(query) => return Ok(Box::new(query)),
        Err(e) => log::debug!("NVML unavailable, trying nvidia-smi: {}", e),
    }

    NvidiaSmi::locate(None)
        .map(|smi| Box::new(smi) as Box<dyn DeviceQuery>)
        .map_err(|e| NvduError::gpu_not_available(format!("No NVIDIA GPU found: {}", e)))
}
