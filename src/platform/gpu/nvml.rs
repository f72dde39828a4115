#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;
#[cfg(feature = "nvml")]
use once_cell::sync::Lazy;

use crate::core::DeviceQuery;
use crate::error::{NvduError, Result};

/// NVML must be initialized once per process
#[cfg(feature = "nvml")]
static NVML: Lazy<Option<Nvml>> = Lazy::new(|| Nvml::init().ok());

/// Device query through the NVIDIA Management Library
pub struct NvmlQuery {
    device_index: u32,
}

impl NvmlQuery {
    /// Use the first GPU
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = nvml()?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                NvduError::gpu_not_available(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(NvduError::gpu_not_available(
                "NVML support not enabled. Recompile with --features nvml",
            ))
        }
    }
}

#[cfg(feature = "nvml")]
fn nvml() -> Result<&'static Nvml> {
    NVML.as_ref().ok_or_else(|| {
        NvduError::gpu_not_available("NVML not available (NVIDIA driver not installed or incompatible)")
    })
}

impl DeviceQuery for NvmlQuery {
    fn backend(&self) -> &'static str {
        "nvml"
    }

    fn device_name(&self) -> Result<String> {
        #[cfg(feature = "nvml")]
        {
            nvml()?
                .device_by_index(self.device_index)
                .and_then(|device| device.name())
                .map_err(|e| NvduError::gpu_not_available(format!("Failed to read GPU name: {}", e)))
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(NvduError::gpu_not_available(format!(
                "NVML support not enabled for GPU {}",
                self.device_index
            )))
        }
    }

    fn driver_version(&self) -> Result<String> {
        #[cfg(feature = "nvml")]
        {
            nvml()?.sys_driver_version().map_err(|e| {
                NvduError::gpu_not_available(format!("Failed to read driver version: {}", e))
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(NvduError::gpu_not_available("NVML support not enabled"))
        }
    }
}
