use std::path::PathBuf;
use std::process::Command;

use crate::core::DeviceQuery;
use crate::error::{NvduError, Result};

/// Install location of nvidia-smi on Windows when it is not on PATH
const WINDOWS_DEFAULT_PATH: &str = "C:/Windows/System32/nvidia-smi.exe";

/// Device query backed by the `nvidia-smi` command line tool
pub struct NvidiaSmi {
    binary: PathBuf,
}

impl NvidiaSmi {
    /// Locate nvidia-smi: explicit path, then PATH, then the Windows default
    pub fn locate(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            let binary = PathBuf::from(path);
            if binary.exists() {
                return Ok(Self { binary });
            }
            return Err(NvduError::gpu_not_available(format!(
                "configured nvidia-smi not found: {}",
                path
            )));
        }

        if let Ok(binary) = which::which("nvidia-smi") {
            return Ok(Self { binary });
        }

        let fallback = PathBuf::from(WINDOWS_DEFAULT_PATH);
        if fallback.exists() {
            return Ok(Self { binary: fallback });
        }

        Err(NvduError::gpu_not_available(
            "nvidia-smi not found (is the NVIDIA driver installed?)",
        ))
    }

    fn query(&self, field: &str) -> Result<String> {
        let query = format!("--query-gpu={}", field);
        let output = Command::new(&self.binary)
            .args([query.as_str(), "--format=csv,noheader"])
            .output()
            .map_err(|e| {
                NvduError::gpu_not_available(format!(
                    "Failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(NvduError::gpu_not_available(format!(
                "nvidia-smi exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        first_line(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            NvduError::gpu_not_available(format!("nvidia-smi returned no value for {}", field))
        })
    }
}

/// One line per GPU; the first GPU is the one we update
fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .find(|line| !line.trim().is_empty())
        .map(str::to_string)
}

impl DeviceQuery for NvidiaSmi {
    fn backend(&self) -> &'static str {
        "nvidia-smi"
    }

    fn device_name(&self) -> Result<String> {
        self.query("name")
    }

    fn driver_version(&self) -> Result<String> {
        self.query("driver_version")
    }
}
