// Core business logic module

pub mod catalog;
pub mod checker;
pub mod config;
pub mod decision;
pub mod device;
pub mod download;
pub mod platform;
pub mod probe;
pub mod series;
pub mod version;

// Re-export commonly used items
pub use catalog::{CatalogEntry, CatalogQuery, DriverCatalog, NvidiaCatalog};
pub use checker::{CheckResult, ClassifiedDevice, UpdateChecker};
pub use config::Config;
pub use decision::{decide, InvalidReason, UpdateDecision};
pub use device::DeviceIdentity;
pub use download::{DownloadOutcome, Downloader};
pub use platform::{detect_host, HostPlatform, PlatformCode};
pub use probe::{collect_local_report, DeviceQuery, LocalReport};
pub use series::{classify, ModelCode, SeriesClassification};
pub use version::DriverVersion;
