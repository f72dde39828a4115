//! Runs the classification pipeline against a driver catalog.

use crate::core::catalog::{CatalogEntry, CatalogQuery, DriverCatalog};
use crate::core::decision::{self, UpdateDecision};
use crate::core::device::DeviceIdentity;
use crate::core::platform::{HostPlatform, PlatformCode};
use crate::core::probe::LocalReport;
use crate::core::series::{self, SeriesClassification};
use crate::core::version::DriverVersion;
use crate::error::Result;

/// Local device mapped onto catalog filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDevice {
    pub identity: DeviceIdentity,
    pub classification: SeriesClassification,
    pub platform: PlatformCode,
}

impl ClassifiedDevice {
    /// Parse, classify and resolve the platform, failing on the first error
    pub fn from_report(report: &LocalReport, host: &HostPlatform) -> Result<Self> {
        let platform = host.identify()?;
        let identity = DeviceIdentity::parse(&report.device_name, report.is_notebook)?;
        let classification = series::classify(&identity)?;

        Ok(Self {
            identity,
            classification,
            platform,
        })
    }

    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery::new(&self.classification, self.platform.clone())
    }
}

/// Outcome of one catalog check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub decision: UpdateDecision,
    pub entry: CatalogEntry,
}

pub struct UpdateChecker<C: DriverCatalog> {
    catalog: C,
}

impl<C: DriverCatalog> UpdateChecker<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Ask the catalog for the newest driver and decide against `current`
    pub fn check(&self, device: &ClassifiedDevice, current: &DriverVersion) -> Result<CheckResult> {
        let entry = self.catalog.latest_driver(&device.catalog_query())?;
        let decision = decision::decide(&current.to_string(), &entry.version);

        Ok(CheckResult { decision, entry })
    }
}
