//! Driver catalog lookup.
//!
//! The catalog is queried with the filter values produced by the
//! classification engine and answers with the newest matching driver.

mod nvidia;
mod parse;

pub use nvidia::NvidiaCatalog;
pub use parse::{parse_download_url, parse_driver_list, parse_lookup_values, LookupOption};

use crate::core::platform::PlatformCode;
use crate::core::series::SeriesClassification;
use crate::error::Result;

/// Driver packaging type submitted with every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverType {
    /// Declarative Componentized Hardware driver (Windows 10 only)
    Dch,
}

/// Certification tier submitted with every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certification {
    /// WHQL certified (Game Ready) drivers only
    Whql,
}

/// Filters for one catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub product_class: String,
    pub series_label: String,
    pub family_label: String,
    pub platform: PlatformCode,
    pub driver_type: DriverType,
    pub certification: Certification,
}

impl CatalogQuery {
    pub fn new(classification: &SeriesClassification, platform: PlatformCode) -> Self {
        Self {
            product_class: classification.product_class.clone(),
            series_label: classification.series_label.clone(),
            family_label: classification.family_label.clone(),
            platform,
            driver_type: DriverType::Dch,
            certification: Certification::Whql,
        }
    }
}

/// Newest driver the catalog returned for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub version: String,
    pub name: String,
    pub details_url: String,
}

/// A searchable driver catalog
pub trait DriverCatalog {
    /// Newest driver matching the query
    fn latest_driver(&self, query: &CatalogQuery) -> Result<CatalogEntry>;

    /// Direct download URL of a driver found by [`latest_driver`](Self::latest_driver)
    fn download_url(&self, entry: &CatalogEntry) -> Result<String>;
}
