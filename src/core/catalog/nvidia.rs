use std::time::Duration;

use url::Url;

use super::parse::{parse_download_url, parse_driver_list, parse_lookup_values, LookupOption};
use super::{CatalogEntry, CatalogQuery, Certification, DriverCatalog, DriverType};
use crate::error::{NvduError, Result};

const LOOKUP_URL: &str = "https://www.nvidia.com/Download/API/lookupValueSearch.aspx";
const SEARCH_URL: &str = "https://www.nvidia.com/Download/processFind.aspx";
const DOWNLOAD_HOST: &str = "https://us.download.nvidia.com";
const USER_AGENT: &str = concat!("nvdu/", env!("CARGO_PKG_VERSION"));

/// Lookup dropdown levels, the value is the catalog's `TypeID`
#[derive(Debug, Clone, Copy)]
enum LookupLevel {
    ProductType = 1,
    Series = 2,
    Family = 3,
}

impl LookupLevel {
    fn label(self) -> &'static str {
        match self {
            LookupLevel::ProductType => "product type",
            LookupLevel::Series => "product series",
            LookupLevel::Family => "product family",
        }
    }
}

/// The public NVIDIA driver search
pub struct NvidiaCatalog {
    client: reqwest::blocking::Client,
    language: String,
}

impl NvidiaCatalog {
    pub fn new(language: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            language: language.to_string(),
        })
    }

    fn get_text(&self, url: &Url) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self.client.get(url.as_str()).send()?;
        if !response.status().is_success() {
            return Err(NvduError::catalog(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        Ok(response.text()?)
    }

    fn lookup(&self, level: LookupLevel, parent: Option<&str>) -> Result<Vec<LookupOption>> {
        let mut url = Url::parse(LOOKUP_URL).map_err(|e| NvduError::catalog(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("TypeID", &(level as u8).to_string());
            if let Some(parent) = parent {
                query.append_pair("ParentID", parent);
            }
        }

        let options = parse_lookup_values(&self.get_text(&url)?);
        if options.is_empty() {
            return Err(NvduError::catalog(format!(
                "catalog returned no {} options",
                level.label()
            )));
        }
        Ok(options)
    }

    fn select(
        &self,
        level: LookupLevel,
        parent: Option<&str>,
        wanted: &str,
        matches: impl Fn(&LookupOption) -> bool,
    ) -> Result<String> {
        let options = self.lookup(level, parent)?;
        let option = options.iter().find(|option| matches(option)).ok_or_else(|| {
            NvduError::classification(format!(
                "'{}' matches no {} offered by the catalog",
                wanted,
                level.label()
            ))
        })?;

        log::debug!(
            "Selected {} '{}' = {}",
            level.label(),
            option.name,
            option.value
        );
        Ok(option.value.clone())
    }

    fn search_url(&self, query: &CatalogQuery, psid: &str, pfid: &str) -> Result<Url> {
        let mut url = Url::parse(SEARCH_URL).map_err(|e| NvduError::catalog(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("psid", psid)
                .append_pair("pfid", pfid)
                .append_pair("osid", &query.platform.code.to_string())
                .append_pair("lid", "1")
                .append_pair("lang", &self.language)
                .append_pair("ctk", "0");

            match query.certification {
                Certification::Whql => {
                    pairs.append_pair("whql", "1");
                }
            }

            if query.platform.requires_dch_selection() {
                match query.driver_type {
                    DriverType::Dch => {
                        pairs.append_pair("dtcid", "1");
                    }
                }
            }
        }
        Ok(url)
    }
}

impl DriverCatalog for NvidiaCatalog {
    fn latest_driver(&self, query: &CatalogQuery) -> Result<CatalogEntry> {
        let ptid = self.select(
            LookupLevel::ProductType,
            None,
            &query.product_class,
            |option| query.family_label.contains(&option.name),
        )?;

        let psid = self.select(
            LookupLevel::Series,
            Some(&ptid),
            &query.series_label,
            |option| option.name == query.series_label,
        )?;

        let pfid = self.select(
            LookupLevel::Family,
            Some(&psid),
            &query.family_label,
            |option| option.name == query.family_label,
        )?;

        let url = self.search_url(query, &psid, &pfid)?;
        let entry = parse_driver_list(&self.get_text(&url)?, &url)?;

        log::info!("Catalog offers {} ({})", entry.version, entry.name);
        Ok(entry)
    }

    fn download_url(&self, entry: &CatalogEntry) -> Result<String> {
        let page = Url::parse(&entry.details_url)
            .map_err(|e| NvduError::catalog(format!("invalid details URL: {}", e)))?;
        let host = Url::parse(DOWNLOAD_HOST).map_err(|e| NvduError::catalog(e.to_string()))?;

        parse_download_url(&self.get_text(&page)?, &page, &host)
    }
}
