//! Parsers for the catalog's lookup XML and result pages.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use super::CatalogEntry;
use crate::error::{NvduError, Result};

static LOOKUP_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<LookupValue\b[^>]*>\s*<Name>(.*?)</Name>\s*<Value>(.*?)</Value>")
        .expect("lookup value pattern is valid")
});

static VERSION_CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+$").expect("version cell pattern is valid"));

/// One selectable option of a catalog dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub name: String,
    pub value: String,
}

/// Parse the `LookupValueSearch` XML document into options
pub fn parse_lookup_values(xml: &str) -> Vec<LookupOption> {
    LOOKUP_VALUE_RE
        .captures_iter(xml)
        .map(|caps| LookupOption {
            name: unescape(caps[1].trim()),
            value: caps[2].trim().to_string(),
        })
        .collect()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Read the first row of the search results page
///
/// `page_url` resolves protocol-relative and relative driver links.
pub fn parse_driver_list(html: &str, page_url: &Url) -> Result<CatalogEntry> {
    let document = Html::parse_document(html);
    let row_sel = selector("tr#driverList");
    let cell_sel = selector("td.gridItem");
    let link_sel = selector("td.driverName a");

    let row = document
        .select(&row_sel)
        .next()
        .ok_or_else(|| NvduError::catalog("no drivers found for the selected filters"))?;

    let version = row
        .select(&cell_sel)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .find(|text| VERSION_CELL_RE.is_match(text))
        .ok_or_else(|| NvduError::catalog("driver row has no version column"))?;

    let link = row
        .select(&link_sel)
        .next()
        .ok_or_else(|| NvduError::catalog("driver row has no details link"))?;

    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| NvduError::catalog("driver details link has no href"))?;

    let details_url = page_url
        .join(href)
        .map_err(|e| NvduError::catalog(format!("invalid driver link '{}': {}", href, e)))?;

    Ok(CatalogEntry {
        version,
        name: link.text().collect::<String>().trim().to_string(),
        details_url: details_url.to_string(),
    })
}

/// Extract the installer URL from a driver details page
///
/// The download button points at a confirmation page whose `url` query
/// parameter is the installer path on `download_host`.
pub fn parse_download_url(html: &str, page_url: &Url, download_host: &Url) -> Result<String> {
    let document = Html::parse_document(html);
    let button_sel = selector("a#lnkDwnldBtn");

    let href = document
        .select(&button_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| NvduError::catalog("download button not found on driver page"))?;

    let confirmation = page_url
        .join(href)
        .map_err(|e| NvduError::catalog(format!("invalid download link '{}': {}", href, e)))?;

    let installer_path = confirmation
        .query_pairs()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned());

    let installer = match installer_path {
        Some(path) => download_host
            .join(&path)
            .map_err(|e| NvduError::catalog(format!("invalid installer path '{}': {}", path, e)))?,
        None => confirmation,
    };

    Ok(installer.to_string())
}
