use nvdu::core::catalog::{parse_driver_list, parse_lookup_values};
use nvdu::core::platform::HostPlatform;
use nvdu::core::{
    CatalogEntry, CatalogQuery, ClassifiedDevice, DriverCatalog, DriverVersion, LocalReport,
    UpdateChecker, UpdateDecision,
};
use nvdu::{NvduError, Result};
use url::Url;

/// Catalog answering from fixed lookup tables, like the live service
struct TableCatalog {
    series: Vec<&'static str>,
    families: Vec<&'static str>,
    version: &'static str,
}

impl DriverCatalog for TableCatalog {
    fn latest_driver(&self, query: &CatalogQuery) -> Result<CatalogEntry> {
        if !self.series.contains(&query.series_label.as_str()) {
            return Err(NvduError::classification(format!(
                "'{}' matches no product series",
                query.series_label
            )));
        }
        if !self.families.contains(&query.family_label.as_str()) {
            return Err(NvduError::classification(format!(
                "'{}' matches no product family",
                query.family_label
            )));
        }

        Ok(CatalogEntry {
            version: self.version.to_string(),
            name: "GeForce Game Ready Driver".to_string(),
            details_url: "https://www.nvidia.com/download/driverResults.aspx/1/en-us".to_string(),
        })
    }

    fn download_url(&self, entry: &CatalogEntry) -> Result<String> {
        Ok(entry.details_url.clone())
    }
}

fn windows_10() -> HostPlatform {
    HostPlatform {
        os_type: "Windows".to_string(),
        os_version: "10".to_string(),
        arch_bits: "64bit".to_string(),
    }
}

fn device(name: &str, notebook: bool) -> ClassifiedDevice {
    let report = LocalReport {
        device_name: name.to_string(),
        driver_version: "451.67".to_string(),
        is_notebook: notebook,
    };
    ClassifiedDevice::from_report(&report, &windows_10()).unwrap()
}

#[test]
fn test_pipeline_finds_update() {
    let checker = UpdateChecker::new(TableCatalog {
        series: vec!["GeForce 10 Series", "GeForce RTX 20 Series"],
        families: vec!["GeForce GTX 1060", "GeForce GTX 1070"],
        version: "456.71",
    });

    let result = checker
        .check(
            &device("NVIDIA GeForce GTX 1060 6GB", false),
            &DriverVersion::parse("451.67").unwrap(),
        )
        .unwrap();

    assert_eq!(
        result.decision,
        UpdateDecision::UpdateAvailable(DriverVersion::parse("456.71").unwrap())
    );
}

#[test]
fn test_series_mismatch_is_classification_error() {
    let checker = UpdateChecker::new(TableCatalog {
        series: vec!["GeForce 10 Series"],
        families: vec!["GeForce GTX 1060"],
        version: "456.71",
    });

    let err = checker
        .check(
            &device("GeForce GTX 1060", true),
            &DriverVersion::parse("451.67").unwrap(),
        )
        .unwrap_err();

    assert!(matches!(err, NvduError::Classification(_)));
}

#[test]
fn test_query_carries_fixed_policy_flags() {
    let query = device("GeForce GTX 1060", false).catalog_query();
    assert_eq!(query.driver_type, nvdu::core::catalog::DriverType::Dch);
    assert_eq!(query.certification, nvdu::core::catalog::Certification::Whql);
    assert!(query.platform.requires_dch_selection());
}

#[test]
fn test_live_page_shapes() {
    let xml = "<LookupValues><LookupValue ParentID=\"1\"><Name>GeForce</Name><Value>1</Value></LookupValue></LookupValues>";
    let options = parse_lookup_values(xml);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "1");

    let html = r#"<table><tr id="driverList"><td class="gridItem driverName"><b><a href="/download/driverResults.aspx/42/en-us">Driver</a></b></td><td class="gridItem">460.89</td></tr></table>"#;
    let page = Url::parse("https://www.nvidia.com/Download/processFind.aspx").unwrap();
    let entry = parse_driver_list(html, &page).unwrap();
    assert_eq!(entry.version, "460.89");
    assert_eq!(
        entry.details_url,
        "https://www.nvidia.com/download/driverResults.aspx/42/en-us"
    );
}
