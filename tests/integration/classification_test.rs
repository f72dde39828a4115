use nvdu::core::platform;
use nvdu::core::{classify, DeviceIdentity};
use nvdu::NvduError;

fn series_label(raw: &str, notebook: bool) -> Result<String, NvduError> {
    let identity = DeviceIdentity::parse(raw, notebook)?;
    Ok(classify(&identity)?.series_label)
}

#[test]
fn test_memory_variants_share_canonical_name() {
    let names = [
        "NVIDIA GeForce GTX 1060 6GB",
        "GeForce GTX 1060 3GB",
        "GeForce GTX 1060",
    ];

    for raw in names {
        let identity = DeviceIdentity::parse(raw, false).unwrap();
        assert_eq!(identity.canonical_name, "GeForce GTX 1060");
    }
}

#[test]
fn test_catalog_series_labels() {
    let cases = [
        ("NVIDIA GeForce GTX 1060 6GB", false, "GeForce 10 Series"),
        ("GeForce MX350", false, "GeForce MX300 Series"),
        ("GeForce 980", true, "GeForce 900M Series (Notebooks)"),
        ("GeForce GTX 960M", true, "GeForce 900M Series (Notebooks)"),
        ("NVIDIA GeForce RTX 3070 Ti", false, "GeForce RTX 30 Series"),
        ("NVIDIA GeForce GTX 1660 SUPER", false, "GeForce 16 Series"),
        ("NVIDIA GeForce GTX 1650", true, "GeForce GTX 16 Series (Notebooks)"),
        ("GeForce GT 730", false, "GeForce 700 Series"),
        ("GeForce 605", false, "GeForce 600 Series"),
    ];

    for (raw, notebook, expected) in cases {
        assert_eq!(
            series_label(raw, notebook).unwrap(),
            expected,
            "{} (notebook={})",
            raw,
            notebook
        );
    }
}

#[test]
fn test_unrecognized_names_fail_explicitly() {
    for raw in ["NVIDIA TITAN RTX", "Quadro RTX A6000", "GeForce", "NVIDIA", ""] {
        let err = series_label(raw, false).unwrap_err();
        assert!(
            matches!(err, NvduError::Classification(_)),
            "{:?} -> {:?}",
            raw,
            err
        );
    }
}

#[test]
fn test_unmapped_platform_is_lookup_error() {
    let err = platform::identify("Windows", "XP", "32bit").unwrap_err();
    assert!(matches!(err, NvduError::PlatformLookup(_)));
}

#[test]
fn test_platform_table_keys() {
    assert_eq!(
        platform::PLATFORM_TABLE.descriptors(),
        vec![
            "FreeBSD x64",
            "Linux 64bit",
            "Linux aarch64",
            "Solaris x86/x64",
            "Windows 10 64bit",
            "Windows 7 64bit",
        ]
    );
}
