use std::cmp::Ordering;

use nvdu::core::version::{compare, DriverVersion};
use nvdu::core::{decide, InvalidReason, UpdateDecision};

#[test]
fn test_decisions() {
    assert_eq!(
        decide("451.67", "456.71"),
        UpdateDecision::UpdateAvailable(DriverVersion::parse("456.71").unwrap())
    );
    assert_eq!(decide("456.71", "456.71"), UpdateDecision::UpToDate);
    assert!(matches!(
        decide("456.71", "451.67"),
        UpdateDecision::Invalid(InvalidReason::CandidateOlder { .. })
    ));
    assert!(matches!(
        decide("abc", "456.71"),
        UpdateDecision::Invalid(InvalidReason::Unparseable { .. })
    ));
}

#[test]
fn test_version_round_trip() {
    for major in [100u16, 385, 456, 999] {
        for minor in [0u8, 7, 41, 99] {
            let text = format!("{:03}.{:02}", major, minor);
            let version = DriverVersion::parse(&text).unwrap();
            assert_eq!(version.to_string(), text);
        }
    }
}

#[test]
fn test_compare_is_lexicographic() {
    let pairs = [("451.67", "456.71"), ("456.38", "456.71"), ("399.99", "400.00")];

    for (lower, higher) in pairs {
        let a = DriverVersion::parse(lower).unwrap();
        let b = DriverVersion::parse(higher).unwrap();
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }
}

#[test]
fn test_linux_style_versions_are_rejected() {
    // Three-group versions do not follow the major.minor scheme
    assert!(DriverVersion::parse("535.104.05").is_err());
    assert!(decide("535.104.05", "535.10").is_invalid());
}
