//! Tests for CertificateRecord and CertificateBuilder

use super::*;
use proptest::prelude::*;
use tracing_test::traced_test;

// ============================================================================
// build() Tests
// ============================================================================

#[test]
fn test_build_composes_labels_from_normalized_fields() {
    let record = build("Go", "Ada Lovelace", "2021-05-17").unwrap();

    assert_eq!(record.course().as_str(), "GO COURSE");
    assert_eq!(record.name().as_str(), "ADA LOVELACE");
    assert_eq!(record.date().to_string(), "17/05/2021");

    let labels = record.labels();
    assert_eq!(labels.title(), "GO COURSE Certificate - ADA LOVELACE");
    assert_eq!(labels.completion(), "Certification of Completion");
    assert_eq!(labels.presented(), "This Certificate is Presented To");
    assert_eq!(labels.participation(), "For participation in the GO COURSE");
    assert_eq!(labels.date(), "Date: 17/05/2021");
}

#[test]
fn test_build_does_not_duplicate_course_suffix() {
    let record = build("Security Course", "X", "2021-05-17").unwrap();

    assert_eq!(record.course().as_str(), "SECURITY COURSE");
    assert_eq!(
        record.labels().title(),
        "SECURITY COURSE Certificate - X"
    );
}

#[test]
fn test_build_rejects_wrong_date_format() {
    assert_eq!(
        build("Go", "Ada", "17-05-2021"),
        Err(ValidationError::invalid_date("17-05-2021"))
    );
}

#[test]
fn test_build_is_deterministic() {
    let first = build("Rust", "Grace Hopper", "1906-12-09").unwrap();
    let second = build("Rust", "Grace Hopper", "1906-12-09").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_build_checks_course_before_name_before_date() {
    assert_eq!(
        build("", "", "bad"),
        Err(ValidationError::empty_input("course"))
    );
    assert_eq!(
        build("Go", "", "bad"),
        Err(ValidationError::empty_input("name"))
    );
    assert_eq!(
        build("Go", "Ada", "bad"),
        Err(ValidationError::invalid_date("bad"))
    );
}

#[test]
fn test_build_rejects_lengths_at_default_limits() {
    let course = "c".repeat(20);
    assert_eq!(
        build(&course, "Ada", "2021-05-17"),
        Err(ValidationError::too_long("course", 20, 20))
    );

    let name = "n".repeat(30);
    assert_eq!(
        build("Go", &name, "2021-05-17"),
        Err(ValidationError::too_long("name", 30, 30))
    );

    let course = "c".repeat(19);
    let name = "n".repeat(29);
    assert!(build(&course, &name, "2021-05-17").is_ok());
}

#[test]
fn test_build_rejects_whitespace_only_fields() {
    assert_eq!(
        build("   ", "Ada", "2021-05-17"),
        Err(ValidationError::empty_input("course"))
    );
    assert_eq!(
        build("Go", "\t\n", "2021-05-17"),
        Err(ValidationError::empty_input("name"))
    );
}

// ============================================================================
// CertificateBuilder Tests
// ============================================================================

#[test]
fn test_builder_default_uses_default_limits() {
    let builder = CertificateBuilder::default();
    assert_eq!(builder.limits(), FieldLimits::default());
}

#[test]
fn test_builder_with_custom_limits() {
    let builder = CertificateBuilder::new(FieldLimits::new(40, 10));

    let course = "Advanced Distributed Systems";
    let record = builder.build(course, "Linus", "2021-05-17").unwrap();
    assert_eq!(
        record.course().as_str(),
        "ADVANCED DISTRIBUTED SYSTEMS COURSE"
    );

    assert_eq!(
        builder.build("Go", "Ada Lovelace", "2021-05-17"),
        Err(ValidationError::too_long("name", 12, 10))
    );
}

#[test]
fn test_builder_try_new_validates_limits() {
    assert!(CertificateBuilder::try_new(FieldLimits::default()).is_ok());
    assert!(matches!(
        CertificateBuilder::try_new(FieldLimits::new(0, 30)),
        Err(ValidationError::InvalidLimit { .. })
    ));
}

#[test]
fn test_builder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<CertificateBuilder>();
    assert_send_sync::<CertificateRecord>();
}

// ============================================================================
// Serialization and logging
// ============================================================================

#[test]
fn test_record_serialized_shape() {
    let record = build("Go", "Ada Lovelace", "2021-05-17").unwrap();

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "course": "GO COURSE",
            "name": "ADA LOVELACE",
            "date": "2021-05-17",
            "labels": {
                "title": "GO COURSE Certificate - ADA LOVELACE",
                "completion": "Certification of Completion",
                "presented": "This Certificate is Presented To",
                "participation": "For participation in the GO COURSE",
                "date": "Date: 17/05/2021"
            }
        })
    );
}

#[test]
#[traced_test]
fn test_build_logs_rejected_field() {
    let _ = build("Go", "", "2021-05-17");

    assert!(logs_contain("Certificate input rejected"));
    assert!(logs_contain("Field 'name' cannot be empty"));
}

#[test]
#[traced_test]
fn test_build_logs_built_record() {
    build("Go", "Ada", "2021-05-17").unwrap();

    assert!(logs_contain("Certificate record built"));
    assert!(logs_contain("GO COURSE"));
}

proptest! {
    #[test]
    fn prop_identical_inputs_give_identical_records(
        course in "[a-zA-Z ]{1,19}",
        name in "[a-zA-Z ]{1,29}",
        year in 1000u32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = format!("{year:04}-{month:02}-{day:02}");

        let first = build(&course, &name, &date);
        let second = build(&course, &name, &date);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_date_label_mirrors_input(
        year in 1000u32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = format!("{year:04}-{month:02}-{day:02}");

        let record = build("Go", "Ada", &date).unwrap();

        let expected = format!("Date: {day:02}/{month:02}/{year:04}");
        prop_assert_eq!(record.labels().date(), expected.as_str());
    }
}
