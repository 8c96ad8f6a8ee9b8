//! Integration tests for the record validator.

use catalog_validate::{ValidateError, report_payload, validate_catalog};

fn book(title: &str, author: &str, price: &str, date: &str) -> String {
    format!(
        "<book><title>{title}</title><author>{author}</author><price>{price}</price><publish_date>{date}</publish_date></book>"
    )
}

fn container(records: &[String]) -> String {
    format!("<books>{}</books>", records.concat())
}

#[test]
fn clean_record_passes() {
    let input = container(&[book("Book Title", "Author Name", "19.99", "2023-01-01")]);
    let report = validate_catalog(&input).expect("validate");
    assert!(report.is_clean());
    assert_eq!(report.error_count(), 0);
}

#[test]
fn title_rule_boundaries() {
    let long_ok = "a".repeat(50);
    let input = container(&[book(&long_ok, "Author", "1.0", "2023-01-01")]);
    assert!(validate_catalog(&input).expect("validate").is_clean());

    let too_long = "a".repeat(51);
    for bad in [too_long.as_str(), "", "semi;colon", "comma, here"] {
        let input = container(&[book(bad, "Author", "1.0", "2023-01-01")]);
        let report = validate_catalog(&input).expect("validate");
        let errors = report.record_errors(1);
        assert_eq!(errors.len(), 1, "title {bad:?} should fail exactly once");
        assert!(errors[0].contains("title"), "unexpected error: {}", errors[0]);
    }
}

#[test]
fn author_rule_rejects_non_letters() {
    for bad in ["Name 2", "O'Brien", "a@b", ""] {
        let input = container(&[book("Title", bad, "1.0", "2023-01-01")]);
        let report = validate_catalog(&input).expect("validate");
        assert_eq!(report.record_errors(1).len(), 1);
        assert!(report.record_errors(1)[0].contains("author"));
    }
}

#[test]
fn price_rule() {
    let input = container(&[book("Title", "Author", " 19.99 ", "2023-01-01")]);
    assert!(validate_catalog(&input).expect("validate").is_clean());

    let input = container(&[book("Title", "Author", "nineteen", "2023-01-01")]);
    let report = validate_catalog(&input).expect("validate");
    assert!(report.record_errors(1)[0].contains("price"));
}

#[test]
fn date_rule_requires_real_calendar_date() {
    for bad in ["2023-02-30", "2023-13-01", "2023-1-1", "01-01-2023"] {
        let input = container(&[book("Title", "Author", "1.0", bad)]);
        let report = validate_catalog(&input).expect("validate");
        assert_eq!(report.record_errors(1).len(), 1, "date {bad:?} should fail");
        assert!(report.record_errors(1)[0].contains("publish_date"));
    }
}

#[test]
fn missing_fields_are_reported_per_field() {
    let input = "<books><book><title>Title Only</title></book></books>";
    let report = validate_catalog(input).expect("validate");
    let errors = report.record_errors(1);
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e == "missing element: author"));
    assert!(errors.iter().any(|e| e == "missing element: price"));
    assert!(errors.iter().any(|e| e == "missing element: publish_date"));
}

#[test]
fn duplicate_field_inspects_first_occurrence_only() {
    // Second author would fail the rule, but only the first is inspected.
    let input = "<books><book><title>Title</title>\
         <author>Author Name</author><author>1; DROP TABLE books</author>\
         <price>9.99</price><publish_date>2023-01-01</publish_date></book></books>";
    let report = validate_catalog(input).expect("validate");
    assert!(report.is_clean());

    // Swapped order: the first occurrence fails even though the last passes.
    let input = "<books><book><title>Title</title>\
         <author>1; DROP TABLE books</author><author>Author Name</author>\
         <price>9.99</price><publish_date>2023-01-01</publish_date></book></books>";
    let report = validate_catalog(input).expect("validate");
    assert_eq!(report.record_errors(1).len(), 1);
    assert!(report.record_errors(1)[0].contains("author"));
}

#[test]
fn sibling_records_are_still_checked_after_a_failure() {
    let input = container(&[
        book("Title", "Author", "bad", "2023-01-01"),
        book("Second Title", "Second Author", "2.50", "2023-06-15"),
        book("Third", "Third Author", "3.00", "2023-02-30"),
    ]);
    let report = validate_catalog(&input).expect("validate");
    assert_eq!(report.record_errors(1).len(), 1);
    assert!(report.record_errors(2).is_empty());
    assert_eq!(report.record_errors(3).len(), 1);
}

#[test]
fn bare_record_root_is_accepted() {
    let report = validate_catalog(&book("Title", "Author", "1.0", "2023-01-01"))
        .expect("validate bare record");
    assert!(report.is_clean());
}

#[test]
fn empty_container_is_a_parse_error() {
    let err = validate_catalog("<books></books>").expect_err("empty container");
    assert!(matches!(err, ValidateError::EmptyContainer));

    let err = validate_catalog("<books>   </books>").expect_err("whitespace only");
    assert!(matches!(err, ValidateError::EmptyContainer));
}

#[test]
fn mixed_siblings_are_a_parse_error() {
    let input = format!(
        "<books>{}<magazine><title>Nope</title></magazine></books>",
        book("Title", "Author", "1.0", "2023-01-01")
    );
    let err = validate_catalog(&input).expect_err("mixed siblings");
    assert!(matches!(err, ValidateError::UnexpectedElement { name } if name == "magazine"));
}

#[test]
fn unexpected_root_is_a_parse_error() {
    let err = validate_catalog("<library><book/></library>").expect_err("bad root");
    assert!(matches!(err, ValidateError::UnexpectedRoot { name } if name == "library"));
}

#[test]
fn malformed_document_aborts_with_no_partial_results() {
    for bad in [
        "<books><book><title>Unclosed</book></books>",
        "<books><book>",
        "not xml at all <",
        "",
    ] {
        let err = validate_catalog(bad).expect_err("malformed input");
        assert!(matches!(err, ValidateError::Malformed { .. }), "input {bad:?}");
    }
}

#[test]
fn report_payload_shape() {
    let input = container(&[
        book("Title", "Author", "1.0", "2023-01-01"),
        book("", "Author", "bad", "2023-01-01"),
    ]);
    let report = validate_catalog(&input).expect("validate");
    let payload = report_payload(&report, 2);
    let value = serde_json::to_value(&payload).expect("serialize payload");
    assert_eq!(value["schema"], "catalog-relay.validation-report");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["record_count"], 2);
    assert_eq!(value["reports"].as_array().expect("reports").len(), 1);
    assert_eq!(value["reports"][0]["position"], 2);
    assert_eq!(value["reports"][0]["error_count"], 2);
}
