//! Calendar date checks.
//!
//! The publish date must match the fixed `YYYY-MM-DD` layout and name a real
//! calendar date; the layout regex alone would let `2023-02-30` through.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use catalog_model::{DATE_FORMAT, FIELD_PUBLISH_DATE};

use crate::issue::Issue;
use crate::parser::{Element, first_matching_child};

/// Fixed four-digit-year layout with zero-padded month and day.
static DATE_LAYOUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid date layout regex"));

/// Check that the publish date is a real calendar date in the fixed layout.
pub fn check(record: &Element) -> Vec<Issue> {
    match first_matching_child(record, FIELD_PUBLISH_DATE) {
        None => vec![Issue::MissingElement {
            field: FIELD_PUBLISH_DATE,
        }],
        Some(date) if !is_real_date(&date.text) => vec![Issue::InvalidDate {
            value: date.text.clone(),
        }],
        Some(_) => Vec::new(),
    }
}

fn is_real_date(value: &str) -> bool {
    DATE_LAYOUT_REGEX.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}
