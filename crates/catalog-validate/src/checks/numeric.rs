//! Numeric field checks.

use catalog_model::FIELD_PRICE;

use crate::issue::Issue;
use crate::parser::{Element, first_matching_child};

/// Check that the price field parses as a decimal number.
pub fn check(record: &Element) -> Vec<Issue> {
    match first_matching_child(record, FIELD_PRICE) {
        None => vec![Issue::MissingElement { field: FIELD_PRICE }],
        Some(price) if price.text.trim().parse::<f64>().is_err() => vec![Issue::InvalidPrice {
            value: price.text.clone(),
        }],
        Some(_) => Vec::new(),
    }
}
