//! Text field format checks.

use std::sync::LazyLock;

use regex::Regex;

use catalog_model::{FIELD_AUTHOR, FIELD_TITLE};

use crate::issue::Issue;
use crate::parser::{Element, first_matching_child};

/// Bounded title: letters, digits, and spaces, 1 to 50 characters.
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]{1,50}$").expect("invalid title regex"));

/// Author: letters and spaces only, at least one character.
static AUTHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("invalid author regex"));

/// Check the text fields of one record.
pub fn check(record: &Element) -> Vec<Issue> {
    let mut issues = Vec::new();

    match first_matching_child(record, FIELD_TITLE) {
        None => issues.push(Issue::MissingElement { field: FIELD_TITLE }),
        Some(title) if !TITLE_REGEX.is_match(&title.text) => issues.push(Issue::InvalidTitle {
            value: title.text.clone(),
        }),
        Some(_) => {}
    }

    match first_matching_child(record, FIELD_AUTHOR) {
        None => issues.push(Issue::MissingElement {
            field: FIELD_AUTHOR,
        }),
        Some(author) if !AUTHOR_REGEX.is_match(&author.text) => {
            issues.push(Issue::InvalidAuthor {
                value: author.text.clone(),
            });
        }
        Some(_) => {}
    }

    issues
}
