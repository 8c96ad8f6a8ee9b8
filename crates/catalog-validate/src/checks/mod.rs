//! Per-field validation checks.
//!
//! Each module checks one family of fields independently. A failing field
//! never stops the remaining checks for the same record, and a failing
//! record never stops its siblings.

mod dates;
mod numeric;
mod text;

use crate::issue::Issue;
use crate::parser::Element;

/// Run every field check against one record.
pub fn run(record: &Element) -> Vec<Issue> {
    let mut issues = text::check(record);
    issues.extend(numeric::check(record));
    issues.extend(dates::check(record));
    issues
}
