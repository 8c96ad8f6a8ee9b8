//! Typed conversion of parsed records.
//!
//! The payload is assumed pre-validated upstream, so no format or semantic
//! rules are re-checked here. Conversion failures skip the record with a
//! reason; sibling records continue.

use chrono::NaiveDate;

use catalog_model::{
    Book, DATE_FORMAT, FIELD_AUTHOR, FIELD_PRICE, FIELD_PUBLISH_DATE, FIELD_TITLE, RecordOutcome,
};

use crate::parser::{RawRecord, last_matching_child};

/// Convert one parsed record into a typed value, or the reason it is skipped.
pub fn convert_record(record: &RawRecord) -> RecordOutcome {
    let Some(title) = last_matching_child(record, FIELD_TITLE) else {
        return missing(FIELD_TITLE);
    };
    let Some(author) = last_matching_child(record, FIELD_AUTHOR) else {
        return missing(FIELD_AUTHOR);
    };
    let Some(price_text) = last_matching_child(record, FIELD_PRICE) else {
        return missing(FIELD_PRICE);
    };
    let Some(date_text) = last_matching_child(record, FIELD_PUBLISH_DATE) else {
        return missing(FIELD_PUBLISH_DATE);
    };

    let Ok(price) = price_text.trim().parse::<f64>() else {
        return RecordOutcome::Skipped {
            reason: format!("price is not a decimal number: {price_text:?}"),
        };
    };
    let Ok(publish_date) = NaiveDate::parse_from_str(date_text, DATE_FORMAT) else {
        return RecordOutcome::Skipped {
            reason: format!("publish_date is not a valid calendar date: {date_text:?}"),
        };
    };

    RecordOutcome::Converted(Book {
        title: title.to_string(),
        author: author.to_string(),
        price,
        publish_date,
    })
}

fn missing(field: &str) -> RecordOutcome {
    RecordOutcome::Skipped {
        reason: format!("missing element: {field}"),
    }
}
