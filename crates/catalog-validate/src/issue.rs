//! Validation issue types.
//!
//! Each variant carries only its needed data; rendering to the human-readable
//! error strings of the report happens in one place.

/// A field-level failure recorded against one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// A required field element is absent from the record.
    MissingElement { field: &'static str },
    /// Title violates the bounded character-class rule.
    InvalidTitle { value: String },
    /// Author contains characters other than letters and spaces.
    InvalidAuthor { value: String },
    /// Price does not parse as a decimal number.
    InvalidPrice { value: String },
    /// Publish date is not a real calendar date in the fixed layout.
    InvalidDate { value: String },
}

impl Issue {
    /// Field the issue is recorded against.
    pub fn field(&self) -> &'static str {
        match self {
            Issue::MissingElement { field } => field,
            Issue::InvalidTitle { .. } => catalog_model::FIELD_TITLE,
            Issue::InvalidAuthor { .. } => catalog_model::FIELD_AUTHOR,
            Issue::InvalidPrice { .. } => catalog_model::FIELD_PRICE,
            Issue::InvalidDate { .. } => catalog_model::FIELD_PUBLISH_DATE,
        }
    }

    /// Human-readable error string for the report.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingElement { field } => format!("missing element: {field}"),
            Issue::InvalidTitle { value } => format!(
                "title must be 1-50 characters of letters, digits, or spaces, got {value:?}"
            ),
            Issue::InvalidAuthor { value } => {
                format!("author must contain only letters and spaces, got {value:?}")
            }
            Issue::InvalidPrice { value } => {
                format!("price is not a decimal number: {value:?}")
            }
            Issue::InvalidDate { value } => {
                format!("publish_date is not a valid YYYY-MM-DD calendar date: {value:?}")
            }
        }
    }
}
