//! Wire vocabulary for the serialized record format.
//!
//! Both the validator and the consumer parse the same informal XML grouping:
//! a `<books>` root holding `<book>` records, or a single root-level
//! `<book>` accepted as a one-element container.

/// Root grouping element.
pub const CONTAINER_TAG: &str = "books";

/// Record element.
pub const RECORD_TAG: &str = "book";

/// Title field element.
pub const FIELD_TITLE: &str = "title";

/// Author field element.
pub const FIELD_AUTHOR: &str = "author";

/// Price field element.
pub const FIELD_PRICE: &str = "price";

/// Publish date field element.
pub const FIELD_PUBLISH_DATE: &str = "publish_date";

/// All record fields, in canonical serialization order.
pub const RECORD_FIELDS: &[&str] = &[FIELD_TITLE, FIELD_AUTHOR, FIELD_PRICE, FIELD_PUBLISH_DATE];

/// Fixed calendar layout for `publish_date` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
