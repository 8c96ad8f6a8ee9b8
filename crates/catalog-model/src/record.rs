use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully typed catalog record.
///
/// Constructed fresh by the consumer for each consumption pass; no instance
/// is shared across the trust boundary. Only serialized bytes cross it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub publish_date: NaiveDate,
}

impl Book {
    /// One-line summary in container order, emitted once per converted record.
    pub fn summary(&self) -> String {
        format!(
            "{} by {}, {:.2}, published {}",
            self.title, self.author, self.price, self.publish_date
        )
    }
}
