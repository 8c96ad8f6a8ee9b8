pub mod fields;
pub mod outcome;
pub mod record;
pub mod report;

pub use fields::{
    CONTAINER_TAG, DATE_FORMAT, FIELD_AUTHOR, FIELD_PRICE, FIELD_PUBLISH_DATE, FIELD_TITLE,
    RECORD_FIELDS, RECORD_TAG,
};
pub use outcome::{ConsumeBatch, RecordOutcome};
pub use record::Book;
pub use report::ValidationReport;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn report_counts() {
        let mut report = ValidationReport::new();
        report.push(1, "missing element: title".to_string());
        report.push(1, "author must contain only letters and spaces".to_string());
        report.push(3, "price is not a decimal number".to_string());
        assert!(!report.is_clean());
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.record_errors(1).len(), 2);
        assert!(report.record_errors(2).is_empty());
    }

    #[test]
    fn book_serializes() {
        let book = Book {
            title: "Book Title".to_string(),
            author: "Author Name".to_string(),
            price: 19.99,
            publish_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
        };
        let json = serde_json::to_string(&book).expect("serialize book");
        let round: Book = serde_json::from_str(&json).expect("deserialize book");
        assert_eq!(round, book);
        assert_eq!(
            book.summary(),
            "Book Title by Author Name, 19.99, published 2023-01-01"
        );
    }

    #[test]
    fn batch_counts() {
        let book = Book {
            title: "T".to_string(),
            author: "A".to_string(),
            price: 1.0,
            publish_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
        };
        let batch = ConsumeBatch {
            summaries: vec![book.summary()],
            outcomes: vec![
                RecordOutcome::Converted(book),
                RecordOutcome::Skipped {
                    reason: "price is not a decimal number: abc".to_string(),
                },
            ],
        };
        assert_eq!(batch.converted_count(), 1);
        assert_eq!(batch.skipped_count(), 1);
        assert_eq!(batch.books().count(), 1);
    }
}
