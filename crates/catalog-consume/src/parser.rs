//! Consumer-side document parser.
//!
//! Deliberately independent of the validator's parser: a single streaming
//! pass that records *every* occurrence of each record field in document
//! order. Field binding happens afterwards through [`last_matching_child`],
//! the opposite of the validator's first-occurrence lookup. Identical bytes
//! can therefore produce a different effective record on this side of the
//! boundary, and neither side can detect the discrepancy.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use catalog_model::{CONTAINER_TAG, RECORD_TAG};

use crate::error::{ConsumeError, Result};

/// Every field occurrence of one record, keyed by field name, values in
/// document order.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub occurrences: BTreeMap<String, Vec<String>>,
}

impl RawRecord {
    fn push(&mut self, name: String, text: String) {
        self.occurrences.entry(name).or_default().push(text);
    }
}

/// Last-occurrence binding policy.
///
/// When a field name occurs more than once inside one record, the last
/// occurrence wins. This is a named policy, not a library accident.
pub fn last_matching_child<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    record
        .occurrences
        .get(name)
        .and_then(|values| values.last())
        .map(String::as_str)
}

/// Parse forwarded container bytes into raw records, container order.
pub fn parse_container(input: &str) -> Result<Vec<RawRecord>> {
    let mut reader = Reader::from_str(input);
    let mut records: Vec<RawRecord> = Vec::new();
    let mut root: Option<String> = None;
    let mut root_closed = false;
    let mut in_record = false;
    let mut field: Option<(String, String)> = None;
    let mut extra_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if root.is_none() {
                    open_root(name, &mut root, &mut in_record, &mut records)?;
                } else if root_closed {
                    return Err(ConsumeError::malformed("multiple root elements"));
                } else if field.is_some() || extra_depth > 0 {
                    // Markup nested inside a field carries no record data.
                    extra_depth += 1;
                } else if !in_record {
                    if name != RECORD_TAG {
                        return Err(ConsumeError::unexpected_element(name));
                    }
                    in_record = true;
                    records.push(RawRecord::default());
                } else {
                    field = Some((name, String::new()));
                }
            }
            Ok(Event::Empty(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if root.is_none() {
                    open_root(name, &mut root, &mut in_record, &mut records)?;
                    in_record = false;
                    root_closed = true;
                } else if root_closed {
                    return Err(ConsumeError::malformed("multiple root elements"));
                } else if field.is_some() || extra_depth > 0 {
                    // Nested empty markup, ignored.
                } else if !in_record {
                    if name != RECORD_TAG {
                        return Err(ConsumeError::unexpected_element(name));
                    }
                    records.push(RawRecord::default());
                } else if let Some(record) = records.last_mut() {
                    record.push(name, String::new());
                }
            }
            Ok(Event::Text(text)) => {
                if extra_depth == 0
                    && let Some((_, buffer)) = field.as_mut()
                {
                    let decoded = text
                        .decode()
                        .map_err(|err| ConsumeError::malformed(err.to_string()))?;
                    buffer.push_str(&decoded);
                }
            }
            Ok(Event::GeneralRef(general_ref)) => {
                if extra_depth == 0
                    && let Some((_, buffer)) = field.as_mut()
                {
                    let name = String::from_utf8_lossy(&general_ref).into_owned();
                    let resolved = resolve_entity(&name).ok_or_else(|| {
                        ConsumeError::malformed(format!("unresolved entity reference: &{name};"))
                    })?;
                    buffer.push_str(&resolved);
                }
            }
            Ok(Event::End(_)) => {
                if extra_depth > 0 {
                    extra_depth -= 1;
                } else if let Some((name, text)) = field.take() {
                    if let Some(record) = records.last_mut() {
                        record.push(name, text);
                    }
                } else if in_record {
                    in_record = false;
                    if root.as_deref() == Some(RECORD_TAG) {
                        root_closed = true;
                    }
                } else {
                    root_closed = true;
                }
            }
            Ok(Event::Eof) => {
                if root.is_none() {
                    return Err(ConsumeError::malformed("no root element"));
                }
                if !root_closed {
                    return Err(ConsumeError::malformed("unexpected end of document"));
                }
                break;
            }
            // Declarations, comments, and processing instructions carry no
            // record data.
            Ok(_) => {}
            Err(err) => return Err(ConsumeError::malformed(err.to_string())),
        }
    }

    if root.as_deref() == Some(CONTAINER_TAG) && records.is_empty() {
        return Err(ConsumeError::EmptyContainer);
    }
    tracing::debug!(records = records.len(), "parsed forwarded payload");
    Ok(records)
}

fn open_root(
    name: String,
    root: &mut Option<String>,
    in_record: &mut bool,
    records: &mut Vec<RawRecord>,
) -> Result<()> {
    match name.as_str() {
        CONTAINER_TAG => {}
        // A bare record with no enclosing group is a one-element container.
        RECORD_TAG => {
            *in_record = true;
            records.push(RawRecord::default());
        }
        _ => return Err(ConsumeError::unexpected_root(name)),
    }
    *root = Some(name);
    Ok(())
}

/// Resolve predefined and numeric character references.
fn resolve_entity(name: &str) -> Option<String> {
    match name {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "apos" => Some("'".to_string()),
        "quot" => Some("\"".to_string()),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = if let Some(hex) = code.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                code.parse::<u32>().ok()?
            };
            char::from_u32(value).map(|ch| ch.to_string())
        }
    }
}
