//! Validator-side document parser.
//!
//! Builds a small element tree from the serialized bytes. Field lookup goes
//! through [`first_matching_child`]: duplicated field names resolve to the
//! first occurrence and later duplicates are never examined. The downstream
//! consumer binds the opposite way, which is exactly the disagreement this
//! pipeline exists to demonstrate.

use quick_xml::Reader;
use quick_xml::events::Event;

use catalog_model::{CONTAINER_TAG, RECORD_TAG};

use crate::error::{Result, ValidateError};

/// One parsed element: name, child elements in document order, and the text
/// placed directly inside it.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    pub text: String,
}

/// First-occurrence lookup policy.
///
/// When a field name occurs more than once inside one record, only the first
/// occurrence is returned. This is a named policy, not a library accident.
pub fn first_matching_child<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element.children.iter().find(|child| child.name == name)
}

/// Parse serialized container bytes into record elements, container order.
///
/// A root-level record with no enclosing group is accepted as a one-element
/// container. Containers holding non-record children, and containers with no
/// records at all, are structural errors.
pub fn parse_container(input: &str) -> Result<Vec<Element>> {
    let root = parse_document(input)?;
    let records = records_from_root(root)?;
    tracing::debug!(records = records.len(), "parsed container");
    Ok(records)
}

fn records_from_root(root: Element) -> Result<Vec<Element>> {
    if root.name == RECORD_TAG {
        return Ok(vec![root]);
    }
    if root.name != CONTAINER_TAG {
        return Err(ValidateError::unexpected_root(root.name));
    }
    if let Some(stranger) = root.children.iter().find(|child| child.name != RECORD_TAG) {
        return Err(ValidateError::unexpected_element(stranger.name.clone()));
    }
    if root.children.is_empty() {
        return Err(ValidateError::EmptyContainer);
    }
    Ok(root.children)
}

/// Build the element tree with the quick-xml pull reader.
fn parse_document(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(ValidateError::malformed("multiple root elements"));
                }
                stack.push(Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                });
            }
            Ok(Event::Empty(start)) => {
                let element = Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                };
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let decoded = text
                    .decode()
                    .map_err(|err| ValidateError::malformed(err.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&decoded);
                }
            }
            Ok(Event::GeneralRef(general_ref)) => {
                let name = String::from_utf8_lossy(&general_ref).into_owned();
                let resolved = resolve_entity(&name).ok_or_else(|| {
                    ValidateError::malformed(format!("unresolved entity reference: &{name};"))
                })?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&resolved);
                }
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ValidateError::malformed("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, and processing instructions carry no
            // record data.
            Ok(_) => {}
            Err(err) => return Err(ValidateError::malformed(err.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(ValidateError::malformed("unexpected end of document"));
    }
    root.ok_or_else(|| ValidateError::malformed("no root element"))
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

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(ValidateError::malformed("multiple root elements"));
            }
            *root = Some(element);
        }
    }
    Ok(())
}
