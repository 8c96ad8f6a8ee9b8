//! Canonical re-serialization of the validator's parsed view.
//!
//! The alternative to forwarding raw validated bytes: rebuild the container
//! from the fields the validator actually inspected. Repeated fields
//! collapse to the first occurrence, so the consumer can no longer bind
//! anything the validator did not see.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use catalog_model::{CONTAINER_TAG, RECORD_FIELDS, RECORD_TAG};
use catalog_validate::parser::{Element, first_matching_child, parse_container};

/// Re-serialize a container through the validator's first-occurrence view.
pub fn reconstruct(input: &str) -> Result<String> {
    let records = parse_container(input)?;
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(BytesStart::new(CONTAINER_TAG)))?;
    for record in &records {
        write_record(&mut writer, record)?;
    }
    writer.write_event(Event::End(BytesEnd::new(CONTAINER_TAG)))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_record<W: Write>(writer: &mut Writer<W>, record: &Element) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(RECORD_TAG)))?;
    // Canonical field order; fields the validator never saw are dropped.
    for field in RECORD_FIELDS {
        if let Some(child) = first_matching_child(record, field) {
            write_text_element(writer, field, &child.text)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(RECORD_TAG)))?;
    Ok(())
}

/// Write a simple text element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
