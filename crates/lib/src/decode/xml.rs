//! XML to tree mapping.
//!
//! Each element becomes an object whose keys are its attributes and child
//! element names. Repeated child names collapse into an array in document
//! order. An element with only text becomes a string, an element with nothing
//! at all becomes null, and text next to attributes or children is kept
//! under the `#text` key. All scalars stay strings.

use quick_xml::{Reader, events::Event};

use super::errors::DecodeError;
use crate::tree::{Array, Object, Value};

pub(crate) const TEXT_KEY: &str = "#text";

struct Element {
    name: String,
    fields: Object,
    text: String,
}

impl Element {
    fn open(name: String) -> Self {
        Self {
            name,
            fields: Object::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        let text = self.text.trim();
        match (self.fields.is_empty(), text.is_empty()) {
            (true, true) => Value::Null,
            (true, false) => Value::Text(text.to_string()),
            (false, true) => Value::Object(self.fields),
            (false, false) => {
                let mut fields = self.fields;
                fields.insert(TEXT_KEY, text);
                Value::Object(fields)
            }
        }
    }
}

/// Parses an XML document into an object keyed by its root element.
pub(crate) fn parse(input: &str) -> Result<Value, DecodeError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut document = Object::new();
    let mut open: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let mut element = Element::open(std::str::from_utf8(start.name().as_ref())?.to_string());
                read_attributes(&start, &mut element.fields)?;
                open.push(element);
            }
            Event::Empty(start) => {
                let mut element = Element::open(std::str::from_utf8(start.name().as_ref())?.to_string());
                read_attributes(&start, &mut element.fields)?;
                close(element, &mut open, &mut document);
            }
            Event::End(_) => {
                if let Some(element) = open.pop() {
                    close(element, &mut open, &mut document);
                }
            }
            Event::Text(text) => {
                if let Some(element) = open.last_mut() {
                    element.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(element) = open.last_mut() {
                    element.text.push_str(std::str::from_utf8(&data)?);
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(DecodeError::UnbalancedXml { name: element.name });
    }
    Ok(Value::Object(document))
}

fn read_attributes(
    start: &quick_xml::events::BytesStart<'_>,
    fields: &mut Object,
) -> Result<(), DecodeError> {
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        fields.insert(key, value);
    }
    Ok(())
}

/// Attaches a finished element to its parent, or to the document.
fn close(element: Element, open: &mut [Element], document: &mut Object) {
    let name = element.name.clone();
    let value = element.into_value();
    let target = match open.last_mut() {
        Some(parent) => &mut parent.fields,
        None => document,
    };
    insert_repeated(target, name, value);
}

/// Inserts `value` under `name`, collapsing repeats into an array.
fn insert_repeated(fields: &mut Object, name: String, value: Value) {
    match fields.get_mut(&name) {
        None => {
            fields.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::take(existing);
            *existing = Value::Array(Array::from(vec![first, value]));
        }
    }
}
