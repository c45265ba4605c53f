//! Immutable element tree and its pretty-printing serializer.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::domain::AppError;

/// A markup element with attributes and child elements; no text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Serialize as an indented document with an XML declaration.
    pub fn to_pretty_string(&self) -> Result<String, AppError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
            .map_err(serialize_error)?;
        write_element(&mut writer, self)?;

        let mut output = String::from_utf8(writer.into_inner()).map_err(serialize_error)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
impl XmlElement {
    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Value of attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), AppError> {
    let start = BytesStart::new(element.name.as_str()).with_attributes(
        element.attributes.iter().map(|(key, value)| (key.as_str(), value.as_str())),
    );

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(serialize_error);
    }

    writer.write_event(Event::Start(start)).map_err(serialize_error)?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(serialize_error)
}

fn serialize_error(err: impl std::fmt::Display) -> AppError {
    AppError::InternalError(format!("Failed to serialize NuGet.config: {}", err))
}
