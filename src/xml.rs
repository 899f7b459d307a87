//! A minimal XML element tree and its pretty-printed serialization.
//!
//! Session files are small, fixed-shape documents, so rather than exposing a
//! general purpose DOM, this module provides an owned [`Element`] tree where
//! each node exclusively owns its attributes and children. Attributes are kept
//! in insertion order so that serialization is reproducible byte-for-byte.

use std::borrow::Cow;
use std::io;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::events::attributes::Attribute;
use quick_xml::name::QName;

/// The content of the XML declaration that opens every document.
const DECLARATION: &str = "xml version=\"1.0\" ";

/// The length of the declaration's name (`xml`).
const DECLARATION_NAME_LEN: usize = 3;

/// The character used for indentation.
const INDENT_CHAR: u8 = b' ';

/// The number of indentation characters per nesting level.
const INDENT_SIZE: usize = 4;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to serializing an [`Element`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error while writing the document.
    Io(io::Error),

    /// The serialized document was not valid UTF-8.
    Utf8(std::string::FromUtf8Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Utf8(err) => write!(f, "utf-8 error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Elements
////////////////////////////////////////////////////////////////////////////////////////

/// An XML element with ordered attributes and child elements.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Element {
    /// The tag name.
    name: String,

    /// The attributes in emission order.
    attributes: Vec<(String, String)>,

    /// The child elements in emission order.
    children: Vec<Element>,
}

impl Element {
    /// Creates a new [`Element`] with no attributes and no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::xml::Element;
    ///
    /// let element = Element::new("Resources");
    /// assert_eq!(element.name(), "Resources");
    /// assert!(element.attributes().is_empty());
    /// assert!(element.children().is_empty());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Gets the tag name of the [`Element`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the attributes of the [`Element`] in emission order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Looks up the value of an attribute by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::xml::Element;
    ///
    /// let element = Element::new("Panel")
    ///     .with_attribute("name", "DataPanel")
    ///     .with_attribute("height", "200");
    ///
    /// assert_eq!(element.attribute("height"), Some("200"));
    /// assert_eq!(element.attribute("width"), None);
    /// ```
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Gets the child elements of the [`Element`].
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Sets an attribute on the [`Element`].
    ///
    /// A new key is appended after the existing attributes. Setting a key that
    /// already exists replaces its value without changing its position.
    pub fn push_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Sets an attribute and returns the [`Element`].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(key, value);
        self
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a child element and returns the [`Element`].
    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    /// Serializes the [`Element`] as the root of a pretty-printed document.
    ///
    /// The document starts with an XML declaration, nests with four spaces
    /// per level, writes childless elements as self-closing tags, contains no
    /// blank lines, and has no trailing newline.
    ///
    /// Blank lines are removed from the serialized text, so attribute values
    /// never contain raw line breaks: `\n`, `\r`, and `\t` are written as
    /// character references and read back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::xml::Element;
    ///
    /// let root = Element::new("Session")
    ///     .with_attribute("version", "8")
    ///     .with_child(Element::new("Resources"));
    ///
    /// assert_eq!(
    ///     root.to_pretty_string()?,
    ///     "<?xml version=\"1.0\" ?>\n<Session version=\"8\">\n    <Resources/>\n</Session>"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), INDENT_CHAR, INDENT_SIZE);

        writer
            .write_event(Event::Decl(BytesDecl::from_start(BytesStart::from_content(
                DECLARATION,
                DECLARATION_NAME_LEN,
            ))))
            .map_err(Error::Io)?;
        write_element(&mut writer, self).map_err(Error::Io)?;

        let text = String::from_utf8(writer.into_inner()).map_err(Error::Utf8)?;
        Ok(strip_blank_lines(&text))
    }
}

/// Recursively writes an element and its children.
fn write_element<W: io::Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(element.name.as_str());

    for (key, value) in &element.attributes {
        start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Owned(escape_attribute_value(value).into_bytes()),
        });
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))
}

/// Escapes an attribute value, writing line breaks and tabs as character
/// references.
fn escape_attribute_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in escape(value).chars() {
        match c {
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Removes every line that is empty or contains only whitespace.
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
