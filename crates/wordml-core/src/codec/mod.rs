//! Decoding node trees into schema type nodes and encoding them back.

pub mod decode;
pub mod encode;
pub mod simple;

pub use decode::{attribute, DecodeContext, DecodeIssue, Decoded, FromXml};
pub use encode::ToXml;
pub use simple::{HexBytes, SimpleType, UnknownValue};

use crate::error::{Result, WordmlError};
use crate::settings::{DecodeSettings, EncodeSettings};
use crate::xml::parser::parse_fragment;
use crate::xml::{QName, XmlElement, XmlSink};

/// Decodes a fragment such as `<w:p>...</w:p>` with default settings.
///
/// The conventional `w`, `r` and `m` prefixes need no declaration.
pub fn from_fragment<T: FromXml>(xml: &str) -> Result<T> {
    from_fragment_with(xml, &DecodeSettings::default()).map(Decoded::into_value)
}

pub fn from_fragment_with<T: FromXml>(xml: &str, settings: &DecodeSettings) -> Result<Decoded<T>> {
    let doc = parse_fragment(xml)?;
    let root = XmlElement::root(&doc).ok_or_else(|| WordmlError::XmlParse {
        message: "fragment has no root element".to_string(),
        location: "input".to_string(),
    })?;

    let mut ctx = DecodeContext::new(settings.clone());
    let value = ctx.decode(root)?;
    Ok(Decoded {
        value,
        issues: ctx.into_issues(),
    })
}

/// Encodes `value` as the element `name`, declaring the `w`, `r` and `m`
/// namespaces on it. No XML declaration is written.
pub fn to_fragment<T: ToXml>(value: &T, name: QName) -> Result<String> {
    to_fragment_with(value, name, &EncodeSettings::default())
}

pub fn to_fragment_with<T: ToXml>(
    value: &T,
    name: QName,
    settings: &EncodeSettings,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut out = XmlSink::new(&mut buffer, settings).with_root_declarations();
        value.to_xml(name, &mut out)?;
    }
    String::from_utf8(buffer).map_err(|e| WordmlError::XmlWrite(e.to_string()))
}
