use super::simple::SimpleType;
use crate::error::{Result, WordmlError};
use crate::ohcs::{ChildSequence, ChoiceItem, ChoiceTag};
use crate::settings::{DecodeSettings, DecodeStrictness, UnknownElementPolicy};
use crate::xml::namespaces::conventional_prefix;
use crate::xml::{Opaque, QName, RawElement, XmlElement, W};
use serde::Serialize;
use tracing::{debug, warn};

/// Builds a schema type node from an element of the input tree.
pub trait FromXml: Sized {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self>;
}

impl FromXml for Opaque {
    fn from_xml(el: XmlElement<'_>, _ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Opaque::capture(el))
    }
}

/// A child element that was skipped because it failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodeIssue {
    pub path: String,
    pub message: String,
}

/// Result of a decode together with the children lenient decoding skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub issues: Vec<DecodeIssue>,
}

impl<T> Decoded<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// State threaded through one decode: settings, the element path for error
/// attribution and the issues collected so far.
pub struct DecodeContext {
    settings: DecodeSettings,
    path: Vec<String>,
    issues: Vec<DecodeIssue>,
}

impl DecodeContext {
    pub fn new(settings: DecodeSettings) -> Self {
        Self {
            settings,
            path: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn settings(&self) -> &DecodeSettings {
        &self.settings
    }

    pub fn issues(&self) -> &[DecodeIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<DecodeIssue> {
        self.issues
    }

    /// Slash-separated path of the element being decoded, e.g.
    /// `/w:document/w:body/w:p`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Decodes `el` as a `T`, tracking it in the path.
    pub fn decode<T: FromXml>(&mut self, el: XmlElement<'_>) -> Result<T> {
        self.path.push(segment(el));
        let result = T::from_xml(el, self);
        self.path.pop();
        result
    }

    /// Decodes an optional child. Under lenient strictness a child that fails
    /// with a decode error is reported and yields `None`.
    pub fn child<T: FromXml>(&mut self, el: XmlElement<'_>) -> Result<Option<T>> {
        match self.decode(el) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.absorb(el, err)?;
                Ok(None)
            }
        }
    }

    /// Decodes `el` into `seq` when its name is in the sequence's catalog.
    /// Returns `false`, consuming nothing, for any other name.
    pub fn sequence_item<I: ChoiceItem>(
        &mut self,
        seq: &mut ChildSequence<I>,
        el: XmlElement<'_>,
    ) -> Result<bool> {
        let Some(tag) = I::Tag::lookup(el.name()) else {
            return Ok(false);
        };
        match I::decode(tag, el, self) {
            Ok(item) => seq.push(item),
            Err(err) => self.absorb(el, err)?,
        }
        Ok(true)
    }

    /// Decodes `el` into `seq`; an unrecognised element is kept as a foreign
    /// slot or dropped according to the unknown-element policy.
    pub fn sequence_child<I: ChoiceItem>(
        &mut self,
        seq: &mut ChildSequence<I>,
        el: XmlElement<'_>,
    ) -> Result<()> {
        if !self.sequence_item(seq, el)? {
            if let Some(raw) = self.unknown(el) {
                seq.push_foreign(raw);
            }
        }
        Ok(())
    }

    /// Records an unrecognised child of a type without a choice group.
    pub fn extension(&mut self, extensions: &mut Vec<RawElement>, el: XmlElement<'_>) {
        if let Some(raw) = self.unknown(el) {
            extensions.push(raw);
        }
    }

    /// Applies the unknown-element policy to `el`.
    pub fn unknown(&mut self, el: XmlElement<'_>) -> Option<RawElement> {
        match self.settings.unknown_elements {
            UnknownElementPolicy::Preserve => Some(RawElement::capture(el)),
            UnknownElementPolicy::Drop => {
                debug!(
                    element = %el.name(),
                    path = %self.path(),
                    "dropping unrecognised element"
                );
                None
            }
        }
    }

    fn absorb(&mut self, el: XmlElement<'_>, err: WordmlError) -> Result<()> {
        if self.settings.strictness == DecodeStrictness::Strict || !err.is_decode_error() {
            return Err(err);
        }
        let path = format!("{}/{}", self.path(), segment(el));
        warn!(path = %path, error = %err, "skipping child element that failed to decode");
        self.issues.push(DecodeIssue {
            path,
            message: err.to_string(),
        });
        Ok(())
    }

    /// Reads an attribute through its simple type. A missing attribute is
    /// `None`; a value outside the type's lexical space is an error.
    pub fn attr_value<T: SimpleType>(&self, el: XmlElement<'_>, name: QName) -> Result<Option<T>> {
        let Some(raw) = attribute(el, name) else {
            return Ok(None);
        };
        T::parse_value(raw).map(Some).ok_or_else(|| WordmlError::InvalidAttribute {
            element: self.element_path(el),
            attribute: name.local_name.to_string(),
            value: raw.to_string(),
            expected: T::EXPECTED,
        })
    }

    /// Like [`attr_value`](Self::attr_value), with a missing attribute
    /// replaced by the type's default.
    pub fn attr_or_default<T: SimpleType + Default>(
        &self,
        el: XmlElement<'_>,
        name: QName,
    ) -> Result<T> {
        Ok(self.attr_value(el, name)?.unwrap_or_default())
    }

    fn element_path(&self, el: XmlElement<'_>) -> String {
        // decode() has already pushed the element being read
        match self.path.last() {
            Some(last) if *last == segment(el) => self.path(),
            _ => format!("{}/{}", self.path(), segment(el)),
        }
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new(DecodeSettings::default())
    }
}

/// Attribute value as written. Main-namespace attributes fall back to the
/// unprefixed name.
pub fn attribute<'a>(el: XmlElement<'a>, name: QName) -> Option<&'a str> {
    el.attribute(name).or_else(|| {
        if name.namespace == W::NS {
            el.attribute(QName::new("", name.local_name))
        } else {
            None
        }
    })
}

fn segment(el: XmlElement<'_>) -> String {
    let name = el.name();
    match name.namespace.as_deref().and_then(conventional_prefix) {
        Some(prefix) => format!("{}:{}", prefix, name.local_name),
        None => name.local_name.clone(),
    }
}
