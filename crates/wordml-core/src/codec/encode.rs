use super::simple::SimpleType;
use crate::error::Result;
use crate::xml::{Opaque, QName, RawElement, XmlSink};

/// Writes a schema type node as the element `name`.
pub trait ToXml {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()>;
}

impl<T: ToXml> ToXml for Box<T> {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        (**self).to_xml(name, out)
    }
}

impl ToXml for Opaque {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        self.write_as(name, out)
    }
}

impl XmlSink<'_> {
    pub fn value<T: SimpleType>(&mut self, name: QName, value: &T) {
        self.attr(name, &value.format_value());
    }

    pub fn value_opt<T: SimpleType>(&mut self, name: QName, value: Option<&T>) {
        if let Some(value) = value {
            self.value(name, value);
        }
    }

    /// Writes the attribute only when it differs from the schema default.
    pub fn value_unless_default<T: SimpleType + Default + PartialEq>(
        &mut self,
        name: QName,
        value: &T,
    ) {
        if *value != T::default() {
            self.value(name, value);
        }
    }

    /// Writes an optional child element.
    pub fn child<T: ToXml>(&mut self, name: QName, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => value.to_xml(name, self),
            None => Ok(()),
        }
    }

    pub fn extensions(&mut self, extensions: &[RawElement]) -> Result<()> {
        for element in extensions {
            element.write(self)?;
        }
        Ok(())
    }
}
