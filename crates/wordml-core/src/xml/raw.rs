use super::namespaces::XMLNS;
use super::node::{XmlElement, XmlNodeData};
use super::writer::XmlSink;
use super::xname::{QName, XAttribute, XName};
use crate::error::Result;

/// Attributes and content of an element kept verbatim.
///
/// Used for regions the typed model does not interpret (math, section
/// properties, backgrounds) and, wrapped in [`RawElement`], for elements
/// whose name is not known at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Opaque {
    pub attributes: Vec<XAttribute>,
    pub children: Vec<RawNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawNode {
    Element(RawElement),
    Text(String),
    Comment(String),
    ProcessingInstruction { target: String, data: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawElement {
    pub name: XName,
    pub content: Opaque,
}

impl Opaque {
    pub fn capture(el: XmlElement<'_>) -> Self {
        let attributes = el
            .attributes()
            .iter()
            .filter(|attr| !is_namespace_declaration(attr))
            .cloned()
            .collect();

        let mut children = Vec::new();
        for (id, data) in el.nodes() {
            let node = match data {
                XmlNodeData::Element { .. } => match XmlElement::new(el.document(), id) {
                    Some(child) => RawNode::Element(RawElement::capture(child)),
                    None => continue,
                },
                XmlNodeData::Text(text) => RawNode::Text(text.clone()),
                XmlNodeData::Comment(text) => RawNode::Comment(text.clone()),
                XmlNodeData::ProcessingInstruction { target, data } => {
                    RawNode::ProcessingInstruction {
                        target: target.clone(),
                        data: data.clone(),
                    }
                }
            };
            children.push(node);
        }

        Self {
            attributes,
            children,
        }
    }

    pub fn attribute(&self, name: QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| name.matches(&attr.name))
            .map(|attr| attr.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// Writes the attributes and content into the element the sink has open.
    pub fn write_content(&self, out: &mut XmlSink<'_>) -> Result<()> {
        for attr in &self.attributes {
            out.xattr(attr);
        }
        for child in &self.children {
            child.write(out)?;
        }
        Ok(())
    }

    pub fn write_as(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_content(out)?;
        out.close()
    }
}

impl RawNode {
    pub fn write(&self, out: &mut XmlSink<'_>) -> Result<()> {
        match self {
            RawNode::Element(element) => element.write(out),
            RawNode::Text(text) => out.text(text),
            RawNode::Comment(text) => out.comment(text),
            RawNode::ProcessingInstruction { target, data } => {
                out.processing_instruction(target, data)
            }
        }
    }
}

impl RawElement {
    pub fn new(name: XName) -> Self {
        Self {
            name,
            content: Opaque::default(),
        }
    }

    pub fn capture(el: XmlElement<'_>) -> Self {
        Self {
            name: el.name().clone(),
            content: Opaque::capture(el),
        }
    }

    pub fn write(&self, out: &mut XmlSink<'_>) -> Result<()> {
        out.open_xname(&self.name)?;
        self.content.write_content(out)?;
        out.close()
    }
}

fn is_namespace_declaration(attr: &XAttribute) -> bool {
    attr.name.namespace.as_deref() == Some(XMLNS::NS)
        || (attr.name.namespace.is_none() && attr.name.local_name == "xmlns")
}
