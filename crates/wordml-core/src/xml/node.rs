use super::arena::XmlDocument;
use super::xname::{QName, XAttribute, XName};
use indextree::NodeId;

#[derive(Clone, Debug)]
pub enum XmlNodeData {
    Element {
        name: XName,
        attributes: Vec<XAttribute>,
    },
    Text(String),
    Comment(String),
    ProcessingInstruction { target: String, data: String },
}

impl XmlNodeData {
    pub fn element(name: XName) -> Self {
        Self::Element {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn element_with_attrs(name: XName, attributes: Vec<XAttribute>) -> Self {
        Self::Element { name, attributes }
    }

    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    pub fn name(&self) -> Option<&XName> {
        match self {
            Self::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attributes(&self) -> Option<&[XAttribute]> {
        match self {
            Self::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Borrowed view of one element in an [`XmlDocument`].
///
/// This is the node shape decoders consume: an expanded name, the ordered
/// attribute list and the ordered children.
#[derive(Clone, Copy)]
pub struct XmlElement<'a> {
    doc: &'a XmlDocument,
    id: NodeId,
    name: &'a XName,
    attributes: &'a [XAttribute],
}

impl<'a> XmlElement<'a> {
    /// Returns `None` when `id` is not an element node.
    pub fn new(doc: &'a XmlDocument, id: NodeId) -> Option<Self> {
        match doc.get(id)? {
            XmlNodeData::Element { name, attributes } => Some(Self {
                doc,
                id,
                name,
                attributes,
            }),
            _ => None,
        }
    }

    pub fn root(doc: &'a XmlDocument) -> Option<Self> {
        Self::new(doc, doc.root()?)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a XmlDocument {
        self.doc
    }

    pub fn name(&self) -> &'a XName {
        self.name
    }

    pub fn is(&self, name: QName) -> bool {
        name.matches(self.name)
    }

    pub fn attributes(&self) -> &'a [XAttribute] {
        self.attributes
    }

    pub fn attribute(&self, name: QName) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|attr| name.matches(&attr.name))
            .map(|attr| attr.value.as_str())
    }

    /// Child elements in document order; text and other nodes are skipped.
    pub fn children(&self) -> impl Iterator<Item = XmlElement<'a>> + 'a {
        let doc = self.doc;
        doc.children(self.id)
            .filter_map(move |child| XmlElement::new(doc, child))
    }

    /// All child nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &'a XmlNodeData)> + 'a {
        let doc = self.doc;
        doc.children(self.id)
            .filter_map(move |child| doc.get(child).map(|data| (child, data)))
    }

    /// Concatenated text of the direct children. CDATA sections arrive
    /// here as ordinary text.
    pub fn text(&self) -> String {
        self.nodes()
            .filter_map(|(_, data)| data.text_content())
            .collect()
    }
}

impl std::fmt::Debug for XmlElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlElement")
            .field("name", self.name)
            .field("attributes", &self.attributes)
            .finish()
    }
}
