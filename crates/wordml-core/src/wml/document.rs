use super::content::{BlockContent, BlockContentTag};
use super::paragraph::Paragraph;
use super::table::Table;
use crate::codec::{DecodeContext, Decoded, FromXml, ToXml};
use crate::error::{Result, WordmlError};
use crate::ohcs::ChildSequence;
use crate::settings::{DecodeSettings, EncodeSettings};
use crate::xml::namespaces::XMLNS;
use crate::xml::parser::{parse, parse_bytes};
use crate::xml::{
    Opaque, QName, RawElement, XAttribute, XmlDocument, XmlElement, XmlSink, W,
};
use std::io::Write;
use tracing::trace;

/// `CT_Document`: the root of the main document part.
///
/// Namespace declarations and other attributes found on the input root
/// (`mc:Ignorable` and the like) are kept and written back on the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// `(prefix, uri)` pairs declared on the root.
    pub namespaces: Vec<(String, String)>,
    pub attributes: Vec<XAttribute>,
    pub background: Option<Opaque>,
    pub body: Option<Body>,
    pub extensions: Vec<RawElement>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Some(Body::default()),
            ..Self::default()
        }
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::from_xml_with(xml, &DecodeSettings::default()).map(Decoded::into_value)
    }

    pub fn from_xml_with(xml: &str, settings: &DecodeSettings) -> Result<Decoded<Self>> {
        decode_root(&parse(xml)?, settings)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_root(&parse_bytes(bytes)?, &DecodeSettings::default()).map(Decoded::into_value)
    }

    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&EncodeSettings::default())
    }

    pub fn to_xml_with(&self, settings: &EncodeSettings) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, settings)?;
        String::from_utf8(buffer).map_err(|e| WordmlError::XmlWrite(e.to_string()))
    }

    /// Writes the document as a complete part, with the XML declaration
    /// when `settings` ask for one.
    pub fn write_to(&self, writer: &mut dyn Write, settings: &EncodeSettings) -> Result<()> {
        trace!(
            blocks = self.body.as_ref().map_or(0, |body| body.content.len()),
            namespaces = self.namespaces.len(),
            "encoding document"
        );
        let mut out = XmlSink::new(writer, settings).with_root_declarations();
        for (prefix, uri) in &self.namespaces {
            out.add_root_namespace(prefix, uri);
        }
        if settings.xml_declaration {
            out.write_declaration()?;
        }
        ToXml::to_xml(self, W::document(), &mut out)
    }

    pub fn body_mut(&mut self) -> &mut Body {
        self.body.get_or_insert_with(Body::default)
    }

    /// Text of every top-level paragraph, one line each.
    pub fn text(&self) -> String {
        self.body
            .iter()
            .flat_map(|body| body.content.paragraphs())
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn decode_root(doc: &XmlDocument, settings: &DecodeSettings) -> Result<Decoded<Document>> {
    let root = XmlElement::root(doc).ok_or_else(|| WordmlError::XmlParse {
        message: "document has no root element".to_string(),
        location: "input".to_string(),
    })?;
    if !root.is(W::document()) {
        return Err(WordmlError::UnexpectedRoot {
            expected: W::document().to_xname().to_string(),
            found: root.name().to_string(),
        });
    }

    let mut ctx = DecodeContext::new(settings.clone());
    let value: Document = ctx.decode(root)?;
    let issues = ctx.into_issues();
    trace!(
        blocks = value.body.as_ref().map_or(0, |body| body.content.len()),
        issues = issues.len(),
        "decoded document"
    );
    Ok(Decoded { value, issues })
}

impl FromXml for Document {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut document = Self::default();
        for attr in el.attributes() {
            match attr.name.namespace.as_deref() {
                Some(XMLNS::NS) => document
                    .namespaces
                    .push((attr.name.local_name.clone(), attr.value.clone())),
                // default namespace declaration
                None if attr.name.local_name == "xmlns" => {}
                _ => document.attributes.push(attr.clone()),
            }
        }
        for child in el.children() {
            if child.is(W::background()) {
                document.background = ctx.child(child)?;
            } else if child.is(W::body()) {
                document.body = ctx.child(child)?;
            } else {
                ctx.extension(&mut document.extensions, child);
            }
        }
        Ok(document)
    }
}

impl ToXml for Document {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        for attr in &self.attributes {
            out.xattr(attr);
        }
        out.child(W::background(), self.background.as_ref())?;
        out.child(W::body(), self.body.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_Body`: block content followed by the final section properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub content: ChildSequence<BlockContent>,
    pub sect_pr: Option<Opaque>,
}

impl FromXml for Body {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut body = Self::default();
        for child in el.children() {
            if child.is(W::sectPr()) {
                body.sect_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut body.content, child)?;
            }
        }
        Ok(body)
    }
}

impl ToXml for Body {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.content.write(out)?;
        out.child(W::sectPr(), self.sect_pr.as_ref())?;
        out.close()
    }
}

impl ChildSequence<BlockContent> {
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.iter_of(BlockContentTag::Paragraph)
            .filter_map(|item| match item {
                BlockContent::Paragraph(p) => Some(p),
                _ => None,
            })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.iter_of(BlockContentTag::Table).filter_map(|item| match item {
            BlockContent::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn paragraph(&self, n: usize) -> Option<&Paragraph> {
        match self.nth_of(BlockContentTag::Paragraph, n)? {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn paragraph_mut(&mut self, n: usize) -> Option<&mut Paragraph> {
        match self.nth_of_mut(BlockContentTag::Paragraph, n)? {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        match self.append_new(BlockContentTag::Paragraph) {
            BlockContent::Paragraph(p) => p,
            _ => unreachable!("append_new(Paragraph) yields a Paragraph"),
        }
    }

    pub fn add_table(&mut self) -> &mut Table {
        match self.append_new(BlockContentTag::Table) {
            BlockContent::Table(table) => table,
            _ => unreachable!("append_new(Table) yields a Table"),
        }
    }

    /// Inserts `paragraph` before the `n`th paragraph, or at the end when
    /// there are not that many.
    pub fn insert_paragraph(&mut self, n: usize, paragraph: Paragraph) -> &mut Paragraph {
        match self.insert_item_before_nth(n, BlockContent::Paragraph(paragraph)) {
            BlockContent::Paragraph(p) => p,
            _ => unreachable!("inserted a Paragraph"),
        }
    }

    /// Replaces the `n`th paragraph, returning the old one.
    pub fn set_paragraph(&mut self, n: usize, paragraph: Paragraph) -> Result<Paragraph> {
        match self.replace_nth(BlockContentTag::Paragraph, n, BlockContent::Paragraph(paragraph))? {
            BlockContent::Paragraph(old) => Ok(old),
            _ => unreachable!("replace_nth(Paragraph) returns a Paragraph"),
        }
    }

    pub fn remove_paragraph(&mut self, n: usize) -> Option<Paragraph> {
        match self.remove_nth(BlockContentTag::Paragraph, n)? {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}
