use super::arena::XmlDocument;
use super::namespaces::{ROOT_NAMESPACES, XML, XMLNS};
use super::node::XmlNodeData;
use super::xname::{XAttribute, XName};
use crate::error::{Result, WordmlError};
use indextree::NodeId;

/// Parses a complete part. The document element becomes the root.
pub fn parse(xml: &str) -> Result<XmlDocument> {
    let text = parse_text(xml)?;
    Ok(into_tree(text.root_element()))
}

pub fn parse_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    let xml = std::str::from_utf8(bytes).map_err(|e| WordmlError::XmlParse {
        message: e.to_string(),
        location: format!("byte {}", e.valid_up_to()),
    })?;
    parse(xml)
}

/// Parses a standalone element such as `<w:p>...</w:p>`.
///
/// The conventional `w`, `r` and `m` prefixes may be used without being
/// declared. The first element of the fragment becomes the root.
pub fn parse_fragment(xml: &str) -> Result<XmlDocument> {
    let declarations: String = ROOT_NAMESPACES
        .iter()
        .map(|(prefix, uri)| format!(" xmlns:{}=\"{}\"", prefix, uri))
        .collect();
    let wrapped = format!(
        "<fragment{}>{}</fragment>",
        declarations,
        strip_declaration(xml)
    );

    let text = parse_text(&wrapped)?;
    let first = text
        .root_element()
        .first_element_child()
        .ok_or_else(|| WordmlError::XmlParse {
            message: "fragment contains no element".to_string(),
            location: "input".to_string(),
        })?;
    Ok(into_tree(first))
}

fn strip_declaration(xml: &str) -> &str {
    let trimmed = xml.trim_start();
    match trimmed.strip_prefix("<?xml").and_then(|rest| rest.find("?>").map(|end| &rest[end + 2..])) {
        Some(rest) => rest,
        None => trimmed,
    }
}

fn parse_text(xml: &str) -> Result<roxmltree::Document<'_>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    roxmltree::Document::parse_with_options(xml, options).map_err(|e| WordmlError::XmlParse {
        message: e.to_string(),
        location: format!("line {}", e.pos().row),
    })
}

/// Copies `top` and everything below it into a fresh arena.
fn into_tree(top: roxmltree::Node<'_, '_>) -> XmlDocument {
    let mut doc = XmlDocument::new();
    let Some(data) = node_data(top) else {
        return doc;
    };
    let root = doc.add_root(data);
    let mut pending: Vec<(roxmltree::Node<'_, '_>, NodeId)> = vec![(top, root)];
    while let Some((node, id)) = pending.pop() {
        for child in node.children() {
            if let Some(data) = node_data(child) {
                let child_id = doc.add_child(id, data);
                if child.is_element() {
                    pending.push((child, child_id));
                }
            }
        }
    }
    doc
}

fn node_data(node: roxmltree::Node<'_, '_>) -> Option<XmlNodeData> {
    match node.node_type() {
        roxmltree::NodeType::Element => {
            let tag = node.tag_name();
            let mut attributes: Vec<XAttribute> = node
                .attributes()
                .map(|attr| {
                    XAttribute::new(
                        XName::new(attr.namespace().unwrap_or(""), attr.name()),
                        attr.value(),
                    )
                })
                .collect();
            attributes.extend(declared_namespaces(node));
            Some(XmlNodeData::Element {
                name: XName::new(tag.namespace().unwrap_or(""), tag.name()),
                attributes,
            })
        }
        // CDATA sections are reported as text
        roxmltree::NodeType::Text => node.text().map(|text| XmlNodeData::Text(text.to_string())),
        roxmltree::NodeType::Comment => {
            node.text().map(|text| XmlNodeData::Comment(text.to_string()))
        }
        roxmltree::NodeType::PI => node.pi().map(|pi| XmlNodeData::ProcessingInstruction {
            target: pi.target.to_string(),
            data: pi.value.unwrap_or_default().to_string(),
        }),
        roxmltree::NodeType::Root => None,
    }
}

/// Namespace declarations written on `node` itself, as `xmlns:*`
/// attributes. roxmltree reports every namespace in scope, so the ones
/// inherited unchanged from the parent are filtered out.
fn declared_namespaces(node: roxmltree::Node<'_, '_>) -> Vec<XAttribute> {
    let parent = node.parent_element();
    node.namespaces()
        .filter(|ns| ns.uri() != XML::NS)
        .filter(|ns| {
            !parent.is_some_and(|p| {
                p.namespaces()
                    .any(|inherited| inherited.name() == ns.name() && inherited.uri() == ns.uri())
            })
        })
        .map(|ns| match ns.name() {
            Some(prefix) => XAttribute::new(XName::new(XMLNS::NS, prefix), ns.uri()),
            None => XAttribute::new(XName::local("xmlns"), ns.uri()),
        })
        .collect()
}
