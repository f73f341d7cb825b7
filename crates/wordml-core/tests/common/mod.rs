//! XML comparison and ordering checks shared by the integration tests.
//!
//! Output is compared after canonicalisation: namespace prefixes are
//! replaced by their URIs, attributes are sorted and whitespace-only text
//! between elements is ignored.

#![allow(dead_code)]

use roxmltree::{Document, Node};

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const M_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// Canonical text form of a complete XML document.
pub fn canonical(xml: &str) -> String {
    let doc = Document::parse(xml).unwrap_or_else(|e| panic!("not well-formed: {}\n{}", e, xml));
    let mut out = String::new();
    write_canonical(doc.root_element(), 0, &mut out);
    out
}

/// Canonical text form of a fragment that may use the `w`, `r` and `m`
/// prefixes without declaring them.
pub fn canonical_fragment(xml: &str) -> String {
    let wrapped = wrap_fragment(xml);
    let doc =
        Document::parse(&wrapped).unwrap_or_else(|e| panic!("not well-formed: {}\n{}", e, xml));
    let first = doc
        .root_element()
        .first_element_child()
        .unwrap_or_else(|| panic!("fragment has no element: {}", xml));
    let mut out = String::new();
    write_canonical(first, 0, &mut out);
    out
}

fn wrap_fragment(xml: &str) -> String {
    format!(
        r#"<fragment xmlns:w="{}" xmlns:r="{}" xmlns:m="{}">{}</fragment>"#,
        W_NS, R_NS, M_NS, xml
    )
}

fn expanded(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(ns) => format!("{{{}}}{}", ns, local),
        None => local.to_string(),
    }
}

fn write_canonical(node: Node<'_, '_>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let tag = node.tag_name();
    let mut attributes: Vec<String> = node
        .attributes()
        .map(|a| format!("{}={:?}", expanded(a.namespace(), a.name()), a.value()))
        .collect();
    attributes.sort();

    out.push_str(&indent);
    out.push('<');
    out.push_str(&expanded(tag.namespace(), tag.name()));
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute);
    }
    out.push_str(">\n");

    for child in node.children() {
        if child.is_element() {
            write_canonical(child, depth + 1, out);
        } else if let Some(text) = child.text().filter(|t| !t.trim().is_empty()) {
            out.push_str(&format!("{}  {:?}\n", indent, text));
        }
    }
}

/// Names of the element children of the fragment's top element, in order.
pub fn child_names(xml: &str) -> Vec<String> {
    let wrapped = wrap_fragment(xml);
    let doc = Document::parse(&wrapped).unwrap_or_else(|e| panic!("{}: {}", e, xml));
    let first = doc.root_element().first_element_child().expect("element");
    first
        .children()
        .filter(|c| c.is_element())
        .map(|c| c.tag_name().name().to_string())
        .collect()
}

/// Schema ordering rules the encoder must respect: property elements come
/// first in their parent, and a body's section properties come last.
pub fn ordering_violations(xml: &str) -> Vec<String> {
    let doc = Document::parse(xml).unwrap_or_else(|e| panic!("{}: {}", e, xml));
    let mut violations = Vec::new();
    check_ordering(doc.root_element(), &mut violations);
    violations
}

fn check_ordering(node: Node<'_, '_>, violations: &mut Vec<String>) {
    if node.tag_name().namespace() == Some(W_NS) {
        match node.tag_name().name() {
            "p" => check_first_child(node, "pPr", &[], violations),
            "r" => check_first_child(node, "rPr", &[], violations),
            "tc" => check_first_child(node, "tcPr", &[], violations),
            "tr" => check_first_child(node, "trPr", &["tblPrEx"], violations),
            "tbl" => check_precedes(node, "tblPr", &["tblGrid", "tr"], violations),
            "body" => check_last_child(node, "sectPr", violations),
            _ => {}
        }
    }
    for child in node.children().filter(|c| c.is_element()) {
        check_ordering(child, violations);
    }
}

fn is_w(node: &Node<'_, '_>, local: &str) -> bool {
    node.tag_name().namespace() == Some(W_NS) && node.tag_name().name() == local
}

fn check_first_child(
    parent: Node<'_, '_>,
    props: &str,
    allowed_before: &[&str],
    violations: &mut Vec<String>,
) {
    let children: Vec<_> = parent.children().filter(|c| c.is_element()).collect();
    if let Some(pos) = children.iter().position(|c| is_w(c, props)) {
        let misplaced = children[..pos]
            .iter()
            .any(|c| !allowed_before.iter().any(|name| is_w(c, name)));
        if misplaced {
            violations.push(format!(
                "<w:{}> must be the first child of <w:{}>, found at position {}",
                props,
                parent.tag_name().name(),
                pos + 1
            ));
        }
    }
}

fn check_precedes(
    parent: Node<'_, '_>,
    first: &str,
    followers: &[&str],
    violations: &mut Vec<String>,
) {
    let children: Vec<_> = parent.children().filter(|c| c.is_element()).collect();
    let Some(pos) = children.iter().position(|c| is_w(c, first)) else {
        return;
    };
    if children[..pos]
        .iter()
        .any(|c| followers.iter().any(|name| is_w(c, name)))
    {
        violations.push(format!(
            "<w:{}> must precede {:?} in <w:{}>",
            first,
            followers,
            parent.tag_name().name()
        ));
    }
}

fn check_last_child(parent: Node<'_, '_>, last: &str, violations: &mut Vec<String>) {
    let children: Vec<_> = parent.children().filter(|c| c.is_element()).collect();
    if let Some(pos) = children.iter().position(|c| is_w(c, last)) {
        if pos + 1 != children.len() {
            violations.push(format!(
                "<w:{}> must be the last child of <w:{}>",
                last,
                parent.tag_name().name()
            ));
        }
    }
}
