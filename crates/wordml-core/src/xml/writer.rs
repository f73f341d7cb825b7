use super::namespaces::{conventional_prefix, ROOT_NAMESPACES, XML, XMLNS};
use super::xname::{QName, XAttribute, XName};
use crate::error::{Result, WordmlError};
use crate::settings::{EmptyElementStyle, EncodeSettings};
use crate::util::make_valid_xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Output text sink for the encoders.
///
/// Start tags are held back until the first child or text arrives, so an
/// element that ends up with no content can be closed according to
/// [`EmptyElementStyle`]. Namespace prefixes come from the root declarations;
/// any other namespace gets a declaration on the element that uses it.
pub struct XmlSink<'w> {
    writer: Writer<&'w mut dyn Write>,
    empty_elements: EmptyElementStyle,
    root_namespaces: Vec<(String, String)>,
    pending: Option<BytesStart<'static>>,
    open: Vec<OpenElement>,
    declare_root: bool,
}

struct OpenElement {
    qualified: String,
    legacy_self_closing: bool,
    declarations: Vec<(String, String)>,
}

impl<'w> XmlSink<'w> {
    pub fn new(inner: &'w mut dyn Write, settings: &EncodeSettings) -> Self {
        Self {
            writer: Writer::new(inner),
            empty_elements: settings.empty_elements,
            root_namespaces: ROOT_NAMESPACES
                .iter()
                .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
                .collect(),
            pending: None,
            open: Vec::new(),
            declare_root: false,
        }
    }

    /// Makes the next top-level element carry the root namespace
    /// declarations.
    pub fn with_root_declarations(mut self) -> Self {
        self.declare_root = true;
        self
    }

    /// Adds root declarations beyond the conventional `w`, `r` and `m`.
    ///
    /// A namespace that already has a root prefix keeps it.
    pub fn add_root_namespace(&mut self, prefix: &str, uri: &str) {
        if prefix.is_empty() || uri == XML::NS {
            return;
        }
        let taken = self
            .root_namespaces
            .iter()
            .any(|(p, u)| p == prefix || u == uri);
        if !taken {
            self.root_namespaces.push((prefix.to_string(), uri.to_string()));
        }
    }

    pub fn write_declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(write_error)
    }

    pub fn open(&mut self, name: QName) -> Result<()> {
        self.open_element(Some(name.namespace), name.local_name, false)
    }

    /// Opens an element that [`EmptyElementStyle::Legacy`] writes self-closed.
    pub fn open_self_closing(&mut self, name: QName) -> Result<()> {
        self.open_element(Some(name.namespace), name.local_name, true)
    }

    pub fn open_xname(&mut self, name: &XName) -> Result<()> {
        self.open_element(name.namespace.as_deref(), &name.local_name, false)
    }

    fn open_element(
        &mut self,
        namespace: Option<&str>,
        local_name: &str,
        legacy_self_closing: bool,
    ) -> Result<()> {
        self.flush_pending()?;

        let mut declarations = Vec::new();
        let qualified = self.qualify(namespace, local_name, &mut declarations);
        let mut start = BytesStart::new(qualified.clone());
        if self.declare_root && self.open.is_empty() {
            self.declare_root = false;
            for (prefix, uri) in &self.root_namespaces {
                start.push_attribute((format!("xmlns:{}", prefix).as_str(), uri.as_str()));
            }
        }
        for (prefix, uri) in &declarations {
            start.push_attribute((format!("xmlns:{}", prefix).as_str(), uri.as_str()));
        }

        self.pending = Some(start);
        self.open.push(OpenElement {
            qualified,
            legacy_self_closing,
            declarations,
        });
        Ok(())
    }

    pub fn attr(&mut self, name: QName, value: &str) {
        self.push_attribute(Some(name.namespace), name.local_name, value);
    }

    pub fn attr_opt<S: AsRef<str>>(&mut self, name: QName, value: Option<S>) {
        if let Some(value) = value {
            self.attr(name, value.as_ref());
        }
    }

    /// Writes an attribute captured from an input tree.
    pub fn xattr(&mut self, attr: &XAttribute) {
        if attr.name.namespace.as_deref() == Some(XMLNS::NS)
            || (attr.name.namespace.is_none() && attr.name.local_name == "xmlns")
        {
            return;
        }
        self.push_attribute(
            attr.name.namespace.as_deref(),
            &attr.name.local_name,
            &attr.value,
        );
    }

    fn push_attribute(&mut self, namespace: Option<&str>, local_name: &str, value: &str) {
        let (Some(mut pending), Some(mut element)) = (self.pending.take(), self.open.pop()) else {
            debug_assert!(false, "attribute {} written outside a start tag", local_name);
            return;
        };
        let known = element.declarations.len();
        let qualified = self.qualify(namespace, local_name, &mut element.declarations);
        for (prefix, uri) in &element.declarations[known..] {
            pending.push_attribute((format!("xmlns:{}", prefix).as_str(), uri.as_str()));
        }
        pending.push_attribute((qualified.as_str(), &*make_valid_xml(value)));
        self.pending = Some(pending);
        self.open.push(element);
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        let text = make_valid_xml(text);
        self.writer
            .write_event(Event::Text(BytesText::new(&text)))
            .map_err(write_error)
    }

    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.writer
            .write_event(Event::Comment(BytesText::new(text)))
            .map_err(write_error)
    }

    pub fn processing_instruction(&mut self, target: &str, data: &str) -> Result<()> {
        self.flush_pending()?;
        let content = if data.is_empty() {
            target.to_string()
        } else {
            format!("{} {}", target, data)
        };
        self.writer
            .write_event(Event::PI(BytesPI::new(content)))
            .map_err(write_error)
    }

    pub fn close(&mut self) -> Result<()> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| WordmlError::XmlWrite("close without an open element".to_string()))?;

        match self.pending.take() {
            Some(pending) => {
                let self_closing = match self.empty_elements {
                    EmptyElementStyle::SelfClosing => true,
                    EmptyElementStyle::ExplicitClose => false,
                    EmptyElementStyle::Legacy => element.legacy_self_closing,
                };
                if self_closing {
                    self.writer
                        .write_event(Event::Empty(pending))
                        .map_err(write_error)
                } else {
                    self.writer
                        .write_event(Event::Start(pending))
                        .map_err(write_error)?;
                    self.write_end(&element.qualified)
                }
            }
            None => self.write_end(&element.qualified),
        }
    }

    /// Number of elements opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn write_end(&mut self, qualified: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(qualified.to_string())))
            .map_err(write_error)
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            self.writer
                .write_event(Event::Start(pending))
                .map_err(write_error)?;
        }
        Ok(())
    }

    fn qualify(
        &self,
        namespace: Option<&str>,
        local_name: &str,
        declarations: &mut Vec<(String, String)>,
    ) -> String {
        let namespace = match namespace {
            Some(ns) if !ns.is_empty() => ns,
            _ => return local_name.to_string(),
        };
        if namespace == XML::NS {
            return format!("xml:{}", local_name);
        }
        if let Some((prefix, _)) = self.root_namespaces.iter().find(|(_, uri)| uri == namespace) {
            return format!("{}:{}", prefix, local_name);
        }
        if let Some((prefix, _)) = declarations
            .iter()
            .chain(self.open.iter().rev().flat_map(|e| e.declarations.iter()))
            .find(|(_, uri)| uri == namespace)
        {
            return format!("{}:{}", prefix, local_name);
        }

        let prefix = match conventional_prefix(namespace) {
            Some(prefix) if !self.prefix_in_use(prefix, declarations) => prefix.to_string(),
            _ => {
                let mut n = 0;
                loop {
                    let candidate = format!("ns{}", n);
                    if !self.prefix_in_use(&candidate, declarations) {
                        break candidate;
                    }
                    n += 1;
                }
            }
        };
        declarations.push((prefix.clone(), namespace.to_string()));
        format!("{}:{}", prefix, local_name)
    }

    fn prefix_in_use(&self, prefix: &str, declarations: &[(String, String)]) -> bool {
        self.root_namespaces.iter().any(|(p, _)| p == prefix)
            || declarations.iter().any(|(p, _)| p == prefix)
            || self
                .open
                .iter()
                .any(|e| e.declarations.iter().any(|(p, _)| p == prefix))
    }
}

fn write_error(e: impl std::fmt::Display) -> WordmlError {
    WordmlError::XmlWrite(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::namespaces::W;

    fn render(settings: &EncodeSettings, f: impl FnOnce(&mut XmlSink<'_>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        {
            let mut sink = XmlSink::new(&mut buffer, settings);
            f(&mut sink).unwrap();
            assert_eq!(sink.depth(), 0);
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn root_declarations_go_on_the_first_element_only() {
        let mut buffer = Vec::new();
        {
            let mut sink =
                XmlSink::new(&mut buffer, &EncodeSettings::default()).with_root_declarations();
            sink.open(W::p()).unwrap();
            sink.open(W::r()).unwrap();
            sink.close().unwrap();
            sink.close().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            concat!(
                r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
                r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
                r#"xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">"#,
                r#"<w:r/></w:p>"#
            )
        );
    }

    #[test]
    fn legacy_style_honours_per_element_flag() {
        let settings = EncodeSettings {
            empty_elements: EmptyElementStyle::Legacy,
            ..EncodeSettings::default()
        };
        let xml = render(&settings, |out| {
            out.open(W::tblGrid())?;
            out.open_self_closing(W::gridCol())?;
            out.attr(W::w(), "100");
            out.close()?;
            out.open(W::tblStyle())?;
            out.close()?;
            out.close()
        });
        assert_eq!(
            xml,
            r#"<w:tblGrid><w:gridCol w:w="100"/><w:tblStyle></w:tblStyle></w:tblGrid>"#
        );
    }

    #[test]
    fn explicit_close_style() {
        let settings = EncodeSettings {
            empty_elements: EmptyElementStyle::ExplicitClose,
            ..EncodeSettings::default()
        };
        let xml = render(&settings, |out| {
            out.open_self_closing(W::vMerge())?;
            out.close()
        });
        assert_eq!(xml, "<w:vMerge></w:vMerge>");
    }

    #[test]
    fn unknown_namespaces_are_declared_locally() {
        let xml = render(&EncodeSettings::default(), |out| {
            out.open_xname(&XName::new("urn:custom", "thing"))?;
            out.xattr(&XAttribute::new(XName::new("urn:custom", "flag"), "1"));
            out.open_xname(&XName::new(
                "http://schemas.openxmlformats.org/drawingml/2006/main",
                "graphic",
            ))?;
            out.close()?;
            out.close()
        });
        assert_eq!(
            xml,
            concat!(
                r#"<ns0:thing xmlns:ns0="urn:custom" ns0:flag="1">"#,
                r#"<a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"/>"#,
                r#"</ns0:thing>"#
            )
        );
    }

    #[test]
    fn text_and_attributes_are_escaped_and_sanitised() {
        let xml = render(&EncodeSettings::default(), |out| {
            out.open(W::t())?;
            out.attr(XML::space(), "preserve");
            out.text("a < b & \u{0001}")?;
            out.close()
        });
        assert_eq!(xml, "<w:t xml:space=\"preserve\">a &lt; b &amp; \u{FFFD}</w:t>");
    }

    #[test]
    fn close_without_open_is_an_error() {
        let mut buffer = Vec::new();
        let mut sink = XmlSink::new(&mut buffer, &EncodeSettings::default());
        assert!(matches!(sink.close(), Err(WordmlError::XmlWrite(_))));
    }
}
