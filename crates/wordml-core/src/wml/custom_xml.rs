use super::content::{BlockContent, CellContent, ParagraphContent, RowContent};
use super::shared::StringValue;
use crate::codec::{DecodeContext, FromXml, ToXml};
use crate::error::Result;
use crate::ohcs::{ChildSequence, ChoiceItem};
use crate::xml::{QName, RawElement, XmlElement, XmlSink, W};

/// `CT_CustomXmlBlock`, `CT_CustomXmlRun`, `CT_CustomXmlRow` and
/// `CT_CustomXmlCell`: an element of a custom schema wrapped around
/// document content.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomXmlElement<I: ChoiceItem> {
    pub uri: Option<String>,
    pub element: String,
    pub custom_xml_pr: Option<CustomXmlPr>,
    pub content: ChildSequence<I>,
}

pub type CustomXmlBlock = CustomXmlElement<BlockContent>;
pub type CustomXmlRun = CustomXmlElement<ParagraphContent>;
pub type CustomXmlRow = CustomXmlElement<RowContent>;
pub type CustomXmlCell = CustomXmlElement<CellContent>;

impl<I: ChoiceItem> Default for CustomXmlElement<I> {
    fn default() -> Self {
        Self {
            uri: None,
            element: String::new(),
            custom_xml_pr: None,
            content: ChildSequence::new(),
        }
    }
}

impl<I: ChoiceItem> CustomXmlElement<I> {
    pub fn new(uri: Option<&str>, element: &str) -> Self {
        Self {
            uri: uri.map(str::to_string),
            element: element.to_string(),
            ..Self::default()
        }
    }
}

impl<I: ChoiceItem> FromXml for CustomXmlElement<I> {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            uri: ctx.attr_value(el, W::uri())?,
            element: ctx.attr_or_default(el, W::element())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::customXmlPr()) {
                value.custom_xml_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut value.content, child)?;
            }
        }
        Ok(value)
    }
}

impl<I: ChoiceItem> ToXml for CustomXmlElement<I> {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::uri(), self.uri.as_ref());
        out.value(W::element(), &self.element);
        out.child(W::customXmlPr(), self.custom_xml_pr.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_CustomXmlPr`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomXmlPr {
    pub placeholder: Option<StringValue>,
    pub attrs: Vec<CustomXmlAttr>,
    pub extensions: Vec<RawElement>,
}

impl FromXml for CustomXmlPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::placeholder()) {
                pr.placeholder = ctx.child(child)?;
            } else if child.is(W::attr()) {
                if let Some(attr) = ctx.child(child)? {
                    pr.attrs.push(attr);
                }
            } else {
                ctx.extension(&mut pr.extensions, child);
            }
        }
        Ok(pr)
    }
}

impl ToXml for CustomXmlPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.child(W::placeholder(), self.placeholder.as_ref())?;
        for attr in &self.attrs {
            attr.to_xml(W::attr(), out)?;
        }
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_Attr`: one attribute of the custom element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomXmlAttr {
    pub uri: Option<String>,
    pub name: String,
    pub val: String,
}

impl FromXml for CustomXmlAttr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            uri: ctx.attr_value(el, W::uri())?,
            name: ctx.attr_or_default(el, W::name("name"))?,
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for CustomXmlAttr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::uri(), self.uri.as_ref());
        out.value(W::name("name"), &self.name);
        out.value(W::val(), &self.val);
        out.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_fragment, to_fragment};
    use crate::wml::{ParagraphContentTag, RowContentTag};
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_run_wraps_paragraph_content() {
        let custom: CustomXmlRun = from_fragment(
            r#"<w:customXml w:uri="urn:invoice" w:element="total"><w:customXmlPr><w:attr w:name="currency" w:val="EUR"/></w:customXmlPr><w:r><w:t>12</w:t></w:r><w:proofErr w:type="spellEnd"/></w:customXml>"#,
        )
        .unwrap();
        assert_eq!(custom.uri.as_deref(), Some("urn:invoice"));
        assert_eq!(custom.element, "total");
        let pr = custom.custom_xml_pr.as_ref().unwrap();
        assert_eq!(pr.attrs[0].name, "currency");
        assert_eq!(pr.attrs[0].val, "EUR");
        assert_eq!(
            custom.content.tags().collect::<Vec<_>>(),
            vec![ParagraphContentTag::Run, ParagraphContentTag::ProofErr]
        );
    }

    #[test]
    fn custom_row_writes_pr_before_rows() {
        let mut custom = CustomXmlRow::new(None, "line");
        custom.custom_xml_pr = Some(CustomXmlPr {
            placeholder: Some(StringValue::new("[line]")),
            ..CustomXmlPr::default()
        });
        custom.content.add_row();
        let xml = to_fragment(&custom, W::customXml()).unwrap();
        assert!(xml.contains(r#" w:element="line">"#), "{}", xml);
        assert!(xml.ends_with(
            r#"><w:customXmlPr><w:placeholder w:val="[line]"/></w:customXmlPr><w:tr/></w:customXml>"#
        ), "{}", xml);
        assert_eq!(custom.content.tags().collect::<Vec<_>>(), vec![RowContentTag::Row]);
    }
}
