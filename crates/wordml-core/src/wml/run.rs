use super::content::{RunContent, RunContentTag};
use super::shared::Empty;
use super::simple_types::{BrClear, BrType, XmlSpace};
use crate::codec::{DecodeContext, FromXml, HexBytes, ToXml};
use crate::error::Result;
use crate::ohcs::ChildSequence;
use crate::util::needs_space_preserve;
use crate::xml::{Opaque, QName, XmlElement, XmlSink, W, XML};

/// `CT_R`: a run of content sharing one set of run properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    pub rsid_r_pr: Option<HexBytes>,
    pub rsid_del: Option<HexBytes>,
    pub rsid_r: Option<HexBytes>,
    pub r_pr: Option<Opaque>,
    pub content: ChildSequence<RunContent>,
}

impl Run {
    pub fn with_text(text: &str) -> Self {
        let mut run = Self::default();
        run.content.add_text(text);
        run
    }

    pub fn text(&self) -> String {
        self.content.text()
    }
}

impl FromXml for Run {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut run = Self {
            rsid_r_pr: ctx.attr_value(el, W::rsidRPr())?,
            rsid_del: ctx.attr_value(el, W::rsidDel())?,
            rsid_r: ctx.attr_value(el, W::rsidR())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::rPr()) {
                run.r_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut run.content, child)?;
            }
        }
        Ok(run)
    }
}

impl ToXml for Run {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::rsidRPr(), self.rsid_r_pr.as_ref());
        out.value_opt(W::rsidDel(), self.rsid_del.as_ref());
        out.value_opt(W::rsidR(), self.rsid_r.as_ref());
        out.child(W::rPr(), self.r_pr.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_Text`: literal run text, also used for deleted and field
/// instruction text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub space: Option<XmlSpace>,
}

impl Text {
    /// Text with `xml:space="preserve"` set when the value would otherwise
    /// lose whitespace.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let space = needs_space_preserve(&value).then_some(XmlSpace::Preserve);
        Self { value, space }
    }
}

impl FromXml for Text {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            value: el.text(),
            space: ctx.attr_value(el, XML::space())?,
        })
    }
}

impl ToXml for Text {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(XML::space(), self.space.as_ref());
        if !self.value.is_empty() {
            out.text(&self.value)?;
        }
        out.close()
    }
}

/// `CT_Br`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Break {
    pub r#type: Option<BrType>,
    pub clear: Option<BrClear>,
}

impl FromXml for Break {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            r#type: ctx.attr_value(el, W::r#type())?,
            clear: ctx.attr_value(el, W::clear())?,
        })
    }
}

impl ToXml for Break {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::r#type(), self.r#type.as_ref());
        out.value_opt(W::clear(), self.clear.as_ref());
        out.close()
    }
}

impl ChildSequence<RunContent> {
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.iter_of(RunContentTag::Text).filter_map(|item| match item {
            RunContent::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn add_text(&mut self, value: &str) -> &mut Text {
        match self.append_new(RunContentTag::Text) {
            RunContent::Text(text) => {
                *text = Text::new(value);
                text
            }
            _ => unreachable!("append_new(Text) yields a Text"),
        }
    }

    pub fn add_break(&mut self, r#type: Option<BrType>) -> &mut Break {
        match self.append_new(RunContentTag::Break) {
            RunContent::Break(br) => {
                br.r#type = r#type;
                br
            }
            _ => unreachable!("append_new(Break) yields a Break"),
        }
    }

    pub fn add_tab(&mut self) {
        self.push(RunContent::Tab(Empty));
    }

    /// Visible text of the run: `w:t` content, with tabs as `\t` and
    /// breaks and carriage returns as `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for item in self.items() {
            match item {
                RunContent::Text(t) => text.push_str(&t.value),
                RunContent::Tab(_) => text.push('\t'),
                RunContent::Break(_) | RunContent::Cr(_) => text.push('\n'),
                RunContent::NoBreakHyphen(_) => text.push('\u{2011}'),
                _ => {}
            }
        }
        text
    }
}
