use super::content::{ParagraphContent, ParagraphContentTag, RunTrackContent};
use super::run::Run;
use crate::codec::{DecodeContext, FromXml, HexBytes, ToXml};
use crate::error::Result;
use crate::ohcs::ChildSequence;
use crate::xml::{Opaque, QName, XmlElement, XmlSink, R, W};

/// `CT_P`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    pub rsid_r_pr: Option<HexBytes>,
    pub rsid_r: Option<HexBytes>,
    pub rsid_del: Option<HexBytes>,
    pub rsid_p: Option<HexBytes>,
    pub rsid_r_default: Option<HexBytes>,
    pub p_pr: Option<Opaque>,
    pub content: ChildSequence<ParagraphContent>,
}

impl Paragraph {
    pub fn with_text(text: &str) -> Self {
        let mut p = Self::default();
        p.content.add_run().content.add_text(text);
        p
    }

    /// Text of the paragraph as it would read with revisions shown: runs,
    /// hyperlinks, content controls and inserted or moved-to regions.
    pub fn text(&self) -> String {
        let mut text = String::new();
        paragraph_text(&self.content, &mut text);
        text
    }
}

fn paragraph_text(content: &ChildSequence<ParagraphContent>, text: &mut String) {
    for item in content.items() {
        match item {
            ParagraphContent::Run(run) => text.push_str(&run.text()),
            ParagraphContent::Hyperlink(link) => paragraph_text(&link.content, text),
            ParagraphContent::CustomXml(custom) => paragraph_text(&custom.content, text),
            ParagraphContent::Sdt(sdt) => {
                if let Some(inner) = &sdt.sdt_content {
                    paragraph_text(&inner.content, text);
                }
            }
            ParagraphContent::Ins(change) | ParagraphContent::MoveTo(change) => {
                for item in change.content.items() {
                    if let RunTrackContent::Run(run) = item {
                        text.push_str(&run.text());
                    }
                }
            }
            _ => {}
        }
    }
}

impl FromXml for Paragraph {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut p = Self {
            rsid_r_pr: ctx.attr_value(el, W::rsidRPr())?,
            rsid_r: ctx.attr_value(el, W::rsidR())?,
            rsid_del: ctx.attr_value(el, W::rsidDel())?,
            rsid_p: ctx.attr_value(el, W::rsidP())?,
            rsid_r_default: ctx.attr_value(el, W::rsidRDefault())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::pPr()) {
                p.p_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut p.content, child)?;
            }
        }
        Ok(p)
    }
}

impl ToXml for Paragraph {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::rsidRPr(), self.rsid_r_pr.as_ref());
        out.value_opt(W::rsidR(), self.rsid_r.as_ref());
        out.value_opt(W::rsidDel(), self.rsid_del.as_ref());
        out.value_opt(W::rsidP(), self.rsid_p.as_ref());
        out.value_opt(W::rsidRDefault(), self.rsid_r_default.as_ref());
        out.child(W::pPr(), self.p_pr.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_Hyperlink`. `id` is the relationship id of an external target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hyperlink {
    pub tgt_frame: Option<String>,
    pub tooltip: Option<String>,
    pub doc_location: Option<String>,
    pub history: Option<bool>,
    pub anchor: Option<String>,
    pub id: Option<String>,
    pub content: ChildSequence<ParagraphContent>,
}

impl FromXml for Hyperlink {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut link = Self {
            tgt_frame: ctx.attr_value(el, W::tgtFrame())?,
            tooltip: ctx.attr_value(el, W::tooltip())?,
            doc_location: ctx.attr_value(el, W::docLocation())?,
            history: ctx.attr_value(el, W::history())?,
            anchor: ctx.attr_value(el, W::anchor())?,
            id: ctx.attr_value(el, R::id())?,
            ..Self::default()
        };
        for child in el.children() {
            ctx.sequence_child(&mut link.content, child)?;
        }
        Ok(link)
    }
}

impl ToXml for Hyperlink {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::tgtFrame(), self.tgt_frame.as_ref());
        out.value_opt(W::tooltip(), self.tooltip.as_ref());
        out.value_opt(W::docLocation(), self.doc_location.as_ref());
        out.value_opt(W::history(), self.history.as_ref());
        out.value_opt(W::anchor(), self.anchor.as_ref());
        out.value_opt(R::id(), self.id.as_ref());
        self.content.write(out)?;
        out.close()
    }
}

impl ChildSequence<ParagraphContent> {
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.iter_of(ParagraphContentTag::Run).filter_map(|item| match item {
            ParagraphContent::Run(run) => Some(run),
            _ => None,
        })
    }

    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.items_mut().filter_map(|item| match item {
            ParagraphContent::Run(run) => Some(run),
            _ => None,
        })
    }

    pub fn add_run(&mut self) -> &mut Run {
        match self.append_new(ParagraphContentTag::Run) {
            ParagraphContent::Run(run) => run,
            _ => unreachable!("append_new(Run) yields a Run"),
        }
    }

    pub fn hyperlinks(&self) -> impl Iterator<Item = &Hyperlink> {
        self.iter_of(ParagraphContentTag::Hyperlink)
            .filter_map(|item| match item {
                ParagraphContent::Hyperlink(link) => Some(link),
                _ => None,
            })
    }
}
