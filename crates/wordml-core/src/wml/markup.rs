//! Run-level markup: range delimiters, proofing and permission marks, and
//! the revision wrappers around runs.

use super::content::RunTrackContent;
use super::shared::TrackChange;
use super::simple_types::{AnnotationVMerge, DisplacedByCustomXml, EdGrp, ProofErrType};
use crate::codec::{DecodeContext, FromXml, ToXml};
use crate::error::Result;
use crate::ohcs::ChildSequence;
use crate::xml::{QName, XmlElement, XmlSink, W};

/// `CT_MarkupRange`: end of a bookmark, move or comment range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkupRange {
    pub id: i64,
    pub displaced_by_custom_xml: Option<DisplacedByCustomXml>,
}

impl MarkupRange {
    fn read(el: XmlElement<'_>, ctx: &DecodeContext) -> Result<Self> {
        Ok(Self {
            id: ctx.attr_or_default(el, W::id())?,
            displaced_by_custom_xml: ctx.attr_value(el, W::displacedByCustomXml())?,
        })
    }

    fn write_attributes(&self, out: &mut XmlSink<'_>) {
        out.value(W::id(), &self.id);
        out.value_opt(W::displacedByCustomXml(), self.displaced_by_custom_xml.as_ref());
    }
}

impl FromXml for MarkupRange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Self::read(el, ctx)
    }
}

impl ToXml for MarkupRange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_attributes(out);
        out.close()
    }
}

/// `CT_Bookmark`: start of a bookmark, optionally limited to table columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub displaced_by_custom_xml: Option<DisplacedByCustomXml>,
    pub col_first: Option<i64>,
    pub col_last: Option<i64>,
}

impl Bookmark {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    fn read(el: XmlElement<'_>, ctx: &DecodeContext) -> Result<Self> {
        let range = MarkupRange::read(el, ctx)?;
        Ok(Self {
            id: range.id,
            name: ctx.attr_or_default(el, W::name("name"))?,
            displaced_by_custom_xml: range.displaced_by_custom_xml,
            col_first: ctx.attr_value(el, W::colFirst())?,
            col_last: ctx.attr_value(el, W::colLast())?,
        })
    }

    fn write_attributes(&self, out: &mut XmlSink<'_>) {
        out.value(W::id(), &self.id);
        out.value(W::name("name"), &self.name);
        out.value_opt(W::displacedByCustomXml(), self.displaced_by_custom_xml.as_ref());
        out.value_opt(W::colFirst(), self.col_first.as_ref());
        out.value_opt(W::colLast(), self.col_last.as_ref());
    }
}

impl FromXml for Bookmark {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Self::read(el, ctx)
    }
}

impl ToXml for Bookmark {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_attributes(out);
        out.close()
    }
}

/// `CT_MoveBookmark`: start of a move source or destination range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveBookmark {
    pub bookmark: Bookmark,
    pub author: String,
    pub date: Option<String>,
}

impl FromXml for MoveBookmark {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            bookmark: Bookmark::read(el, ctx)?,
            author: ctx.attr_or_default(el, W::author())?,
            date: ctx.attr_value(el, W::date())?,
        })
    }
}

impl ToXml for MoveBookmark {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.bookmark.write_attributes(out);
        out.value(W::author(), &self.author);
        out.value_opt(W::date(), self.date.as_ref());
        out.close()
    }
}

/// `CT_ProofErr`: start or end of a spelling or grammar error region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProofErr {
    pub r#type: ProofErrType,
}

impl FromXml for ProofErr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            r#type: ctx.attr_or_default(el, W::r#type())?,
        })
    }
}

impl ToXml for ProofErr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::r#type(), &self.r#type);
        out.close()
    }
}

/// `CT_Perm`: end of a range editable by a restricted set of users.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Perm {
    pub id: String,
    pub displaced_by_custom_xml: Option<DisplacedByCustomXml>,
}

impl Perm {
    fn read(el: XmlElement<'_>, ctx: &DecodeContext) -> Result<Self> {
        Ok(Self {
            id: ctx.attr_or_default(el, W::id())?,
            displaced_by_custom_xml: ctx.attr_value(el, W::displacedByCustomXml())?,
        })
    }

    fn write_attributes(&self, out: &mut XmlSink<'_>) {
        out.value(W::id(), &self.id);
        out.value_opt(W::displacedByCustomXml(), self.displaced_by_custom_xml.as_ref());
    }
}

impl FromXml for Perm {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Self::read(el, ctx)
    }
}

impl ToXml for Perm {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_attributes(out);
        out.close()
    }
}

/// `CT_PermStart`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermStart {
    pub perm: Perm,
    pub ed_grp: Option<EdGrp>,
    pub ed: Option<String>,
    pub col_first: Option<i64>,
    pub col_last: Option<i64>,
}

impl FromXml for PermStart {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            perm: Perm::read(el, ctx)?,
            ed_grp: ctx.attr_value(el, W::edGrp())?,
            ed: ctx.attr_value(el, W::ed())?,
            col_first: ctx.attr_value(el, W::colFirst())?,
            col_last: ctx.attr_value(el, W::colLast())?,
        })
    }
}

impl ToXml for PermStart {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.perm.write_attributes(out);
        out.value_opt(W::edGrp(), self.ed_grp.as_ref());
        out.value_opt(W::ed(), self.ed.as_ref());
        out.value_opt(W::colFirst(), self.col_first.as_ref());
        out.value_opt(W::colLast(), self.col_last.as_ref());
        out.close()
    }
}

/// `CT_RunTrackChange`: inserted, deleted or moved content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunTrackChange {
    pub change: TrackChange,
    pub content: ChildSequence<RunTrackContent>,
}

impl FromXml for RunTrackChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            change: TrackChange::read(el, ctx)?,
            content: ChildSequence::new(),
        };
        for child in el.children() {
            ctx.sequence_child(&mut value.content, child)?;
        }
        Ok(value)
    }
}

impl ToXml for RunTrackChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_CellMergeTrackChange`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellMergeTrackChange {
    pub change: TrackChange,
    pub v_merge: Option<AnnotationVMerge>,
    pub v_merge_orig: Option<AnnotationVMerge>,
}

impl FromXml for CellMergeTrackChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            change: TrackChange::read(el, ctx)?,
            v_merge: ctx.attr_value(el, W::vMerge())?,
            v_merge_orig: ctx.attr_value(el, W::vMergeOrig())?,
        })
    }
}

impl ToXml for CellMergeTrackChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        out.value_opt(W::vMerge(), self.v_merge.as_ref());
        out.value_opt(W::vMergeOrig(), self.v_merge_orig.as_ref());
        out.close()
    }
}
