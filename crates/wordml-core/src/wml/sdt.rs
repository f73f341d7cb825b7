//! Structured document tags (content controls).

use super::content::{
    BlockContent, CellContent, ParagraphContent, RowContent, SdtPrContent, SdtPrContentTag,
};
use super::shared::{OnOff, StringValue};
use super::simple_types::LockType;
use crate::codec::{DecodeContext, FromXml, ToXml};
use crate::error::Result;
use crate::ohcs::{ChildSequence, ChoiceItem};
use crate::xml::{Opaque, QName, RawElement, XmlElement, XmlSink, W};
use chrono::{DateTime, FixedOffset};

/// `CT_SdtBlock`, `CT_SdtRun`, `CT_SdtRow` and `CT_SdtCell`, which differ
/// only in what their content holds.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredDocumentTag<I: ChoiceItem> {
    pub sdt_pr: Option<SdtPr>,
    pub sdt_end_pr: Option<SdtEndPr>,
    pub sdt_content: Option<SdtContent<I>>,
    pub extensions: Vec<RawElement>,
}

pub type SdtBlock = StructuredDocumentTag<BlockContent>;
pub type SdtRun = StructuredDocumentTag<ParagraphContent>;
pub type SdtRow = StructuredDocumentTag<RowContent>;
pub type SdtCell = StructuredDocumentTag<CellContent>;

impl<I: ChoiceItem> Default for StructuredDocumentTag<I> {
    fn default() -> Self {
        Self {
            sdt_pr: None,
            sdt_end_pr: None,
            sdt_content: None,
            extensions: Vec::new(),
        }
    }
}

impl<I: ChoiceItem> StructuredDocumentTag<I> {
    /// Content sequence, created empty on first use.
    pub fn content_mut(&mut self) -> &mut ChildSequence<I> {
        &mut self.sdt_content.get_or_insert_with(SdtContent::default).content
    }

    pub fn properties_mut(&mut self) -> &mut SdtPr {
        self.sdt_pr.get_or_insert_with(SdtPr::default)
    }
}

impl<I: ChoiceItem> FromXml for StructuredDocumentTag<I> {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut sdt = Self::default();
        for child in el.children() {
            if child.is(W::sdtPr()) {
                sdt.sdt_pr = ctx.child(child)?;
            } else if child.is(W::sdtEndPr()) {
                sdt.sdt_end_pr = ctx.child(child)?;
            } else if child.is(W::sdtContent()) {
                sdt.sdt_content = ctx.child(child)?;
            } else {
                ctx.extension(&mut sdt.extensions, child);
            }
        }
        Ok(sdt)
    }
}

impl<I: ChoiceItem> ToXml for StructuredDocumentTag<I> {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.child(W::sdtPr(), self.sdt_pr.as_ref())?;
        out.child(W::sdtEndPr(), self.sdt_end_pr.as_ref())?;
        out.child(W::sdtContent(), self.sdt_content.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SdtContent<I: ChoiceItem> {
    pub content: ChildSequence<I>,
}

impl<I: ChoiceItem> Default for SdtContent<I> {
    fn default() -> Self {
        Self {
            content: ChildSequence::new(),
        }
    }
}

impl<I: ChoiceItem> FromXml for SdtContent<I> {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self::default();
        for child in el.children() {
            ctx.sequence_child(&mut value.content, child)?;
        }
        Ok(value)
    }
}

impl<I: ChoiceItem> ToXml for SdtContent<I> {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_SdtPr`. The control type is one of the items, e.g.
/// [`SdtPrContent::DropDownList`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SdtPr {
    pub content: ChildSequence<SdtPrContent>,
}

impl SdtPr {
    pub fn alias(&self) -> Option<&str> {
        match self.content.nth_of(SdtPrContentTag::Alias, 0)? {
            SdtPrContent::Alias(alias) => Some(&alias.val),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self.content.nth_of(SdtPrContentTag::Tag, 0)? {
            SdtPrContent::Tag(tag) => Some(&tag.val),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self.content.nth_of(SdtPrContentTag::Id, 0)? {
            SdtPrContent::Id(id) => Some(id.val),
            _ => None,
        }
    }

    /// Sets `w:alias`, replacing an existing one in place.
    pub fn set_alias(&mut self, alias: &str) {
        let value = SdtPrContent::Alias(StringValue::new(alias));
        if self.content.replace_nth(SdtPrContentTag::Alias, 0, value.clone()).is_err() {
            self.content.push(value);
        }
    }

    pub fn set_tag(&mut self, tag: &str) {
        let value = SdtPrContent::Tag(StringValue::new(tag));
        if self.content.replace_nth(SdtPrContentTag::Tag, 0, value.clone()).is_err() {
            self.content.push(value);
        }
    }
}

impl FromXml for SdtPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            ctx.sequence_child(&mut pr.content, child)?;
        }
        Ok(pr)
    }
}

impl ToXml for SdtPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_SdtEndPr`: run properties of the closing character.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SdtEndPr {
    pub r_pr: Option<Opaque>,
    pub extensions: Vec<RawElement>,
}

impl FromXml for SdtEndPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::rPr()) {
                pr.r_pr = ctx.child(child)?;
            } else {
                ctx.extension(&mut pr.extensions, child);
            }
        }
        Ok(pr)
    }
}

impl ToXml for SdtEndPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.child(W::rPr(), self.r_pr.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_SdtListItem`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdtListItem {
    pub display_text: Option<String>,
    pub value: Option<String>,
}

impl SdtListItem {
    pub fn new(display_text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_text: Some(display_text.into()),
            value: Some(value.into()),
        }
    }
}

impl FromXml for SdtListItem {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            display_text: ctx.attr_value(el, W::displayText())?,
            value: ctx.attr_value(el, W::value())?,
        })
    }
}

impl ToXml for SdtListItem {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::displayText(), self.display_text.as_ref());
        out.value_opt(W::value(), self.value.as_ref());
        out.close()
    }
}

/// Body shared by combo boxes and drop-down lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdtList {
    pub last_value: Option<String>,
    pub list_items: Vec<SdtListItem>,
    pub extensions: Vec<RawElement>,
}

impl FromXml for SdtList {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut list = Self {
            last_value: ctx.attr_value(el, W::lastValue())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::listItem()) {
                if let Some(item) = ctx.child(child)? {
                    list.list_items.push(item);
                }
            } else {
                ctx.extension(&mut list.extensions, child);
            }
        }
        Ok(list)
    }
}

impl ToXml for SdtList {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::lastValue(), self.last_value.as_ref());
        for item in &self.list_items {
            item.to_xml(W::listItem(), out)?;
        }
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_SdtComboBox`: a list that also accepts free text.
pub type SdtComboBox = SdtList;

/// `CT_SdtDropDownList`.
pub type SdtDropDownList = SdtList;

/// `CT_SdtDate`. `full_date` is kept as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdtDate {
    pub full_date: Option<String>,
    pub date_format: Option<StringValue>,
    pub lid: Option<StringValue>,
    pub store_mapped_data_as: Option<StringValue>,
    pub calendar: Option<StringValue>,
    pub extensions: Vec<RawElement>,
}

impl SdtDate {
    pub fn full_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.full_date
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
    }
}

impl FromXml for SdtDate {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut date = Self {
            full_date: ctx.attr_value(el, W::fullDate())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::dateFormat()) {
                date.date_format = ctx.child(child)?;
            } else if child.is(W::lid()) {
                date.lid = ctx.child(child)?;
            } else if child.is(W::storeMappedDataAs()) {
                date.store_mapped_data_as = ctx.child(child)?;
            } else if child.is(W::calendar()) {
                date.calendar = ctx.child(child)?;
            } else {
                ctx.extension(&mut date.extensions, child);
            }
        }
        Ok(date)
    }
}

impl ToXml for SdtDate {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::fullDate(), self.full_date.as_ref());
        out.child(W::dateFormat(), self.date_format.as_ref())?;
        out.child(W::lid(), self.lid.as_ref())?;
        out.child(W::storeMappedDataAs(), self.store_mapped_data_as.as_ref())?;
        out.child(W::calendar(), self.calendar.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_SdtDocPart`, used by both `docPartObj` and `docPartList`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdtDocPart {
    pub doc_part_gallery: Option<StringValue>,
    pub doc_part_category: Option<StringValue>,
    pub doc_part_unique: Option<OnOff>,
    pub extensions: Vec<RawElement>,
}

impl FromXml for SdtDocPart {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut part = Self::default();
        for child in el.children() {
            if child.is(W::docPartGallery()) {
                part.doc_part_gallery = ctx.child(child)?;
            } else if child.is(W::docPartCategory()) {
                part.doc_part_category = ctx.child(child)?;
            } else if child.is(W::docPartUnique()) {
                part.doc_part_unique = ctx.child(child)?;
            } else {
                ctx.extension(&mut part.extensions, child);
            }
        }
        Ok(part)
    }
}

impl ToXml for SdtDocPart {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.child(W::docPartGallery(), self.doc_part_gallery.as_ref())?;
        out.child(W::docPartCategory(), self.doc_part_category.as_ref())?;
        out.child(W::docPartUnique(), self.doc_part_unique.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_SdtText`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SdtText {
    pub multi_line: Option<bool>,
}

impl FromXml for SdtText {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            multi_line: ctx.attr_value(el, W::multiLine())?,
        })
    }
}

impl ToXml for SdtText {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::multiLine(), self.multi_line.as_ref());
        out.close()
    }
}

/// `CT_Lock`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lock {
    pub val: Option<LockType>,
}

impl FromXml for Lock {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_value(el, W::val())?,
        })
    }
}

impl ToXml for Lock {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::val(), self.val.as_ref());
        out.close()
    }
}

/// `CT_Placeholder`: the document part shown while the control is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholder {
    pub doc_part: Option<StringValue>,
    pub extensions: Vec<RawElement>,
}

impl FromXml for Placeholder {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut placeholder = Self::default();
        for child in el.children() {
            if child.is(W::docPart()) {
                placeholder.doc_part = ctx.child(child)?;
            } else {
                ctx.extension(&mut placeholder.extensions, child);
            }
        }
        Ok(placeholder)
    }
}

impl ToXml for Placeholder {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.child(W::docPart(), self.doc_part.as_ref())?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_DataBinding`: the custom XML node a control is mapped to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataBinding {
    pub prefix_mappings: Option<String>,
    pub xpath: String,
    pub store_item_id: String,
}

impl FromXml for DataBinding {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            prefix_mappings: ctx.attr_value(el, W::prefixMappings())?,
            xpath: ctx.attr_or_default(el, W::xpath())?,
            store_item_id: ctx.attr_or_default(el, W::storeItemID())?,
        })
    }
}

impl ToXml for DataBinding {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::prefixMappings(), self.prefix_mappings.as_ref());
        out.value(W::xpath(), &self.xpath);
        out.value(W::storeItemID(), &self.store_item_id);
        out.close()
    }
}
