//! Attribute-only element types shared across the content models.

use crate::codec::{DecodeContext, FromXml, ToXml};
use crate::error::Result;
use crate::xml::{QName, XmlElement, XmlSink, W};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// `CT_Empty`: an element that carries nothing but its name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty;

impl FromXml for Empty {
    fn from_xml(_el: XmlElement<'_>, _ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Empty)
    }
}

impl ToXml for Empty {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.close()
    }
}

/// `CT_String`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringValue {
    pub val: String,
}

impl StringValue {
    pub fn new(val: impl Into<String>) -> Self {
        Self { val: val.into() }
    }
}

impl FromXml for StringValue {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for StringValue {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::val(), &self.val);
        out.close()
    }
}

/// `CT_DecimalNumber`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalNumber {
    pub val: i64,
}

impl FromXml for DecimalNumber {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for DecimalNumber {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::val(), &self.val);
        out.close()
    }
}

/// `CT_UnsignedDecimalNumber`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnsignedDecimalNumber {
    pub val: u64,
}

impl FromXml for UnsignedDecimalNumber {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for UnsignedDecimalNumber {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::val(), &self.val);
        out.close()
    }
}

/// `CT_OnOff`. A present element with no `w:val` is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnOff {
    pub val: bool,
}

impl Default for OnOff {
    fn default() -> Self {
        Self { val: true }
    }
}

impl FromXml for OnOff {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_value(el, W::val())?.unwrap_or(true),
        })
    }
}

impl ToXml for OnOff {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        if !self.val {
            out.value(W::val(), &self.val);
        }
        out.close()
    }
}

/// `CT_Markup`: an annotation identified only by `w:id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Markup {
    pub id: i64,
}

impl FromXml for Markup {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            id: ctx.attr_or_default(el, W::id())?,
        })
    }
}

impl ToXml for Markup {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::id(), &self.id);
        out.close()
    }
}

/// `CT_TrackChange`: the identity of a revision.
///
/// `date` keeps the attribute text as written; [`date_time`](Self::date_time)
/// interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackChange {
    pub id: i64,
    pub author: String,
    pub date: Option<String>,
}

impl TrackChange {
    pub fn new(id: i64, author: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            date: None,
        }
    }

    pub fn date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.date
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
    }

    pub fn set_date_time(&mut self, date: DateTime<Utc>) {
        self.date = Some(date.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    pub(crate) fn read(el: XmlElement<'_>, ctx: &DecodeContext) -> Result<Self> {
        Ok(Self {
            id: ctx.attr_or_default(el, W::id())?,
            author: ctx.attr_or_default(el, W::author())?,
            date: ctx.attr_value(el, W::date())?,
        })
    }

    pub(crate) fn write_attributes(&self, out: &mut XmlSink<'_>) {
        out.value(W::id(), &self.id);
        out.value(W::author(), &self.author);
        out.value_opt(W::date(), self.date.as_ref());
    }
}

impl FromXml for TrackChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Self::read(el, ctx)
    }
}

impl ToXml for TrackChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_attributes(out);
        out.close()
    }
}
