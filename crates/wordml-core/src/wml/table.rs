//! Tables: grid, rows, cells and their property blocks.
//!
//! Property types that extend one another in the schema are composed here:
//! `TblPr` holds a `TblPrBase` plus its revision, `TcPr` a `TcPrInner`
//! which in turn holds a `TcPrBase`.

use super::content::{
    BlockContent, CellContent, CellContentTag, RowContent, RowContentTag,
    TableMarkup, TrPrContent,
};
use super::markup::CellMergeTrackChange;
use super::paragraph::Paragraph;
use super::shared::{DecimalNumber, OnOff, StringValue, TrackChange};
use super::simple_types::{
    HeightRule, JcTableValue, Merge, TblLayoutType, TblOverlapValue, TblWidthType,
    VerticalJcValue,
};
use crate::codec::{DecodeContext, FromXml, HexBytes, ToXml};
use crate::error::Result;
use crate::ohcs::ChildSequence;
use crate::xml::{Opaque, QName, RawElement, XmlElement, XmlSink, W};

fn local_w_name<'a>(el: XmlElement<'a>) -> Option<&'a str> {
    let name = el.name();
    (name.namespace.as_deref() == Some(W::NS)).then_some(name.local_name.as_str())
}

/// `CT_Tbl`.
///
/// Markup that precedes `w:tblPr` lives in `markup`; everything after the
/// grid, or from the first `w:tr` when the grid is missing, is row content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub markup: ChildSequence<TableMarkup>,
    pub tbl_pr: Option<TblPr>,
    pub tbl_grid: Option<TblGrid>,
    pub content: ChildSequence<RowContent>,
}

impl Table {
    /// A table with a grid of `widths` and no rows.
    pub fn with_grid(widths: &[u64]) -> Self {
        Self {
            tbl_pr: Some(TblPr::default()),
            tbl_grid: Some(TblGrid {
                base: TblGridBase {
                    grid_cols: widths.iter().map(|&w| TblGridCol { w: Some(w) }).collect(),
                    ..TblGridBase::default()
                },
                tbl_grid_change: None,
            }),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.content.rows()
    }
}

impl FromXml for Table {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut table = Self::default();
        let mut in_rows = false;
        for child in el.children() {
            if child.is(W::tblPr()) {
                table.tbl_pr = ctx.child(child)?;
                in_rows = true;
            } else if child.is(W::tblGrid()) {
                table.tbl_grid = ctx.child(child)?;
                in_rows = true;
            } else if in_rows || child.is(W::tr()) {
                in_rows = true;
                ctx.sequence_child(&mut table.content, child)?;
            } else {
                ctx.sequence_child(&mut table.markup, child)?;
            }
        }
        Ok(table)
    }
}

impl ToXml for Table {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.markup.write(out)?;
        out.child(W::tblPr(), self.tbl_pr.as_ref())?;
        out.child(W::tblGrid(), self.tbl_grid.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_TblPrBase`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPrBase {
    pub tbl_style: Option<StringValue>,
    pub tblp_pr: Option<Opaque>,
    pub tbl_overlap: Option<TblOverlap>,
    pub bidi_visual: Option<OnOff>,
    pub tbl_style_row_band_size: Option<DecimalNumber>,
    pub tbl_style_col_band_size: Option<DecimalNumber>,
    pub tbl_w: Option<TblWidth>,
    pub jc: Option<JcTable>,
    pub tbl_cell_spacing: Option<TblWidth>,
    pub tbl_ind: Option<TblWidth>,
    pub tbl_borders: Option<Opaque>,
    pub shd: Option<Opaque>,
    pub tbl_layout: Option<TblLayout>,
    pub tbl_cell_mar: Option<Opaque>,
    pub tbl_look: Option<Opaque>,
    pub tbl_caption: Option<StringValue>,
    pub tbl_description: Option<StringValue>,
    pub extensions: Vec<RawElement>,
}

impl TblPrBase {
    /// Reads `child` into its field. Returns `false` for a name outside
    /// the base sequence.
    fn read_child(&mut self, child: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<bool> {
        match local_w_name(child) {
            Some("tblStyle") => self.tbl_style = ctx.child(child)?,
            Some("tblpPr") => self.tblp_pr = ctx.child(child)?,
            Some("tblOverlap") => self.tbl_overlap = ctx.child(child)?,
            Some("bidiVisual") => self.bidi_visual = ctx.child(child)?,
            Some("tblStyleRowBandSize") => self.tbl_style_row_band_size = ctx.child(child)?,
            Some("tblStyleColBandSize") => self.tbl_style_col_band_size = ctx.child(child)?,
            Some("tblW") => self.tbl_w = ctx.child(child)?,
            Some("jc") => self.jc = ctx.child(child)?,
            Some("tblCellSpacing") => self.tbl_cell_spacing = ctx.child(child)?,
            Some("tblInd") => self.tbl_ind = ctx.child(child)?,
            Some("tblBorders") => self.tbl_borders = ctx.child(child)?,
            Some("shd") => self.shd = ctx.child(child)?,
            Some("tblLayout") => self.tbl_layout = ctx.child(child)?,
            Some("tblCellMar") => self.tbl_cell_mar = ctx.child(child)?,
            Some("tblLook") => self.tbl_look = ctx.child(child)?,
            Some("tblCaption") => self.tbl_caption = ctx.child(child)?,
            Some("tblDescription") => self.tbl_description = ctx.child(child)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_children(&self, out: &mut XmlSink<'_>) -> Result<()> {
        out.child(W::tblStyle(), self.tbl_style.as_ref())?;
        out.child(W::tblpPr(), self.tblp_pr.as_ref())?;
        out.child(W::tblOverlap(), self.tbl_overlap.as_ref())?;
        out.child(W::bidiVisual(), self.bidi_visual.as_ref())?;
        out.child(W::tblStyleRowBandSize(), self.tbl_style_row_band_size.as_ref())?;
        out.child(W::tblStyleColBandSize(), self.tbl_style_col_band_size.as_ref())?;
        out.child(W::tblW(), self.tbl_w.as_ref())?;
        out.child(W::jc(), self.jc.as_ref())?;
        out.child(W::tblCellSpacing(), self.tbl_cell_spacing.as_ref())?;
        out.child(W::tblInd(), self.tbl_ind.as_ref())?;
        out.child(W::tblBorders(), self.tbl_borders.as_ref())?;
        out.child(W::shd(), self.shd.as_ref())?;
        out.child(W::tblLayout(), self.tbl_layout.as_ref())?;
        out.child(W::tblCellMar(), self.tbl_cell_mar.as_ref())?;
        out.child(W::tblLook(), self.tbl_look.as_ref())?;
        out.child(W::tblCaption(), self.tbl_caption.as_ref())?;
        out.child(W::tblDescription(), self.tbl_description.as_ref())
    }
}

impl FromXml for TblPrBase {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut base = Self::default();
        for child in el.children() {
            if !base.read_child(child, ctx)? {
                ctx.extension(&mut base.extensions, child);
            }
        }
        Ok(base)
    }
}

impl ToXml for TblPrBase {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_children(out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblPr`: table properties and their recorded previous state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPr {
    pub base: TblPrBase,
    pub tbl_pr_change: Option<TblPrChange>,
}

impl FromXml for TblPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::tblPrChange()) {
                pr.tbl_pr_change = ctx.child(child)?;
            } else if !pr.base.read_child(child, ctx)? {
                ctx.extension(&mut pr.base.extensions, child);
            }
        }
        Ok(pr)
    }
}

impl ToXml for TblPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.base.write_children(out)?;
        out.child(W::tblPrChange(), self.tbl_pr_change.as_ref())?;
        out.extensions(&self.base.extensions)?;
        out.close()
    }
}

/// `CT_TblPrChange`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPrChange {
    pub change: TrackChange,
    pub tbl_pr: TblPrBase,
    pub extensions: Vec<RawElement>,
}

impl FromXml for TblPrChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            change: TrackChange::read(el, ctx)?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tblPr()) {
                if let Some(pr) = ctx.child(child)? {
                    value.tbl_pr = pr;
                }
            } else {
                ctx.extension(&mut value.extensions, child);
            }
        }
        Ok(value)
    }
}

impl ToXml for TblPrChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        self.tbl_pr.to_xml(W::tblPr(), out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblGridBase`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblGridBase {
    pub grid_cols: Vec<TblGridCol>,
    pub extensions: Vec<RawElement>,
}

impl TblGridBase {
    fn read_child(&mut self, child: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<bool> {
        if !child.is(W::gridCol()) {
            return Ok(false);
        }
        if let Some(col) = ctx.child(child)? {
            self.grid_cols.push(col);
        }
        Ok(true)
    }

    fn write_children(&self, out: &mut XmlSink<'_>) -> Result<()> {
        for col in &self.grid_cols {
            col.to_xml(W::gridCol(), out)?;
        }
        Ok(())
    }
}

impl FromXml for TblGridBase {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut base = Self::default();
        for child in el.children() {
            if !base.read_child(child, ctx)? {
                ctx.extension(&mut base.extensions, child);
            }
        }
        Ok(base)
    }
}

impl ToXml for TblGridBase {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_children(out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblGrid`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblGrid {
    pub base: TblGridBase,
    pub tbl_grid_change: Option<TblGridChange>,
}

impl TblGrid {
    pub fn widths(&self) -> impl Iterator<Item = Option<u64>> + '_ {
        self.base.grid_cols.iter().map(|col| col.w)
    }
}

impl FromXml for TblGrid {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut grid = Self::default();
        for child in el.children() {
            if child.is(W::tblGridChange()) {
                grid.tbl_grid_change = ctx.child(child)?;
            } else if !grid.base.read_child(child, ctx)? {
                ctx.extension(&mut grid.base.extensions, child);
            }
        }
        Ok(grid)
    }
}

impl ToXml for TblGrid {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.base.write_children(out)?;
        out.child(W::tblGridChange(), self.tbl_grid_change.as_ref())?;
        out.extensions(&self.base.extensions)?;
        out.close()
    }
}

/// `CT_TblGridCol`: one grid column, width in twentieths of a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TblGridCol {
    pub w: Option<u64>,
}

impl FromXml for TblGridCol {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            w: ctx.attr_value(el, W::w())?,
        })
    }
}

impl ToXml for TblGridCol {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open_self_closing(name)?;
        out.value_opt(W::w(), self.w.as_ref());
        out.close()
    }
}

/// `CT_TblGridChange`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblGridChange {
    pub id: i64,
    pub tbl_grid: TblGridBase,
    pub extensions: Vec<RawElement>,
}

impl FromXml for TblGridChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            id: ctx.attr_or_default(el, W::id())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tblGrid()) {
                if let Some(grid) = ctx.child(child)? {
                    value.tbl_grid = grid;
                }
            } else {
                ctx.extension(&mut value.extensions, child);
            }
        }
        Ok(value)
    }
}

impl ToXml for TblGridChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value(W::id(), &self.id);
        self.tbl_grid.to_xml(W::tblGrid(), out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblPrExBase`: table property exceptions for one row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPrExBase {
    pub tbl_w: Option<TblWidth>,
    pub jc: Option<JcTable>,
    pub tbl_cell_spacing: Option<TblWidth>,
    pub tbl_ind: Option<TblWidth>,
    pub tbl_borders: Option<Opaque>,
    pub shd: Option<Opaque>,
    pub tbl_layout: Option<TblLayout>,
    pub tbl_cell_mar: Option<Opaque>,
    pub tbl_look: Option<Opaque>,
    pub extensions: Vec<RawElement>,
}

impl TblPrExBase {
    fn read_child(&mut self, child: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<bool> {
        match local_w_name(child) {
            Some("tblW") => self.tbl_w = ctx.child(child)?,
            Some("jc") => self.jc = ctx.child(child)?,
            Some("tblCellSpacing") => self.tbl_cell_spacing = ctx.child(child)?,
            Some("tblInd") => self.tbl_ind = ctx.child(child)?,
            Some("tblBorders") => self.tbl_borders = ctx.child(child)?,
            Some("shd") => self.shd = ctx.child(child)?,
            Some("tblLayout") => self.tbl_layout = ctx.child(child)?,
            Some("tblCellMar") => self.tbl_cell_mar = ctx.child(child)?,
            Some("tblLook") => self.tbl_look = ctx.child(child)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_children(&self, out: &mut XmlSink<'_>) -> Result<()> {
        out.child(W::tblW(), self.tbl_w.as_ref())?;
        out.child(W::jc(), self.jc.as_ref())?;
        out.child(W::tblCellSpacing(), self.tbl_cell_spacing.as_ref())?;
        out.child(W::tblInd(), self.tbl_ind.as_ref())?;
        out.child(W::tblBorders(), self.tbl_borders.as_ref())?;
        out.child(W::shd(), self.shd.as_ref())?;
        out.child(W::tblLayout(), self.tbl_layout.as_ref())?;
        out.child(W::tblCellMar(), self.tbl_cell_mar.as_ref())?;
        out.child(W::tblLook(), self.tbl_look.as_ref())
    }
}

impl FromXml for TblPrExBase {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut base = Self::default();
        for child in el.children() {
            if !base.read_child(child, ctx)? {
                ctx.extension(&mut base.extensions, child);
            }
        }
        Ok(base)
    }
}

impl ToXml for TblPrExBase {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_children(out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblPrEx`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPrEx {
    pub base: TblPrExBase,
    pub tbl_pr_ex_change: Option<TblPrExChange>,
}

impl FromXml for TblPrEx {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::tblPrExChange()) {
                pr.tbl_pr_ex_change = ctx.child(child)?;
            } else if !pr.base.read_child(child, ctx)? {
                ctx.extension(&mut pr.base.extensions, child);
            }
        }
        Ok(pr)
    }
}

impl ToXml for TblPrEx {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.base.write_children(out)?;
        out.child(W::tblPrExChange(), self.tbl_pr_ex_change.as_ref())?;
        out.extensions(&self.base.extensions)?;
        out.close()
    }
}

/// `CT_TblPrExChange`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TblPrExChange {
    pub change: TrackChange,
    pub tbl_pr_ex: TblPrExBase,
    pub extensions: Vec<RawElement>,
}

impl FromXml for TblPrExChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            change: TrackChange::read(el, ctx)?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tblPrEx()) {
                if let Some(pr) = ctx.child(child)? {
                    value.tbl_pr_ex = pr;
                }
            } else {
                ctx.extension(&mut value.extensions, child);
            }
        }
        Ok(value)
    }
}

impl ToXml for TblPrExChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        self.tbl_pr_ex.to_xml(W::tblPrEx(), out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_TblWidth`. `w` is kept as written since it may be a twips count or
/// a percentage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TblWidth {
    pub w: Option<String>,
    pub width_type: TblWidthType,
}

impl TblWidth {
    pub fn dxa(twips: u64) -> Self {
        Self {
            w: Some(twips.to_string()),
            width_type: TblWidthType::Dxa,
        }
    }
}

impl FromXml for TblWidth {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            w: ctx.attr_value(el, W::w())?,
            width_type: ctx.attr_or_default(el, W::r#type())?,
        })
    }
}

impl ToXml for TblWidth {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::w(), self.w.as_ref());
        out.value_unless_default(W::r#type(), &self.width_type);
        out.close()
    }
}

/// `CT_TblOverlap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TblOverlap {
    pub val: TblOverlapValue,
}

impl FromXml for TblOverlap {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for TblOverlap {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_unless_default(W::val(), &self.val);
        out.close()
    }
}

/// `CT_TblLayoutType`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TblLayout {
    pub r#type: Option<TblLayoutType>,
}

impl FromXml for TblLayout {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            r#type: ctx.attr_value(el, W::r#type())?,
        })
    }
}

impl ToXml for TblLayout {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::r#type(), self.r#type.as_ref());
        out.close()
    }
}

/// `CT_JcTable`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JcTable {
    pub val: Option<JcTableValue>,
}

impl FromXml for JcTable {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_value(el, W::val())?,
        })
    }
}

impl ToXml for JcTable {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::val(), self.val.as_ref());
        out.close()
    }
}

/// `CT_VerticalJc`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerticalJc {
    pub val: Option<VerticalJcValue>,
}

impl FromXml for VerticalJc {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_value(el, W::val())?,
        })
    }
}

impl ToXml for VerticalJc {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::val(), self.val.as_ref());
        out.close()
    }
}

/// `CT_Row`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub rsid_r_pr: Option<HexBytes>,
    pub rsid_r: Option<HexBytes>,
    pub rsid_del: Option<HexBytes>,
    pub rsid_tr: Option<HexBytes>,
    pub tbl_pr_ex: Option<TblPrEx>,
    pub tr_pr: Option<TrPr>,
    pub content: ChildSequence<CellContent>,
}

impl Row {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.content.cells()
    }
}

impl FromXml for Row {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut row = Self {
            rsid_r_pr: ctx.attr_value(el, W::rsidRPr())?,
            rsid_r: ctx.attr_value(el, W::rsidR())?,
            rsid_del: ctx.attr_value(el, W::rsidDel())?,
            rsid_tr: ctx.attr_value(el, W::rsidTr())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tblPrEx()) {
                row.tbl_pr_ex = ctx.child(child)?;
            } else if child.is(W::trPr()) {
                row.tr_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut row.content, child)?;
            }
        }
        Ok(row)
    }
}

impl ToXml for Row {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::rsidRPr(), self.rsid_r_pr.as_ref());
        out.value_opt(W::rsidR(), self.rsid_r.as_ref());
        out.value_opt(W::rsidDel(), self.rsid_del.as_ref());
        out.value_opt(W::rsidTr(), self.rsid_tr.as_ref());
        out.child(W::tblPrEx(), self.tbl_pr_ex.as_ref())?;
        out.child(W::trPr(), self.tr_pr.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_TrPrBase`: an unbounded choice of row properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrPrBase {
    pub content: ChildSequence<TrPrContent>,
}

impl FromXml for TrPrBase {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut base = Self::default();
        for child in el.children() {
            ctx.sequence_child(&mut base.content, child)?;
        }
        Ok(base)
    }
}

impl ToXml for TrPrBase {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_TrPr`: row properties plus the row's own insertion, deletion and
/// property revision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrPr {
    pub base: TrPrBase,
    pub ins: Option<TrackChange>,
    pub del: Option<TrackChange>,
    pub tr_pr_change: Option<TrPrChange>,
}

impl FromXml for TrPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::ins()) {
                pr.ins = ctx.child(child)?;
            } else if child.is(W::del()) {
                pr.del = ctx.child(child)?;
            } else if child.is(W::trPrChange()) {
                pr.tr_pr_change = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut pr.base.content, child)?;
            }
        }
        Ok(pr)
    }
}

impl ToXml for TrPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.base.content.write(out)?;
        out.child(W::ins(), self.ins.as_ref())?;
        out.child(W::del(), self.del.as_ref())?;
        out.child(W::trPrChange(), self.tr_pr_change.as_ref())?;
        out.close()
    }
}

/// `CT_TrPrChange`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrPrChange {
    pub change: TrackChange,
    pub tr_pr: TrPrBase,
    pub extensions: Vec<RawElement>,
}

impl FromXml for TrPrChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            change: TrackChange::read(el, ctx)?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::trPr()) {
                if let Some(pr) = ctx.child(child)? {
                    value.tr_pr = pr;
                }
            } else {
                ctx.extension(&mut value.extensions, child);
            }
        }
        Ok(value)
    }
}

impl ToXml for TrPrChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        self.tr_pr.to_xml(W::trPr(), out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_Height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Height {
    pub val: Option<u64>,
    pub h_rule: HeightRule,
}

impl FromXml for Height {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_value(el, W::val())?,
            h_rule: ctx.attr_or_default(el, W::hRule())?,
        })
    }
}

impl ToXml for Height {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open_self_closing(name)?;
        out.value_opt(W::val(), self.val.as_ref());
        out.value_unless_default(W::hRule(), &self.h_rule);
        out.close()
    }
}

/// `CT_Tc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub id: Option<String>,
    pub tc_pr: Option<TcPr>,
    pub content: ChildSequence<BlockContent>,
}

impl Cell {
    /// A cell holding one paragraph of `text`. Cells must end in a
    /// paragraph, so even an empty cell gets one.
    pub fn with_text(text: &str) -> Self {
        let mut cell = Self::default();
        let p = cell.content.add_paragraph();
        if !text.is_empty() {
            *p = Paragraph::with_text(text);
        }
        cell
    }

    pub fn text(&self) -> String {
        self.content
            .paragraphs()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromXml for Cell {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut cell = Self {
            id: ctx.attr_value(el, W::id())?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tcPr()) {
                cell.tc_pr = ctx.child(child)?;
            } else {
                ctx.sequence_child(&mut cell.content, child)?;
            }
        }
        Ok(cell)
    }
}

impl ToXml for Cell {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_opt(W::id(), self.id.as_ref());
        out.child(W::tcPr(), self.tc_pr.as_ref())?;
        self.content.write(out)?;
        out.close()
    }
}

/// `CT_TcPrBase`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcPrBase {
    pub cnf_style: Option<Opaque>,
    pub tc_w: Option<TblWidth>,
    pub grid_span: Option<DecimalNumber>,
    pub h_merge: Option<HMerge>,
    pub v_merge: Option<VMerge>,
    pub tc_borders: Option<Opaque>,
    pub shd: Option<Opaque>,
    pub no_wrap: Option<OnOff>,
    pub tc_mar: Option<Opaque>,
    pub text_direction: Option<Opaque>,
    pub tc_fit_text: Option<OnOff>,
    pub v_align: Option<VerticalJc>,
    pub hide_mark: Option<OnOff>,
    pub extensions: Vec<RawElement>,
}

impl TcPrBase {
    fn read_child(&mut self, child: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<bool> {
        match local_w_name(child) {
            Some("cnfStyle") => self.cnf_style = ctx.child(child)?,
            Some("tcW") => self.tc_w = ctx.child(child)?,
            Some("gridSpan") => self.grid_span = ctx.child(child)?,
            Some("hMerge") => self.h_merge = ctx.child(child)?,
            Some("vMerge") => self.v_merge = ctx.child(child)?,
            Some("tcBorders") => self.tc_borders = ctx.child(child)?,
            Some("shd") => self.shd = ctx.child(child)?,
            Some("noWrap") => self.no_wrap = ctx.child(child)?,
            Some("tcMar") => self.tc_mar = ctx.child(child)?,
            Some("textDirection") => self.text_direction = ctx.child(child)?,
            Some("tcFitText") => self.tc_fit_text = ctx.child(child)?,
            Some("vAlign") => self.v_align = ctx.child(child)?,
            Some("hideMark") => self.hide_mark = ctx.child(child)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_children(&self, out: &mut XmlSink<'_>) -> Result<()> {
        out.child(W::cnfStyle(), self.cnf_style.as_ref())?;
        out.child(W::tcW(), self.tc_w.as_ref())?;
        out.child(W::gridSpan(), self.grid_span.as_ref())?;
        out.child(W::hMerge(), self.h_merge.as_ref())?;
        out.child(W::vMerge(), self.v_merge.as_ref())?;
        out.child(W::tcBorders(), self.tc_borders.as_ref())?;
        out.child(W::shd(), self.shd.as_ref())?;
        out.child(W::noWrap(), self.no_wrap.as_ref())?;
        out.child(W::tcMar(), self.tc_mar.as_ref())?;
        out.child(W::textDirection(), self.text_direction.as_ref())?;
        out.child(W::tcFitText(), self.tc_fit_text.as_ref())?;
        out.child(W::vAlign(), self.v_align.as_ref())?;
        out.child(W::hideMark(), self.hide_mark.as_ref())
    }
}

/// Revision mark on a cell: inserted, deleted or merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellMarkup {
    Ins(TrackChange),
    Del(TrackChange),
    Merge(CellMergeTrackChange),
}

impl CellMarkup {
    pub fn name(&self) -> QName {
        match self {
            CellMarkup::Ins(_) => W::cellIns(),
            CellMarkup::Del(_) => W::cellDel(),
            CellMarkup::Merge(_) => W::cellMerge(),
        }
    }

    fn write(&self, out: &mut XmlSink<'_>) -> Result<()> {
        let name = self.name();
        match self {
            CellMarkup::Ins(change) | CellMarkup::Del(change) => change.to_xml(name, out),
            CellMarkup::Merge(merge) => merge.to_xml(name, out),
        }
    }
}

/// `CT_TcPrInner`: base cell properties and an optional cell revision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcPrInner {
    pub base: TcPrBase,
    pub cell_markup: Option<CellMarkup>,
}

impl TcPrInner {
    fn read_child(&mut self, child: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<bool> {
        if child.is(W::cellIns()) {
            self.cell_markup = ctx.child(child)?.map(CellMarkup::Ins);
        } else if child.is(W::cellDel()) {
            self.cell_markup = ctx.child(child)?.map(CellMarkup::Del);
        } else if child.is(W::cellMerge()) {
            self.cell_markup = ctx.child(child)?.map(CellMarkup::Merge);
        } else {
            return self.base.read_child(child, ctx);
        }
        Ok(true)
    }

    fn write_children(&self, out: &mut XmlSink<'_>) -> Result<()> {
        self.base.write_children(out)?;
        match &self.cell_markup {
            Some(markup) => markup.write(out),
            None => Ok(()),
        }
    }
}

impl FromXml for TcPrInner {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut inner = Self::default();
        for child in el.children() {
            if !inner.read_child(child, ctx)? {
                ctx.extension(&mut inner.base.extensions, child);
            }
        }
        Ok(inner)
    }
}

impl ToXml for TcPrInner {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.write_children(out)?;
        out.extensions(&self.base.extensions)?;
        out.close()
    }
}

/// `CT_TcPr`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcPr {
    pub inner: TcPrInner,
    pub tc_pr_change: Option<TcPrChange>,
}

impl FromXml for TcPr {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut pr = Self::default();
        for child in el.children() {
            if child.is(W::tcPrChange()) {
                pr.tc_pr_change = ctx.child(child)?;
            } else if !pr.inner.read_child(child, ctx)? {
                ctx.extension(&mut pr.inner.base.extensions, child);
            }
        }
        Ok(pr)
    }
}

impl ToXml for TcPr {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.inner.write_children(out)?;
        out.child(W::tcPrChange(), self.tc_pr_change.as_ref())?;
        out.extensions(&self.inner.base.extensions)?;
        out.close()
    }
}

/// `CT_TcPrChange`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcPrChange {
    pub change: TrackChange,
    pub tc_pr: TcPrInner,
    pub extensions: Vec<RawElement>,
}

impl FromXml for TcPrChange {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        let mut value = Self {
            change: TrackChange::read(el, ctx)?,
            ..Self::default()
        };
        for child in el.children() {
            if child.is(W::tcPr()) {
                if let Some(pr) = ctx.child(child)? {
                    value.tc_pr = pr;
                }
            } else {
                ctx.extension(&mut value.extensions, child);
            }
        }
        Ok(value)
    }
}

impl ToXml for TcPrChange {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        self.change.write_attributes(out);
        self.tc_pr.to_xml(W::tcPr(), out)?;
        out.extensions(&self.extensions)?;
        out.close()
    }
}

/// `CT_HMerge`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HMerge {
    pub val: Merge,
}

impl FromXml for HMerge {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for HMerge {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open(name)?;
        out.value_unless_default(W::val(), &self.val);
        out.close()
    }
}

/// `CT_VMerge`. A bare `<w:vMerge/>` continues the merge above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VMerge {
    pub val: Merge,
}

impl FromXml for VMerge {
    fn from_xml(el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self> {
        Ok(Self {
            val: ctx.attr_or_default(el, W::val())?,
        })
    }
}

impl ToXml for VMerge {
    fn to_xml(&self, name: QName, out: &mut XmlSink<'_>) -> Result<()> {
        out.open_self_closing(name)?;
        out.value_unless_default(W::val(), &self.val);
        out.close()
    }
}

impl ChildSequence<RowContent> {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.iter_of(RowContentTag::Row).filter_map(|item| match item {
            RowContent::Row(row) => Some(row),
            _ => None,
        })
    }

    pub fn add_row(&mut self) -> &mut Row {
        match self.append_new(RowContentTag::Row) {
            RowContent::Row(row) => row,
            _ => unreachable!("append_new(Row) yields a Row"),
        }
    }

    pub fn remove_row(&mut self, n: usize) -> Option<Row> {
        match self.remove_nth(RowContentTag::Row, n)? {
            RowContent::Row(row) => Some(row),
            _ => None,
        }
    }
}

impl ChildSequence<CellContent> {
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.iter_of(CellContentTag::Cell).filter_map(|item| match item {
            CellContent::Cell(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn add_cell(&mut self) -> &mut Cell {
        match self.append_new(CellContentTag::Cell) {
            CellContent::Cell(cell) => cell,
            _ => unreachable!("append_new(Cell) yields a Cell"),
        }
    }

    pub fn cell_mut(&mut self, n: usize) -> Option<&mut Cell> {
        match self.nth_of_mut(CellContentTag::Cell, n)? {
            CellContent::Cell(cell) => Some(cell),
            _ => None,
        }
    }
}
