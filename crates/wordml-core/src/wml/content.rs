//! Choice groups of the WordprocessingML content models.

use super::custom_xml::{CustomXmlBlock, CustomXmlCell, CustomXmlRow, CustomXmlRun};
use super::paragraph::{Hyperlink, Paragraph};
use super::run::{Break, Run, Text};
use super::sdt::{
    DataBinding, Lock, Placeholder, SdtBlock, SdtCell, SdtComboBox, SdtDate, SdtDocPart,
    SdtDropDownList, SdtRow, SdtRun, SdtText,
};
use super::shared::{
    DecimalNumber, Empty, Markup, OnOff, StringValue, UnsignedDecimalNumber,
};
use super::table::{Cell, Height, JcTable, Row, Table, TblWidth};
use crate::choice_group;
use crate::xml::{Opaque, W};

choice_group! {
    /// Block-level content of a body, cell, comment or content control.
    pub enum BlockContent / BlockContentTag with run_markup {
        CustomXml => (W::NS, "customXml"): CustomXmlBlock,
        Sdt => (W::NS, "sdt"): SdtBlock,
        Paragraph => (W::NS, "p"): Paragraph,
        Table => (W::NS, "tbl"): Table,
        AltChunk => (W::NS, "altChunk"): Opaque,
    }
}

choice_group! {
    /// Content of a paragraph or hyperlink.
    pub enum ParagraphContent / ParagraphContentTag with run_markup {
        CustomXml => (W::NS, "customXml"): CustomXmlRun,
        SmartTag => (W::NS, "smartTag"): Opaque,
        Sdt => (W::NS, "sdt"): SdtRun,
        Run => (W::NS, "r"): Run,
        FldSimple => (W::NS, "fldSimple"): Opaque,
        Hyperlink => (W::NS, "hyperlink"): Hyperlink,
        SubDoc => (W::NS, "subDoc"): Opaque,
    }
}

choice_group! {
    /// Content of an inserted, deleted or moved region.
    pub enum RunTrackContent / RunTrackContentTag with run_markup {
        CustomXml => (W::NS, "customXml"): CustomXmlRun,
        SmartTag => (W::NS, "smartTag"): Opaque,
        Sdt => (W::NS, "sdt"): SdtRun,
        Run => (W::NS, "r"): Run,
    }
}

choice_group! {
    /// Rows of a table and the markup between them.
    pub enum RowContent / RowContentTag with run_markup {
        Row => (W::NS, "tr"): Row,
        CustomXml => (W::NS, "customXml"): CustomXmlRow,
        Sdt => (W::NS, "sdt"): SdtRow,
    }
}

choice_group! {
    /// Cells of a row and the markup between them.
    pub enum CellContent / CellContentTag with run_markup {
        Cell => (W::NS, "tc"): Cell,
        CustomXml => (W::NS, "customXml"): CustomXmlCell,
        Sdt => (W::NS, "sdt"): SdtCell,
    }
}

choice_group! {
    /// Markup allowed at the start of a table, before its properties.
    pub enum TableMarkup / TableMarkupTag with run_markup {}
}

choice_group! {
    /// Content of a run.
    pub enum RunContent / RunContentTag {
        Break => (W::NS, "br"): Break,
        Text => (W::NS, "t"): Text,
        ContentPart => (W::NS, "contentPart"): Opaque,
        DelText => (W::NS, "delText"): Text,
        InstrText => (W::NS, "instrText"): Text,
        DelInstrText => (W::NS, "delInstrText"): Text,
        NoBreakHyphen => (W::NS, "noBreakHyphen"): Empty,
        SoftHyphen => (W::NS, "softHyphen"): Empty,
        DayShort => (W::NS, "dayShort"): Empty,
        MonthShort => (W::NS, "monthShort"): Empty,
        YearShort => (W::NS, "yearShort"): Empty,
        DayLong => (W::NS, "dayLong"): Empty,
        MonthLong => (W::NS, "monthLong"): Empty,
        YearLong => (W::NS, "yearLong"): Empty,
        AnnotationRef => (W::NS, "annotationRef"): Empty,
        FootnoteRef => (W::NS, "footnoteRef"): Empty,
        EndnoteRef => (W::NS, "endnoteRef"): Empty,
        Separator => (W::NS, "separator"): Empty,
        ContinuationSeparator => (W::NS, "continuationSeparator"): Empty,
        Sym => (W::NS, "sym"): Opaque,
        PgNum => (W::NS, "pgNum"): Empty,
        Cr => (W::NS, "cr"): Empty,
        Tab => (W::NS, "tab"): Empty,
        Object => (W::NS, "object"): Opaque,
        Pict => (W::NS, "pict"): Opaque,
        FldChar => (W::NS, "fldChar"): Opaque,
        Ruby => (W::NS, "ruby"): Opaque,
        FootnoteReference => (W::NS, "footnoteReference"): Opaque,
        EndnoteReference => (W::NS, "endnoteReference"): Opaque,
        CommentReference => (W::NS, "commentReference"): Markup,
        Drawing => (W::NS, "drawing"): Opaque,
        Ptab => (W::NS, "ptab"): Opaque,
        LastRenderedPageBreak => (W::NS, "lastRenderedPageBreak"): Empty,
    }
}

choice_group! {
    /// Row properties (`CT_TrPrBase`).
    pub enum TrPrContent / TrPrContentTag {
        CnfStyle => (W::NS, "cnfStyle"): Opaque,
        DivId => (W::NS, "divId"): DecimalNumber,
        GridBefore => (W::NS, "gridBefore"): DecimalNumber,
        GridAfter => (W::NS, "gridAfter"): DecimalNumber,
        WBefore => (W::NS, "wBefore"): TblWidth,
        WAfter => (W::NS, "wAfter"): TblWidth,
        CantSplit => (W::NS, "cantSplit"): OnOff,
        TrHeight => (W::NS, "trHeight"): Height,
        TblHeader => (W::NS, "tblHeader"): OnOff,
        TblCellSpacing => (W::NS, "tblCellSpacing"): TblWidth,
        Jc => (W::NS, "jc"): JcTable,
        Hidden => (W::NS, "hidden"): OnOff,
    }
}

choice_group! {
    /// Content control properties (`CT_SdtPr`), including the control type.
    pub enum SdtPrContent / SdtPrContentTag {
        RPr => (W::NS, "rPr"): Opaque,
        Alias => (W::NS, "alias"): StringValue,
        Tag => (W::NS, "tag"): StringValue,
        Id => (W::NS, "id"): DecimalNumber,
        Lock => (W::NS, "lock"): Lock,
        Placeholder => (W::NS, "placeholder"): Placeholder,
        Temporary => (W::NS, "temporary"): OnOff,
        ShowingPlcHdr => (W::NS, "showingPlcHdr"): OnOff,
        DataBinding => (W::NS, "dataBinding"): DataBinding,
        Label => (W::NS, "label"): DecimalNumber,
        TabIndex => (W::NS, "tabIndex"): UnsignedDecimalNumber,
        Equation => (W::NS, "equation"): Empty,
        ComboBox => (W::NS, "comboBox"): SdtComboBox,
        Date => (W::NS, "date"): SdtDate,
        DocPartObj => (W::NS, "docPartObj"): SdtDocPart,
        DocPartList => (W::NS, "docPartList"): SdtDocPart,
        DropDownList => (W::NS, "dropDownList"): SdtDropDownList,
        Picture => (W::NS, "picture"): Empty,
        RichText => (W::NS, "richText"): Empty,
        Text => (W::NS, "text"): SdtText,
        Citation => (W::NS, "citation"): Empty,
        Group => (W::NS, "group"): Empty,
        Bibliography => (W::NS, "bibliography"): Empty,
    }
}
