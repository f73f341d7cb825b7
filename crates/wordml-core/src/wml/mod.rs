//! WordprocessingML schema type nodes.
//!
//! Every type decodes from an element through [`FromXml`](crate::codec::FromXml)
//! and writes itself back through [`ToXml`](crate::codec::ToXml). Content the
//! binding does not model (paragraph and run properties, section
//! properties, drawings, math) is kept as [`Opaque`](crate::xml::Opaque).

mod content;
mod custom_xml;
mod document;
mod markup;
mod paragraph;
mod run;
mod sdt;
mod shared;
mod simple_types;
mod table;

pub use content::{
    BlockContent, BlockContentTag, CellContent, CellContentTag, ParagraphContent,
    ParagraphContentTag, RowContent, RowContentTag, RunContent, RunContentTag, RunTrackContent,
    RunTrackContentTag, SdtPrContent, SdtPrContentTag, TableMarkup, TableMarkupTag, TrPrContent,
    TrPrContentTag,
};
pub use custom_xml::{
    CustomXmlAttr, CustomXmlBlock, CustomXmlCell, CustomXmlElement, CustomXmlPr, CustomXmlRow,
    CustomXmlRun,
};
pub use document::{Body, Document};
pub use markup::{
    Bookmark, CellMergeTrackChange, MarkupRange, MoveBookmark, Perm, PermStart, ProofErr,
    RunTrackChange,
};
pub use paragraph::{Hyperlink, Paragraph};
pub use run::{Break, Run, Text};
pub use sdt::{
    DataBinding, Lock, Placeholder, SdtBlock, SdtCell, SdtComboBox, SdtContent, SdtDate,
    SdtDocPart, SdtDropDownList, SdtEndPr, SdtList, SdtListItem, SdtPr, SdtRow, SdtRun, SdtText,
    StructuredDocumentTag,
};
pub use shared::{
    DecimalNumber, Empty, Markup, OnOff, StringValue, TrackChange, UnsignedDecimalNumber,
};
pub use simple_types::{
    AnnotationVMerge, BrClear, BrType, DisplacedByCustomXml, EdGrp, HeightRule, JcTableValue,
    LockType, Merge, ProofErrType, TblLayoutType, TblOverlapValue, TblWidthType,
    VerticalJcValue, XmlSpace,
};
pub use table::{
    Cell, CellMarkup, HMerge, Height, JcTable, Row, Table, TblGrid, TblGridBase, TblGridChange,
    TblGridCol, TblLayout, TblOverlap, TblPr, TblPrBase, TblPrChange, TblPrEx, TblPrExBase,
    TblPrExChange, TblWidth, TcPr, TcPrBase, TcPrChange, TcPrInner, TrPr, TrPrBase, TrPrChange,
    VMerge, VerticalJc,
};
