//! Decode/encode round trips over complete documents and fragments.

mod common;

use common::{canonical, canonical_fragment, child_names, ordering_violations};
use pretty_assertions::assert_eq;
use wordml_core::codec::{FromXml, ToXml};
use wordml_core::wml::{
    BlockContent, Bookmark, Cell, HMerge, Height, MarkupRange, Paragraph, ParagraphContent,
    ParagraphContentTag, Run, TblGrid, TblGridCol, TblOverlap, TblWidth, TcPr, Text, VMerge,
};
use wordml_core::xml::{QName, W};
use wordml_core::{
    from_fragment, to_fragment, to_fragment_with, Document, EmptyElementStyle, EncodeSettings,
};

const DOCUMENT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
    r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
    r#" xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math""#,
    r#" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006""#,
    r#" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml""#,
    r#" mc:Ignorable="w14">"#,
    r#"<w:body>"#,
    r#"<w:p w:rsidR="00A1B2C3" w:rsidRDefault="00A1B2C3">"#,
    r#"<w:pPr><w:pStyle w:val="Heading1"/></w:pPr>"#,
    r#"<w:bookmarkStart w:id="0" w:name="_Toc1"/>"#,
    r#"<w:r><w:rPr><w:b/></w:rPr><w:t>Quarterly report</w:t></w:r>"#,
    r#"<w:bookmarkEnd w:id="0"/>"#,
    r#"</w:p>"#,
    r#"<w:p>"#,
    r#"<w:permStart w:id="7" w:edGrp="everyone"/>"#,
    r#"<w:proofErr w:type="gramStart"/>"#,
    r#"<w:r><w:t xml:space="preserve">Revenue grew </w:t></w:r>"#,
    r#"<w:proofErr w:type="gramEnd"/>"#,
    r#"<w:ins w:id="3" w:author="Dana" w:date="2024-03-01T10:00:00Z"><w:r><w:t>sharply</w:t></w:r></w:ins>"#,
    r#"<w:r><w:commentReference w:id="2"/></w:r>"#,
    r#"<m:oMath><m:r><m:t>x+1</m:t></m:r></m:oMath>"#,
    r#"<w14:customMarker w14:val="keep"/>"#,
    r#"<w:permEnd w:id="7"/>"#,
    r#"</w:p>"#,
    r#"<w:tbl>"#,
    r#"<w:tblPr><w:tblW w:w="5000" w:type="pct"/></w:tblPr>"#,
    r#"<w:tblGrid><w:gridCol w:w="2400"/><w:gridCol w:w="2400"/></w:tblGrid>"#,
    r#"<w:tr>"#,
    r#"<w:trPr><w:cantSplit/><w:trHeight w:val="400" w:hRule="exact"/></w:trPr>"#,
    r#"<w:tc><w:tcPr><w:tcW w:w="2400" w:type="dxa"/><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc>"#,
    r#"<w:tc><w:tcPr><w:tcW w:w="2400" w:type="dxa"/></w:tcPr><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc>"#,
    r#"</w:tr>"#,
    r#"<w:tr>"#,
    r#"<w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc>"#,
    r#"<w:tc><w:p><w:r><w:t>C</w:t></w:r></w:p></w:tc>"#,
    r#"</w:tr>"#,
    r#"</w:tbl>"#,
    r#"<w:sdt>"#,
    r#"<w:sdtPr><w:alias w:val="Summary"/><w:tag w:val="summary"/><w:id w:val="-1204"/></w:sdtPr>"#,
    r#"<w:sdtContent><w:p><w:r><w:t>Summary text</w:t></w:r></w:p></w:sdtContent>"#,
    r#"</w:sdt>"#,
    r#"<w:customXml w:uri="urn:report" w:element="footer">"#,
    r#"<w:p><w:r><w:t>Footer</w:t></w:r></w:p>"#,
    r#"</w:customXml>"#,
    r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>"#,
    r#"</w:body>"#,
    r#"</w:document>"#
);

#[test]
fn full_document_round_trips() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    let output = document.to_xml().unwrap();

    assert!(output.starts_with("<?xml"), "{}", output);
    assert_eq!(canonical(&output), canonical(DOCUMENT));
    assert!(ordering_violations(&output).is_empty(), "{:?}", ordering_violations(&output));
}

#[test]
fn decoding_again_gives_an_equal_tree() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    let again = Document::from_xml(&document.to_xml().unwrap()).unwrap();
    assert_eq!(again, document);
}

#[test]
fn root_namespaces_and_attributes_survive() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    assert!(document
        .namespaces
        .iter()
        .any(|(prefix, _)| prefix == "w14"));
    let output = document.to_xml().unwrap();
    assert!(output.contains(r#"mc:Ignorable="w14""#), "{}", output);
    assert!(output.contains("<w14:customMarker"), "{}", output);
}

#[test]
fn document_text_covers_top_level_paragraphs() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    let body = document.body.as_ref().unwrap();
    assert_eq!(body.content.paragraphs().count(), 2);
    assert_eq!(body.content.tables().count(), 1);
    assert_eq!(
        document.text(),
        "Quarterly report\nRevenue grew sharply"
    );
}

#[test]
fn table_widths_and_merges_are_typed() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    let table = document.body.as_ref().unwrap().content.tables().next().unwrap();
    assert_eq!(
        table.tbl_grid.as_ref().unwrap().widths().collect::<Vec<_>>(),
        vec![Some(2400), Some(2400)]
    );
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows.len(), 2);
    let cells: Vec<_> = rows[0].cells().collect();
    assert_eq!(cells[0].text(), "A");
    let tc_pr = cells[0].tc_pr.as_ref().unwrap();
    assert_eq!(tc_pr.inner.base.tc_w, Some(TblWidth::dxa(2400)));
}

#[test]
fn paragraph_with_bookmark_keeps_slot_order() {
    let mut paragraph = Paragraph::default();
    paragraph
        .content
        .push(ParagraphContent::BookmarkStart(Bookmark::new(0, "intro")));
    paragraph.content.add_run().content.add_text("Hello");
    paragraph
        .content
        .push(ParagraphContent::BookmarkEnd(MarkupRange {
            id: 0,
            ..MarkupRange::default()
        }));

    let xml = to_fragment(&paragraph, W::p()).unwrap();
    assert_eq!(child_names(&xml), vec!["bookmarkStart", "r", "bookmarkEnd"]);

    let decoded: Paragraph = from_fragment(&xml).unwrap();
    assert_eq!(
        decoded.content.tags().collect::<Vec<_>>(),
        vec![
            ParagraphContentTag::BookmarkStart,
            ParagraphContentTag::Run,
            ParagraphContentTag::BookmarkEnd
        ]
    );
    assert_eq!(decoded, paragraph);
}

#[test]
fn inserting_a_run_before_the_first_run_lands_after_the_bookmark() {
    let mut paragraph: Paragraph = from_fragment(
        r#"<w:p><w:bookmarkStart w:id="1" w:name="b"/><w:r><w:t>world</w:t></w:r></w:p>"#,
    )
    .unwrap();
    paragraph
        .content
        .insert_item_before_nth(0, ParagraphContent::Run(Run::with_text("hello ")));

    let xml = to_fragment(&paragraph, W::p()).unwrap();
    assert_eq!(
        canonical_fragment(&xml),
        canonical_fragment(
            r#"<w:p><w:bookmarkStart w:id="1" w:name="b"/><w:r><w:t xml:space="preserve">hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>"#
        )
    );
    assert_eq!(paragraph.text(), "hello world");
}

#[test]
fn auto_table_width_omits_the_type() {
    let width = TblWidth {
        w: Some("0".to_string()),
        ..TblWidth::default()
    };
    let xml = to_fragment(&width, W::tblW()).unwrap();
    assert!(xml.contains(r#"w:w="0""#), "{}", xml);
    assert!(!xml.contains("w:type"), "{}", xml);

    let decoded: TblWidth = from_fragment(&xml).unwrap();
    assert_eq!(decoded, width);
}

#[test]
fn built_table_encodes_in_schema_order() {
    let mut document = Document::new();
    let body = document.body_mut();
    body.content.add_paragraph().content.add_run().content.add_text("Before");
    let table = body.content.add_table();
    *table = wordml_core::wml::Table::with_grid(&[1200, 3600]);
    let row = table.content.add_row();
    for text in ["left", "right"] {
        let cell = row.content.add_cell();
        *cell = Cell::with_text(text);
        cell.tc_pr = Some(TcPr::default());
        cell.tc_pr.as_mut().unwrap().inner.base.tc_w = Some(TblWidth::dxa(1200));
    }

    let output = document.to_xml().unwrap();
    assert!(ordering_violations(&output).is_empty(), "{:?}", ordering_violations(&output));
    assert!(output.contains(r#"<w:gridCol w:w="1200"/><w:gridCol w:w="3600"/>"#), "{}", output);

    let decoded = Document::from_xml(&output).unwrap();
    let table = decoded.body.as_ref().unwrap().content.tables().next().unwrap();
    let texts: Vec<_> = table
        .rows()
        .flat_map(|row| row.cells())
        .map(Cell::text)
        .collect();
    assert_eq!(texts, vec!["left", "right"]);
}

#[test]
fn legacy_style_self_closes_only_grid_height_and_merge() {
    let xml = concat!(
        r#"<w:tbl><w:tblGrid><w:gridCol w:w="100"/></w:tblGrid>"#,
        r#"<w:tr><w:trPr><w:trHeight w:val="300"/></w:trPr>"#,
        r#"<w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc></w:tr></w:tbl>"#
    );
    let table: wordml_core::wml::Table = from_fragment(xml).unwrap();
    let settings = EncodeSettings {
        empty_elements: EmptyElementStyle::Legacy,
        ..EncodeSettings::default()
    };
    let output = to_fragment_with(&table, W::tbl(), &settings).unwrap();

    assert!(output.contains(r#"<w:gridCol w:w="100"/>"#), "{}", output);
    assert!(output.contains(r#"<w:trHeight w:val="300"/>"#), "{}", output);
    assert!(output.contains("<w:vMerge/>"), "{}", output);
    assert!(output.contains("<w:p></w:p>"), "{}", output);
    assert_eq!(canonical_fragment(&output), canonical_fragment(xml));
}

#[test]
fn explicit_close_style_never_self_closes() {
    let grid = TblGrid {
        base: wordml_core::wml::TblGridBase {
            grid_cols: vec![TblGridCol { w: Some(10) }],
            ..Default::default()
        },
        ..TblGrid::default()
    };
    let settings = EncodeSettings {
        empty_elements: EmptyElementStyle::ExplicitClose,
        ..EncodeSettings::default()
    };
    let output = to_fragment_with(&grid, W::tblGrid(), &settings).unwrap();
    assert!(output.contains(r#"<w:gridCol w:w="10"></w:gridCol>"#), "{}", output);
}

#[test]
fn text_with_edge_whitespace_is_preserved() {
    let text = Text::new(" padded ");
    let xml = to_fragment(&text, W::t()).unwrap();
    assert!(xml.contains(r#"xml:space="preserve""#), "{}", xml);
    let decoded: Text = from_fragment(&xml).unwrap();
    assert_eq!(decoded.value, " padded ");
}

#[test]
fn block_content_items_are_addressed_by_tag() {
    let document = Document::from_xml(DOCUMENT).unwrap();
    let content = &document.body.as_ref().unwrap().content;
    let kinds: Vec<&str> = content
        .items()
        .map(|item| match item {
            BlockContent::Paragraph(_) => "p",
            BlockContent::Table(_) => "tbl",
            BlockContent::Sdt(_) => "sdt",
            BlockContent::CustomXml(_) => "customXml",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["p", "p", "tbl", "sdt", "customXml"]);
}

fn reencode<T: FromXml + ToXml>(xml: &str, name: QName) -> String {
    let value: T = from_fragment(xml).unwrap();
    to_fragment(&value, name).unwrap()
}

#[test]
fn attributes_equal_to_their_schema_default_are_not_written() {
    let cases: [(fn(&str, QName) -> String, QName, &str, &str); 10] = [
        (
            reencode::<TblWidth>,
            W::tblW(),
            r#"<w:tblW w:w="0" w:type="auto"/>"#,
            r#"<w:tblW w:w="0"/>"#,
        ),
        (
            reencode::<TblWidth>,
            W::tblW(),
            r#"<w:tblW w:w="2500" w:type="pct"/>"#,
            r#"<w:tblW w:w="2500" w:type="pct"/>"#,
        ),
        (
            reencode::<TblOverlap>,
            W::tblOverlap(),
            r#"<w:tblOverlap w:val="overlap"/>"#,
            r#"<w:tblOverlap/>"#,
        ),
        (
            reencode::<TblOverlap>,
            W::tblOverlap(),
            r#"<w:tblOverlap w:val="never"/>"#,
            r#"<w:tblOverlap w:val="never"/>"#,
        ),
        (
            reencode::<Height>,
            W::trHeight(),
            r#"<w:trHeight w:val="400" w:hRule="auto"/>"#,
            r#"<w:trHeight w:val="400"/>"#,
        ),
        (
            reencode::<Height>,
            W::trHeight(),
            r#"<w:trHeight w:val="400" w:hRule="atLeast"/>"#,
            r#"<w:trHeight w:val="400" w:hRule="atLeast"/>"#,
        ),
        (
            reencode::<HMerge>,
            W::hMerge(),
            r#"<w:hMerge w:val="continue"/>"#,
            r#"<w:hMerge/>"#,
        ),
        (
            reencode::<HMerge>,
            W::hMerge(),
            r#"<w:hMerge w:val="restart"/>"#,
            r#"<w:hMerge w:val="restart"/>"#,
        ),
        (
            reencode::<VMerge>,
            W::vMerge(),
            r#"<w:vMerge w:val="continue"/>"#,
            r#"<w:vMerge/>"#,
        ),
        (
            reencode::<VMerge>,
            W::vMerge(),
            r#"<w:vMerge w:val="restart"/>"#,
            r#"<w:vMerge w:val="restart"/>"#,
        ),
    ];

    for (encode, name, input, expected) in cases {
        let output = encode(input, name);
        assert_eq!(
            canonical_fragment(&output),
            canonical_fragment(expected),
            "{} gave {}",
            input,
            output
        );
    }
}
