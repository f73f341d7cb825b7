//! Lenient and strict decoding, and the unknown-element policy.

use pretty_assertions::assert_eq;
use std::fmt::Debug;
use wordml_core::codec::{FromXml, ToXml};
use wordml_core::wml::{
    Paragraph, ParagraphContentTag, Placeholder, SdtDate, SdtDocPart, SdtList, TblGrid,
    TblGridChange, TblPrChange, TblPrExChange, TcPrChange, TrPrChange,
};
use wordml_core::xml::{QName, W};
use wordml_core::{
    from_fragment, from_fragment_with, to_fragment, DecodeSettings, Document,
    UnknownElementPolicy, WordmlError,
};

fn document(body: &str) -> String {
    format!(
        concat!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
            r#" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml">"#,
            r#"<w:body>{}</w:body></w:document>"#
        ),
        body
    )
}

const BAD_TABLE_WIDTH: &str = r#"<w:tbl><w:tblPr><w:tblStyle w:val="Grid"/><w:tblW w:w="10" w:type="bogus"/></w:tblPr><w:tblGrid/></w:tbl>"#;

#[test]
fn lenient_decode_skips_the_failing_child() {
    let decoded =
        Document::from_xml_with(&document(BAD_TABLE_WIDTH), &DecodeSettings::default()).unwrap();

    assert_eq!(decoded.issues.len(), 1);
    assert_eq!(
        decoded.issues[0].path,
        "/w:document/w:body/w:tbl/w:tblPr/w:tblW"
    );
    assert!(decoded.issues[0].message.contains("bogus"));

    let table = decoded
        .value
        .body
        .as_ref()
        .unwrap()
        .content
        .tables()
        .next()
        .unwrap();
    let tbl_pr = table.tbl_pr.as_ref().unwrap();
    assert!(tbl_pr.base.tbl_w.is_none());
    assert!(tbl_pr.base.tbl_style.is_some());
}

#[test]
fn strict_decode_reports_the_element_path() {
    let err = Document::from_xml_with(&document(BAD_TABLE_WIDTH), &DecodeSettings::strict())
        .unwrap_err();
    match err {
        WordmlError::InvalidAttribute {
            element,
            attribute,
            value,
            ..
        } => {
            assert_eq!(element, "/w:document/w:body/w:tbl/w:tblPr/w:tblW");
            assert_eq!(attribute, "type");
            assert_eq!(value, "bogus");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn lenient_decode_drops_a_bad_sequence_item_and_keeps_siblings() {
    let xml = r#"<w:p><w:proofErr w:type="sometimes"/><w:r><w:t>kept</w:t></w:r><w:bookmarkEnd w:id="4"/></w:p>"#;
    let decoded = from_fragment_with::<Paragraph>(xml, &DecodeSettings::default()).unwrap();

    assert_eq!(
        decoded.value.content.tags().collect::<Vec<_>>(),
        vec![ParagraphContentTag::Run, ParagraphContentTag::BookmarkEnd]
    );
    assert_eq!(decoded.value.text(), "kept");
    assert_eq!(decoded.issues.len(), 1);
    assert_eq!(decoded.issues[0].path, "/w:p/w:proofErr");
}

#[test]
fn strict_fragment_decode_fails_on_bad_number() {
    let xml = r#"<w:p><w:bookmarkEnd w:id="four"/></w:p>"#;
    let err = from_fragment_with::<Paragraph>(xml, &DecodeSettings::strict()).unwrap_err();
    assert!(err.is_decode_error());
}

#[test]
fn drop_policy_removes_unknown_elements() {
    let xml = document(r#"<w:p><w14:marker/><w:r><w:t>a</w:t></w:r></w:p><w14:block/>"#);
    let settings = DecodeSettings {
        unknown_elements: UnknownElementPolicy::Drop,
        ..DecodeSettings::default()
    };
    let decoded = Document::from_xml_with(&xml, &settings).unwrap();
    assert!(decoded.issues.is_empty());

    let output = decoded.value.to_xml().unwrap();
    assert!(!output.contains("w14:marker"), "{}", output);
    assert!(!output.contains("w14:block"), "{}", output);
    assert!(output.contains("<w:t>a</w:t>"), "{}", output);
}

#[test]
fn preserve_policy_keeps_unknown_elements_in_place() {
    let xml = document(r#"<w:p><w14:marker/><w:r><w:t>a</w:t></w:r></w:p><w14:block/>"#);
    let document = Document::from_xml(&xml).unwrap();
    let body = document.body.as_ref().unwrap();
    assert_eq!(body.content.len(), 2);
    assert_eq!(body.content.items().count(), 1);

    let output = document.to_xml().unwrap();
    assert!(
        output.contains("<w:p><w14:marker/><w:r><w:t>a</w:t></w:r></w:p><w14:block/>"),
        "{}",
        output
    );
}

#[test]
fn malformed_xml_is_a_parse_error_in_any_mode() {
    let xml = document("<w:p><w:r></w:p>");
    for settings in [DecodeSettings::default(), DecodeSettings::strict()] {
        let err = Document::from_xml_with(&xml, &settings).unwrap_err();
        assert!(matches!(err, WordmlError::XmlParse { .. }), "{:?}", err);
    }
}

#[test]
fn wrong_root_element_is_rejected() {
    let err = Document::from_xml(
        r#"<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#,
    )
    .unwrap_err();
    assert!(matches!(err, WordmlError::UnexpectedRoot { .. }), "{:?}", err);
}

const FUTURE: &str = r#"xmlns:x="urn:example:future""#;

fn drop_settings() -> DecodeSettings {
    DecodeSettings {
        unknown_elements: UnknownElementPolicy::Drop,
        ..DecodeSettings::default()
    }
}

/// Decodes `xml`, whose root holds an `x:future` child, and checks the child
/// is written back after `last_known` and survives a second decode. Under
/// the drop policy the child must be gone.
fn assert_future_child_kept<T>(xml: &str, name: QName, last_known: &str)
where
    T: FromXml + ToXml + PartialEq + Debug,
{
    let value: T = from_fragment(xml).unwrap();
    let output = to_fragment(&value, name).unwrap();
    let known = output.find(last_known);
    let future = output.find(":future");
    assert!(known.is_some() && future.is_some(), "{}", output);
    assert!(known < future, "{}", output);

    let again: T = from_fragment(&output).unwrap();
    assert_eq!(again, value);

    let dropped = from_fragment_with::<T>(xml, &drop_settings()).unwrap();
    assert!(dropped.issues.is_empty());
    let output = to_fragment(&dropped.value, name).unwrap();
    assert!(!output.contains("future"), "{}", output);
    assert!(output.contains(last_known), "{}", output);
}

#[test]
fn content_control_properties_keep_unknown_children() {
    assert_future_child_kept::<SdtDate>(
        &format!(
            r#"<w:date {} w:fullDate="2024-01-01T00:00:00Z"><x:future/><w:lid w:val="en-US"/></w:date>"#,
            FUTURE
        ),
        W::date(),
        "<w:lid",
    );
    assert_future_child_kept::<SdtDocPart>(
        &format!(
            r#"<w:docPartObj {}><w:docPartGallery w:val="Cover Pages"/><x:future/><w:docPartUnique/></w:docPartObj>"#,
            FUTURE
        ),
        W::name("docPartObj"),
        "<w:docPartUnique",
    );
    assert_future_child_kept::<Placeholder>(
        &format!(
            r#"<w:placeholder {}><x:future/><w:docPart w:val="DefaultPlaceholder"/></w:placeholder>"#,
            FUTURE
        ),
        W::placeholder(),
        "<w:docPart",
    );
    assert_future_child_kept::<SdtList>(
        &format!(
            r#"<w:dropDownList {} w:lastValue="a"><x:future/><w:listItem w:displayText="A" w:value="a"/></w:dropDownList>"#,
            FUTURE
        ),
        W::name("dropDownList"),
        "<w:listItem",
    );
}

#[test]
fn table_revisions_keep_unknown_children() {
    assert_future_child_kept::<TblPrChange>(
        &format!(
            r#"<w:tblPrChange {} w:id="1" w:author="Ann"><x:future/><w:tblPr><w:tblStyle w:val="Grid"/></w:tblPr></w:tblPrChange>"#,
            FUTURE
        ),
        W::tblPrChange(),
        "<w:tblPr>",
    );
    assert_future_child_kept::<TblGridChange>(
        &format!(
            r#"<w:tblGridChange {} w:id="2"><w:tblGrid><w:gridCol w:w="100"/></w:tblGrid><x:future/></w:tblGridChange>"#,
            FUTURE
        ),
        W::tblGridChange(),
        "<w:tblGrid>",
    );
    assert_future_child_kept::<TblPrExChange>(
        &format!(
            r#"<w:tblPrExChange {} w:id="3" w:author="Ann"><x:future/><w:tblPrEx><w:jc w:val="center"/></w:tblPrEx></w:tblPrExChange>"#,
            FUTURE
        ),
        W::tblPrExChange(),
        "<w:tblPrEx>",
    );
    assert_future_child_kept::<TrPrChange>(
        &format!(
            r#"<w:trPrChange {} w:id="4" w:author="Ann"><x:future/><w:trPr><w:cantSplit/></w:trPr></w:trPrChange>"#,
            FUTURE
        ),
        W::trPrChange(),
        "<w:trPr>",
    );
    assert_future_child_kept::<TcPrChange>(
        &format!(
            r#"<w:tcPrChange {} w:id="5" w:author="Ann"><x:future/><w:tcPr><w:noWrap/></w:tcPr></w:tcPrChange>"#,
            FUTURE
        ),
        W::tcPrChange(),
        "<w:tcPr>",
    );
}

#[test]
fn previous_grid_inside_a_grid_change_keeps_unknown_children() {
    let xml = format!(
        r#"<w:tblGrid {}><w:gridCol w:w="200"/><w:tblGridChange w:id="6"><w:tblGrid><w:gridCol w:w="100"/><x:future/></w:tblGrid></w:tblGridChange></w:tblGrid>"#,
        FUTURE
    );
    let grid: TblGrid = from_fragment(&xml).unwrap();
    assert!(grid.base.extensions.is_empty());
    let change = grid.tbl_grid_change.as_ref().unwrap();
    assert_eq!(change.tbl_grid.grid_cols.len(), 1);
    assert_eq!(change.tbl_grid.extensions.len(), 1);
    assert_eq!(change.tbl_grid.extensions[0].name.local_name, "future");
}
