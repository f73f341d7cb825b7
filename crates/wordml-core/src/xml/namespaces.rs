#![allow(non_snake_case)]

use super::xname::QName;

pub mod W {
    use super::QName;
    pub const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    pub const fn name(local_name: &'static str) -> QName { QName::new(NS, local_name) }

    // elements
    pub const fn document() -> QName { name("document") }
    pub const fn body() -> QName { name("body") }
    pub const fn background() -> QName { name("background") }
    pub const fn sectPr() -> QName { name("sectPr") }
    pub const fn p() -> QName { name("p") }
    pub const fn pPr() -> QName { name("pPr") }
    pub const fn r() -> QName { name("r") }
    pub const fn rPr() -> QName { name("rPr") }
    pub const fn t() -> QName { name("t") }
    pub const fn hyperlink() -> QName { name("hyperlink") }
    pub const fn tbl() -> QName { name("tbl") }
    pub const fn tblPr() -> QName { name("tblPr") }
    pub const fn tblPrChange() -> QName { name("tblPrChange") }
    pub const fn tblStyle() -> QName { name("tblStyle") }
    pub const fn tblpPr() -> QName { name("tblpPr") }
    pub const fn tblOverlap() -> QName { name("tblOverlap") }
    pub const fn bidiVisual() -> QName { name("bidiVisual") }
    pub const fn tblStyleRowBandSize() -> QName { name("tblStyleRowBandSize") }
    pub const fn tblStyleColBandSize() -> QName { name("tblStyleColBandSize") }
    pub const fn tblW() -> QName { name("tblW") }
    pub const fn jc() -> QName { name("jc") }
    pub const fn tblCellSpacing() -> QName { name("tblCellSpacing") }
    pub const fn tblInd() -> QName { name("tblInd") }
    pub const fn tblBorders() -> QName { name("tblBorders") }
    pub const fn shd() -> QName { name("shd") }
    pub const fn tblLayout() -> QName { name("tblLayout") }
    pub const fn tblCellMar() -> QName { name("tblCellMar") }
    pub const fn tblLook() -> QName { name("tblLook") }
    pub const fn tblCaption() -> QName { name("tblCaption") }
    pub const fn tblDescription() -> QName { name("tblDescription") }
    pub const fn tblGrid() -> QName { name("tblGrid") }
    pub const fn gridCol() -> QName { name("gridCol") }
    pub const fn tblGridChange() -> QName { name("tblGridChange") }
    pub const fn tblPrEx() -> QName { name("tblPrEx") }
    pub const fn tblPrExChange() -> QName { name("tblPrExChange") }
    pub const fn tr() -> QName { name("tr") }
    pub const fn trPr() -> QName { name("trPr") }
    pub const fn trPrChange() -> QName { name("trPrChange") }
    pub const fn trHeight() -> QName { name("trHeight") }
    pub const fn ins() -> QName { name("ins") }
    pub const fn del() -> QName { name("del") }
    pub const fn tc() -> QName { name("tc") }
    pub const fn tcPr() -> QName { name("tcPr") }
    pub const fn tcPrChange() -> QName { name("tcPrChange") }
    pub const fn cnfStyle() -> QName { name("cnfStyle") }
    pub const fn tcW() -> QName { name("tcW") }
    pub const fn gridSpan() -> QName { name("gridSpan") }
    pub const fn hMerge() -> QName { name("hMerge") }
    pub const fn vMerge() -> QName { name("vMerge") }
    pub const fn tcBorders() -> QName { name("tcBorders") }
    pub const fn noWrap() -> QName { name("noWrap") }
    pub const fn tcMar() -> QName { name("tcMar") }
    pub const fn textDirection() -> QName { name("textDirection") }
    pub const fn tcFitText() -> QName { name("tcFitText") }
    pub const fn vAlign() -> QName { name("vAlign") }
    pub const fn hideMark() -> QName { name("hideMark") }
    pub const fn cellIns() -> QName { name("cellIns") }
    pub const fn cellDel() -> QName { name("cellDel") }
    pub const fn cellMerge() -> QName { name("cellMerge") }
    pub const fn sdt() -> QName { name("sdt") }
    pub const fn sdtPr() -> QName { name("sdtPr") }
    pub const fn sdtEndPr() -> QName { name("sdtEndPr") }
    pub const fn sdtContent() -> QName { name("sdtContent") }
    pub const fn listItem() -> QName { name("listItem") }
    pub const fn dateFormat() -> QName { name("dateFormat") }
    pub const fn lid() -> QName { name("lid") }
    pub const fn storeMappedDataAs() -> QName { name("storeMappedDataAs") }
    pub const fn calendar() -> QName { name("calendar") }
    pub const fn docPartGallery() -> QName { name("docPartGallery") }
    pub const fn docPartCategory() -> QName { name("docPartCategory") }
    pub const fn docPartUnique() -> QName { name("docPartUnique") }
    pub const fn docPart() -> QName { name("docPart") }
    pub const fn customXml() -> QName { name("customXml") }
    pub const fn customXmlPr() -> QName { name("customXmlPr") }
    pub const fn placeholder() -> QName { name("placeholder") }
    pub const fn attr() -> QName { name("attr") }
    pub const fn bookmarkStart() -> QName { name("bookmarkStart") }
    pub const fn permStart() -> QName { name("permStart") }
    pub const fn bookmarkEnd() -> QName { name("bookmarkEnd") }

    // attributes
    pub const fn id() -> QName { name("id") }
    pub const fn author() -> QName { name("author") }
    pub const fn date() -> QName { name("date") }
    pub const fn displacedByCustomXml() -> QName { name("displacedByCustomXml") }
    pub const fn colFirst() -> QName { name("colFirst") }
    pub const fn colLast() -> QName { name("colLast") }
    pub const fn edGrp() -> QName { name("edGrp") }
    pub const fn ed() -> QName { name("ed") }
    pub const fn r#type() -> QName { name("type") }
    pub const fn val() -> QName { name("val") }
    pub const fn w() -> QName { name("w") }
    pub const fn hRule() -> QName { name("hRule") }
    pub const fn clear() -> QName { name("clear") }
    pub const fn uri() -> QName { name("uri") }
    pub const fn element() -> QName { name("element") }
    pub const fn multiLine() -> QName { name("multiLine") }
    pub const fn lastValue() -> QName { name("lastValue") }
    pub const fn displayText() -> QName { name("displayText") }
    pub const fn value() -> QName { name("value") }
    pub const fn fullDate() -> QName { name("fullDate") }
    pub const fn prefixMappings() -> QName { name("prefixMappings") }
    pub const fn xpath() -> QName { name("xpath") }
    pub const fn storeItemID() -> QName { name("storeItemID") }
    pub const fn vMergeOrig() -> QName { name("vMergeOrig") }
    pub const fn tgtFrame() -> QName { name("tgtFrame") }
    pub const fn tooltip() -> QName { name("tooltip") }
    pub const fn docLocation() -> QName { name("docLocation") }
    pub const fn history() -> QName { name("history") }
    pub const fn anchor() -> QName { name("anchor") }
    // rsid attributes (revision session IDs)
    pub const fn rsidR() -> QName { name("rsidR") }
    pub const fn rsidRPr() -> QName { name("rsidRPr") }
    pub const fn rsidDel() -> QName { name("rsidDel") }
    pub const fn rsidP() -> QName { name("rsidP") }
    pub const fn rsidRDefault() -> QName { name("rsidRDefault") }
    pub const fn rsidTr() -> QName { name("rsidTr") }
}

pub mod M {
    use super::QName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

    pub const fn oMath() -> QName { QName::new(NS, "oMath") }
    pub const fn oMathPara() -> QName { QName::new(NS, "oMathPara") }
}

pub mod R {
    use super::QName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub const fn id() -> QName { QName::new(NS, "id") }
}

pub mod MC {
    pub const NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
}

pub mod XML {
    use super::QName;
    pub const NS: &str = "http://www.w3.org/XML/1998/namespace";

    pub const fn space() -> QName { QName::new(NS, "space") }
}

pub mod XMLNS {
    pub const NS: &str = "http://www.w3.org/2000/xmlns/";
}

/// Namespaces declared on every root element the encoder writes.
pub const ROOT_NAMESPACES: &[(&str, &str)] = &[("w", W::NS), ("r", R::NS), ("m", M::NS)];

/// Habitual prefix of a namespace in WordprocessingML parts.
pub fn conventional_prefix(namespace: &str) -> Option<&'static str> {
    let prefix = match namespace {
        // WordprocessingML
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main" => "w",
        "http://schemas.microsoft.com/office/word/2010/wordml" => "w14",
        "http://schemas.microsoft.com/office/word/2012/wordml" => "w15",
        "http://schemas.microsoft.com/office/word/2010/wordprocessingShape" => "wps",
        "http://schemas.microsoft.com/office/word/2010/wordprocessingGroup" => "wpg",
        "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing" => "wp14",
        "http://schemas.microsoft.com/office/word/2010/wordprocessingCanvas" => "wpc",
        "http://schemas.microsoft.com/office/word/2010/wordprocessingInk" => "wpi",
        // DrawingML
        "http://schemas.openxmlformats.org/drawingml/2006/main" => "a",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" => "wp",
        "http://schemas.openxmlformats.org/drawingml/2006/picture" => "pic",
        "http://schemas.openxmlformats.org/drawingml/2006/chart" => "c",
        // Office Math
        "http://schemas.openxmlformats.org/officeDocument/2006/math" => "m",
        // Relationships
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships" => "r",
        // Markup Compatibility
        "http://schemas.openxmlformats.org/markup-compatibility/2006" => "mc",
        // VML
        "urn:schemas-microsoft-com:vml" => "v",
        "urn:schemas-microsoft-com:office:office" => "o",
        "urn:schemas-microsoft-com:office:word" => "w10",
        // xml namespace for xml:space, xml:lang, etc.
        "http://www.w3.org/XML/1998/namespace" => "xml",
        _ => return None,
    };
    Some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_namespace_creates_valid_names() {
        let p = W::p();
        assert_eq!(p.namespace, W::NS);
        assert_eq!(p.local_name, "p");
        assert_eq!(W::r#type().local_name, "type");
    }

    #[test]
    fn math_names_live_in_math_namespace() {
        assert_eq!(M::oMath().namespace, M::NS);
        assert_ne!(M::oMath().namespace, W::NS);
    }

    #[test]
    fn conventional_prefixes() {
        assert_eq!(conventional_prefix(W::NS), Some("w"));
        assert_eq!(conventional_prefix(M::NS), Some("m"));
        assert_eq!(conventional_prefix(R::NS), Some("r"));
        assert_eq!(conventional_prefix(MC::NS), Some("mc"));
        assert_eq!(conventional_prefix("urn:unknown"), None);
    }

    #[test]
    fn root_namespaces_use_conventional_prefixes() {
        for (prefix, uri) in ROOT_NAMESPACES {
            assert_eq!(conventional_prefix(uri), Some(*prefix));
        }
    }
}
