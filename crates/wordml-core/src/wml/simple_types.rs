//! Enumerated attribute values (`ST_*` simple types).

use crate::codec::simple::simple_type_enum;

simple_type_enum! {
    /// `ST_TblWidth`, the unit of a table measurement.
    pub enum TblWidthType default Auto {
        Nil = "nil",
        Pct = "pct",
        Dxa = "dxa",
        Auto = "auto",
    }
}

simple_type_enum! {
    /// `ST_HeightRule`.
    pub enum HeightRule default Auto {
        Auto = "auto",
        Exact = "exact",
        AtLeast = "atLeast",
    }
}

simple_type_enum! {
    /// `ST_Merge`, used by horizontal and vertical cell merges.
    pub enum Merge default Continue {
        Continue = "continue",
        Restart = "restart",
    }
}

simple_type_enum! {
    /// `ST_TblOverlap`.
    pub enum TblOverlapValue default Overlap {
        Never = "never",
        Overlap = "overlap",
    }
}

simple_type_enum! {
    pub enum TblLayoutType {
        Fixed = "fixed",
        Autofit = "autofit",
    }
}

simple_type_enum! {
    /// `ST_JcTable`.
    pub enum JcTableValue {
        Center = "center",
        End = "end",
        Left = "left",
        Right = "right",
        Start = "start",
    }
}

simple_type_enum! {
    /// `ST_VerticalJc`.
    pub enum VerticalJcValue {
        Top = "top",
        Center = "center",
        Both = "both",
        Bottom = "bottom",
    }
}

simple_type_enum! {
    pub enum ProofErrType default SpellStart {
        SpellStart = "spellStart",
        SpellEnd = "spellEnd",
        GramStart = "gramStart",
        GramEnd = "gramEnd",
    }
}

simple_type_enum! {
    pub enum DisplacedByCustomXml {
        Next = "next",
        Prev = "prev",
    }
}

simple_type_enum! {
    /// `ST_EdGrp`, the editor group a permission range applies to.
    pub enum EdGrp {
        None = "none",
        Everyone = "everyone",
        Administrators = "administrators",
        Contributors = "contributors",
        Editors = "editors",
        Owners = "owners",
        Current = "current",
    }
}

simple_type_enum! {
    pub enum BrType {
        Page = "page",
        Column = "column",
        TextWrapping = "textWrapping",
    }
}

simple_type_enum! {
    pub enum BrClear {
        None = "none",
        Left = "left",
        Right = "right",
        All = "all",
    }
}

simple_type_enum! {
    /// `ST_Lock`, content control locking.
    pub enum LockType {
        SdtLocked = "sdtLocked",
        ContentLocked = "contentLocked",
        Unlocked = "unlocked",
        SdtContentLocked = "sdtContentLocked",
    }
}

simple_type_enum! {
    /// `ST_AnnotationVMerge`, vertical merge state in a cell merge revision.
    pub enum AnnotationVMerge {
        Cont = "cont",
        Rest = "rest",
    }
}

simple_type_enum! {
    /// Value of `xml:space`.
    pub enum XmlSpace {
        Default = "default",
        Preserve = "preserve",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::SimpleType;

    #[test]
    fn schema_defaults() {
        assert_eq!(TblWidthType::default(), TblWidthType::Auto);
        assert_eq!(HeightRule::default(), HeightRule::Auto);
        assert_eq!(Merge::default(), Merge::Continue);
        assert_eq!(TblOverlapValue::default(), TblOverlapValue::Overlap);
    }

    #[test]
    fn lexical_forms_are_case_sensitive() {
        assert_eq!(HeightRule::parse_value("atLeast"), Some(HeightRule::AtLeast));
        assert_eq!(HeightRule::parse_value("atleast"), None);
        assert_eq!(LockType::SdtContentLocked.as_str(), "sdtContentLocked");
    }

    #[test]
    fn every_value_round_trips_through_its_lexical_form() {
        for value in EdGrp::ALL {
            assert_eq!(value.as_str().parse::<EdGrp>().unwrap(), *value);
        }
        for value in TblWidthType::ALL {
            assert_eq!(TblWidthType::parse_value(&value.format_value()), Some(*value));
        }
    }

    #[test]
    fn error_lists_the_accepted_values() {
        let err = "sideways".parse::<TblWidthType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'sideways' is not a valid value: expected one of nil pct dxa auto"
        );
    }
}
