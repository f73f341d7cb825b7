use serde::{Deserialize, Serialize};

/// What the decoder does with a child element no catalog entry recognises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownElementPolicy {
    /// Keep the element as an opaque subtree and write it back unchanged.
    #[default]
    Preserve,
    /// Skip the element. Output loses it.
    Drop,
}

/// How far a decode error in one child element reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecodeStrictness {
    /// Skip the failing child, record a [`DecodeIssue`](crate::codec::DecodeIssue)
    /// and keep decoding its siblings.
    #[default]
    Lenient,
    /// Abort the whole decode on the first error.
    Strict,
}

/// Settings for turning a node tree into schema type nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSettings {
    pub unknown_elements: UnknownElementPolicy,
    pub strictness: DecodeStrictness,
}

impl DecodeSettings {
    pub fn strict() -> Self {
        Self {
            strictness: DecodeStrictness::Strict,
            ..Self::default()
        }
    }
}

/// How an element without child content is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyElementStyle {
    /// `<w:tab/>` for every element without content.
    #[default]
    SelfClosing,
    /// `<w:tab></w:tab>` for every element without content.
    ExplicitClose,
    /// Explicit close except for `tblGridCol`, `trHeight` and `vMerge`,
    /// matching output of older writers byte for byte.
    Legacy,
}

/// Settings for writing schema type nodes as XML text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeSettings {
    /// Emit the `<?xml ... standalone="yes"?>` prolog before a document.
    /// Fragments never get one.
    pub xml_declaration: bool,

    pub empty_elements: EmptyElementStyle,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            empty_elements: EmptyElementStyle::SelfClosing,
        }
    }
}
