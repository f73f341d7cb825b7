use crate::codec::DecodeContext;
use crate::error::Result;
use crate::xml::{QName, XName, XmlElement, XmlSink};
use std::collections::HashMap;
use std::fmt;

/// What a choice tag stands for: the element name written for it and the
/// name of the value type stored under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: QName,
    /// Value type as written in the catalog, possibly path-qualified.
    pub type_path: &'static str,
}

impl CatalogEntry {
    /// Last path segment of the value type, e.g. `Bookmark`.
    pub fn type_name(&self) -> &'static str {
        let path = self.type_path;
        path.rsplit("::").next().unwrap_or(path).trim()
    }
}

/// Discriminator of one choice group.
///
/// Implementations are generated by [`choice_group!`](crate::choice_group);
/// the catalog is a constant table indexed by the tag.
pub trait ChoiceTag: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn entry(self) -> &'static CatalogEntry;

    /// Resolves an element name to its tag. Both the local name and the
    /// namespace must match.
    fn lookup(name: &XName) -> Option<Self>;

    fn name(self) -> QName {
        self.entry().name
    }
}

/// Value stored in one slot of a [`ChildSequence`](super::ChildSequence).
///
/// The variant carries the tag, so a slot can never disagree with its value.
pub trait ChoiceItem: Clone + fmt::Debug + Sized {
    type Tag: ChoiceTag;

    fn tag(&self) -> Self::Tag;

    /// Fresh default value of the type the catalog assigns to `tag`.
    fn new_default(tag: Self::Tag) -> Self;

    fn decode(tag: Self::Tag, el: XmlElement<'_>, ctx: &mut DecodeContext) -> Result<Self>;

    fn encode(&self, out: &mut XmlSink<'_>) -> Result<()>;

    fn type_name(&self) -> &'static str {
        self.tag().entry().type_name()
    }
}

/// Local-name index used by generated `lookup` implementations.
pub fn build_index<T: ChoiceTag>(all: &[T]) -> HashMap<&'static str, Vec<T>> {
    let mut index: HashMap<&'static str, Vec<T>> = HashMap::with_capacity(all.len());
    for &tag in all {
        index.entry(tag.entry().name.local_name).or_default().push(tag);
    }
    index
}

/// Generates a choice group: a tag enum with its catalog, and an item enum
/// holding one variant per tag.
///
/// ```ignore
/// choice_group! {
///     pub enum BlockContent / BlockContentTag {
///         Paragraph => (W::NS, "p"): Paragraph,
///         Table => (W::NS, "tbl"): Table,
///     }
/// }
/// ```
///
/// `with run_markup` appends the range, proofing, permission, revision and
/// math entries every run-level content model shares.
#[macro_export]
macro_rules! choice_group {
    (
        $(#[$meta:meta])*
        $vis:vis enum $item:ident / $tag:ident with run_markup { $($body:tt)* }
    ) => {
        $crate::choice_group! {
            $(#[$meta])*
            $vis enum $item / $tag {
                $($body)*
                BookmarkStart => ($crate::xml::W::NS, "bookmarkStart"): $crate::wml::Bookmark,
                BookmarkEnd => ($crate::xml::W::NS, "bookmarkEnd"): $crate::wml::MarkupRange,
                MoveFromRangeStart => ($crate::xml::W::NS, "moveFromRangeStart"): $crate::wml::MoveBookmark,
                MoveFromRangeEnd => ($crate::xml::W::NS, "moveFromRangeEnd"): $crate::wml::MarkupRange,
                MoveToRangeStart => ($crate::xml::W::NS, "moveToRangeStart"): $crate::wml::MoveBookmark,
                MoveToRangeEnd => ($crate::xml::W::NS, "moveToRangeEnd"): $crate::wml::MarkupRange,
                CommentRangeStart => ($crate::xml::W::NS, "commentRangeStart"): $crate::wml::MarkupRange,
                CommentRangeEnd => ($crate::xml::W::NS, "commentRangeEnd"): $crate::wml::MarkupRange,
                CustomXmlInsRangeStart => ($crate::xml::W::NS, "customXmlInsRangeStart"): $crate::wml::TrackChange,
                CustomXmlInsRangeEnd => ($crate::xml::W::NS, "customXmlInsRangeEnd"): $crate::wml::Markup,
                CustomXmlDelRangeStart => ($crate::xml::W::NS, "customXmlDelRangeStart"): $crate::wml::TrackChange,
                CustomXmlDelRangeEnd => ($crate::xml::W::NS, "customXmlDelRangeEnd"): $crate::wml::Markup,
                CustomXmlMoveFromRangeStart => ($crate::xml::W::NS, "customXmlMoveFromRangeStart"): $crate::wml::TrackChange,
                CustomXmlMoveFromRangeEnd => ($crate::xml::W::NS, "customXmlMoveFromRangeEnd"): $crate::wml::Markup,
                CustomXmlMoveToRangeStart => ($crate::xml::W::NS, "customXmlMoveToRangeStart"): $crate::wml::TrackChange,
                CustomXmlMoveToRangeEnd => ($crate::xml::W::NS, "customXmlMoveToRangeEnd"): $crate::wml::Markup,
                ProofErr => ($crate::xml::W::NS, "proofErr"): $crate::wml::ProofErr,
                PermStart => ($crate::xml::W::NS, "permStart"): $crate::wml::PermStart,
                PermEnd => ($crate::xml::W::NS, "permEnd"): $crate::wml::Perm,
                Ins => ($crate::xml::W::NS, "ins"): $crate::wml::RunTrackChange,
                Del => ($crate::xml::W::NS, "del"): $crate::wml::RunTrackChange,
                MoveFrom => ($crate::xml::W::NS, "moveFrom"): $crate::wml::RunTrackChange,
                MoveTo => ($crate::xml::W::NS, "moveTo"): $crate::wml::RunTrackChange,
                OMathPara => ($crate::xml::M::NS, "oMathPara"): $crate::xml::Opaque,
                OMath => ($crate::xml::M::NS, "oMath"): $crate::xml::Opaque,
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $item:ident / $tag:ident {
            $( $variant:ident => ($ns:expr, $local:literal): $ty:ty ),+ $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $tag {
            $( $variant ),+
        }

        impl $tag {
            const ENTRIES: &'static [$crate::ohcs::CatalogEntry] = &[
                $( $crate::ohcs::CatalogEntry {
                    name: $crate::xml::QName::new($ns, $local),
                    type_path: stringify!($ty),
                } ),+
            ];
        }

        impl $crate::ohcs::ChoiceTag for $tag {
            const ALL: &'static [Self] = &[ $( $tag::$variant ),+ ];

            fn entry(self) -> &'static $crate::ohcs::CatalogEntry {
                &$tag::ENTRIES[self as usize]
            }

            fn lookup(name: &$crate::xml::XName) -> Option<Self> {
                static INDEX: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, Vec<$tag>>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $crate::ohcs::catalog::build_index(<$tag as $crate::ohcs::ChoiceTag>::ALL)
                });
                INDEX
                    .get(name.local_name.as_str())?
                    .iter()
                    .copied()
                    .find(|tag| $crate::ohcs::ChoiceTag::entry(*tag).name.matches(name))
            }
        }

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $item {
            $( $variant($ty) ),+
        }

        impl $crate::ohcs::ChoiceItem for $item {
            type Tag = $tag;

            fn tag(&self) -> $tag {
                match self {
                    $( $item::$variant(_) => $tag::$variant ),+
                }
            }

            fn new_default(tag: $tag) -> Self {
                match tag {
                    $( $tag::$variant => $item::$variant(<$ty as ::std::default::Default>::default()) ),+
                }
            }

            fn decode(
                tag: $tag,
                el: $crate::xml::XmlElement<'_>,
                ctx: &mut $crate::codec::DecodeContext,
            ) -> $crate::error::Result<Self> {
                Ok(match tag {
                    $( $tag::$variant => $item::$variant(ctx.decode::<$ty>(el)?) ),+
                })
            }

            fn encode(&self, out: &mut $crate::xml::XmlSink<'_>) -> $crate::error::Result<()> {
                let name = $crate::ohcs::ChoiceTag::name($crate::ohcs::ChoiceItem::tag(self));
                match self {
                    $( $item::$variant(value) => $crate::codec::ToXml::to_xml(value, name, out) ),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wml::{BlockContent, BlockContentTag, ParagraphContentTag};
    use crate::xml::{M, W};

    #[test]
    fn entries_line_up_with_tags() {
        for &tag in BlockContentTag::ALL {
            assert_eq!(BlockContentTag::lookup(&tag.name().to_xname()), Some(tag));
        }
        assert_eq!(BlockContentTag::Paragraph.name(), W::p());
        assert_eq!(BlockContentTag::Paragraph.entry().type_name(), "Paragraph");
        assert_eq!(BlockContentTag::BookmarkStart.entry().type_name(), "Bookmark");
    }

    #[test]
    fn lookup_checks_the_namespace() {
        assert_eq!(
            ParagraphContentTag::lookup(&M::oMath().to_xname()),
            Some(ParagraphContentTag::OMath)
        );
        assert_eq!(ParagraphContentTag::lookup(&XName::new(W::NS, "oMath")), None);
        assert_eq!(ParagraphContentTag::lookup(&XName::local("p")), None);
    }

    #[test]
    fn tags_with_the_same_name_are_distinct_per_group() {
        let block = BlockContentTag::lookup(&W::bookmarkStart().to_xname()).unwrap();
        let para = ParagraphContentTag::lookup(&W::bookmarkStart().to_xname()).unwrap();
        assert_eq!(block.name(), para.name());
        assert_eq!(block.entry().type_name(), para.entry().type_name());
    }

    #[test]
    fn default_items_carry_their_tag() {
        for &tag in BlockContentTag::ALL {
            assert_eq!(BlockContent::new_default(tag).tag(), tag);
        }
    }
}
