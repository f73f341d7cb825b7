use std::borrow::Cow;
use std::fmt;

/// Attribute value with a lexical form, in the sense of an XML Schema
/// simple type.
pub trait SimpleType: Sized {
    /// Description of the accepted lexical space, used in error messages.
    const EXPECTED: &'static str;

    fn parse_value(s: &str) -> Option<Self>;

    fn format_value(&self) -> Cow<'_, str>;
}

/// A string that is not in a simple type's lexical space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid value: expected {expected}")]
pub struct UnknownValue {
    pub value: String,
    pub expected: &'static str,
}

impl SimpleType for String {
    const EXPECTED: &'static str = "a string";

    fn parse_value(s: &str) -> Option<Self> {
        Some(s.to_string())
    }

    fn format_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SimpleType for i64 {
    const EXPECTED: &'static str = "a decimal integer";

    fn parse_value(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }

    fn format_value(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl SimpleType for u64 {
    const EXPECTED: &'static str = "an unsigned decimal integer";

    fn parse_value(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }

    fn format_value(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

/// `ST_OnOff`.
impl SimpleType for bool {
    const EXPECTED: &'static str = "one of true, false, on, off, 1, 0";

    fn parse_value(s: &str) -> Option<Self> {
        match s {
            "true" | "on" | "1" => Some(true),
            "false" | "off" | "0" => Some(false),
            _ => None,
        }
    }

    fn format_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "1" } else { "0" })
    }
}

/// Binary value written as hexadecimal, such as a revision-save ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes(bytes)
    }
}

impl SimpleType for HexBytes {
    const EXPECTED: &'static str = "a hexadecimal number";

    fn parse_value(s: &str) -> Option<Self> {
        hex::decode(s.trim()).ok().map(HexBytes)
    }

    fn format_value(&self) -> Cow<'_, str> {
        Cow::Owned(hex::encode_upper(&self.0))
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_value())
    }
}

/// Declares a string-valued enumeration with its lexical forms.
///
/// Generates `as_str`, `Display`, `FromStr`, serde support keyed by the
/// lexical form, [`SimpleType`], and `Default` when a default is named.
macro_rules! simple_type_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(default $default:ident)? {
            $( $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::UnknownValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::codec::SimpleType>::parse_value(s).ok_or_else(|| {
                    $crate::codec::UnknownValue {
                        value: s.to_string(),
                        expected: <$name as $crate::codec::SimpleType>::EXPECTED,
                    }
                })
            }
        }

        impl $crate::codec::SimpleType for $name {
            const EXPECTED: &'static str = concat!("one of", $( " ", $text ),+);

            fn parse_value(s: &str) -> Option<Self> {
                match s {
                    $( $text => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn format_value(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(self.as_str())
            }
        }

        $(
            impl ::std::default::Default for $name {
                fn default() -> Self {
                    $name::$default
                }
            }
        )?
    };
}

pub(crate) use simple_type_enum;

#[cfg(test)]
mod tests {
    use super::*;

    simple_type_enum! {
        enum Shade default Light {
            Light = "light",
            Dark = "dark",
        }
    }

    #[test]
    fn on_off_accepts_all_spellings() {
        for s in ["true", "on", "1"] {
            assert_eq!(bool::parse_value(s), Some(true));
        }
        for s in ["false", "off", "0"] {
            assert_eq!(bool::parse_value(s), Some(false));
        }
        assert_eq!(bool::parse_value("yes"), None);
        assert_eq!(false.format_value(), "0");
    }

    #[test]
    fn numbers_reject_garbage() {
        assert_eq!(i64::parse_value("-42"), Some(-42));
        assert_eq!(u64::parse_value("-42"), None);
        assert_eq!(i64::parse_value("abc"), None);
    }

    #[test]
    fn hex_bytes_round_trip_in_upper_case() {
        let rsid = HexBytes::parse_value("00a1b2c3").unwrap();
        assert_eq!(rsid.as_bytes(), &[0x00, 0xA1, 0xB2, 0xC3]);
        assert_eq!(rsid.to_string(), "00A1B2C3");
        assert_eq!(HexBytes::parse_value("xyz"), None);
    }

    #[test]
    fn generated_enum_parses_and_formats() {
        assert_eq!("dark".parse::<Shade>().unwrap(), Shade::Dark);
        assert_eq!(Shade::default(), Shade::Light);
        assert_eq!(Shade::Dark.to_string(), "dark");
        assert_eq!(Shade::ALL.len(), 2);
        assert_eq!(Shade::EXPECTED, "one of light dark");

        let err = "dim".parse::<Shade>().unwrap_err();
        assert_eq!(err.value, "dim");
    }

    #[test]
    fn generated_enum_serialises_by_lexical_form() {
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"dark\"");
        let shade: Shade = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(shade, Shade::Light);
    }
}
