pub mod codec;
pub mod error;
pub mod ohcs;
pub mod settings;
pub mod util;
pub mod wml;
pub mod xml;

pub use codec::{from_fragment, from_fragment_with, to_fragment, to_fragment_with, Decoded};
pub use error::{Result, WordmlError};
pub use ohcs::{ChildSequence, ChoiceItem, ChoiceTag, Slot};
pub use settings::{
    DecodeSettings, DecodeStrictness, EmptyElementStyle, EncodeSettings, UnknownElementPolicy,
};
pub use wml::Document;
