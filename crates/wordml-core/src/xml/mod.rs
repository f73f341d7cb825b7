pub mod arena;
pub mod namespaces;
pub mod node;
pub mod parser;
pub mod raw;
pub mod writer;
pub mod xname;

pub use arena::XmlDocument;
pub use namespaces::{M, MC, R, W, XML, XMLNS};
pub use node::{XmlElement, XmlNodeData};
pub use raw::{Opaque, RawElement, RawNode};
pub use writer::XmlSink;
pub use xname::{QName, XAttribute, XName};
