pub mod strings;

pub use strings::{make_valid_xml, needs_space_preserve};
