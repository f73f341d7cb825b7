use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordmlError {
    #[error("XML parsing error at {location}: {message}")]
    XmlParse { message: String, location: String },

    #[error("XML serialization error: {0}")]
    XmlWrite(String),

    #[error("Invalid value '{value}' for attribute '{attribute}' on {element}: expected {expected}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        expected: &'static str,
    },

    #[error("Type mismatch: slot holds {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("No '{tag}' slot at index {index}")]
    SlotNotFound { tag: String, index: usize },

    #[error("Unexpected root element {found}, expected {expected}")]
    UnexpectedRoot { expected: String, found: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordmlError {
    /// Errors raised while reading one element's own content.
    ///
    /// Lenient decoding absorbs these at child granularity; everything else
    /// always propagates.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidAttribute { .. })
    }
}

pub type Result<T> = std::result::Result<T, WordmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        let err = WordmlError::XmlParse {
            message: "unexpected end".to_string(),
            location: "line 3".to_string(),
        };
        assert_eq!(err.to_string(), "XML parsing error at line 3: unexpected end");
    }

    #[test]
    fn invalid_attribute_names_element_and_attribute() {
        let err = WordmlError::InvalidAttribute {
            element: "document/body/tbl/tblPr/tblW".to_string(),
            attribute: "type".to_string(),
            value: "bogus".to_string(),
            expected: "one of nil, pct, dxa, auto",
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'bogus' for attribute 'type' on document/body/tbl/tblPr/tblW: expected one of nil, pct, dxa, auto"
        );
        assert!(err.is_decode_error());
    }

    #[test]
    fn type_mismatch_is_not_a_decode_error() {
        let err = WordmlError::TypeMismatch {
            expected: "Paragraph",
            found: "Table",
        };
        assert_eq!(err.to_string(), "Type mismatch: slot holds Paragraph, got Table");
        assert!(!err.is_decode_error());
    }
}
