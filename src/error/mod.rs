//! Error types for tabular record conversion

use std::path::PathBuf;

/// Errors produced while building a schema, coercing records, resolving
/// codecs, or driving a conversion.
///
/// Every variant is terminal for the conversion run that raised it; nothing
/// in the library downgrades an error and continues.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown field type '{type_name}' for field '{field}'")]
    UnknownFieldType { field: String, type_name: String },

    #[error("record {record}: expected {expected} fields, found {actual}")]
    FieldCountMismatch {
        record: usize,
        expected: usize,
        actual: usize,
    },

    #[error("record {record}: field '{field}': '{token}' is not an integer")]
    IntParse {
        record: usize,
        field: String,
        token: String,
    },

    #[error("record {record}: field '{field}': '{token}' is not a floating-point value")]
    FloatParse {
        record: usize,
        field: String,
        token: String,
    },

    #[error("unknown {family} codec '{name}'")]
    UnknownCodec {
        family: &'static str,
        name: String,
    },

    #[error("invalid field specification '{spec}': expected 'name:type'")]
    InvalidFieldSpec { spec: String },

    #[error("IO error{}: {source}", display_path(.path))]
    Io {
        #[source]
        source: std::io::Error,
        path: Option<PathBuf>,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }
}

impl ConvertError {
    /// Attach a file path to an IO error for better diagnostics.
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }

    pub fn unknown_codec(family: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownCodec {
            family,
            name: name.into(),
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
