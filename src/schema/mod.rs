//! Record schema: ordered field names and types plus the separator and
//! escape bytes used by delimited codecs.

use serde::Serialize;

use crate::error::{ConvertError, ConvertResult};

/// Data type of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Int64,
    Float64,
    String,
}

impl FieldType {
    /// Resolve a field type from its textual name.
    ///
    /// Matching is case-sensitive: `"string"`/`"str"`, `"int"`/`"integer"`,
    /// `"double"`/`"float"`. Anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" | "str" => Some(FieldType::String),
            "int" | "integer" => Some(FieldType::Int64),
            "double" | "float" => Some(FieldType::Float64),
            _ => None,
        }
    }

    /// Canonical name, for diagnostics and usage output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int64 => "int",
            FieldType::Float64 => "double",
            FieldType::String => "string",
        }
    }
}

/// Name and type of one field in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    name: String,
    field_type: FieldType,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Immutable description of a record shape.
///
/// A `Specification` is constructed once per conversion run and shared by
/// reference with every ingester, emitter, and record involved in that run.
/// Field order is fixed at construction and matches the field order of
/// ingested and emitted records.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    fields: Vec<Field>,
    separator: u8,
    escape: u8,
}

impl Specification {
    /// Build a specification from `(name, type-name)` pairs plus the
    /// separator and escape bytes used by delimited codecs.
    ///
    /// An escape byte of `0` disables escaping. An unrecognized type name
    /// fails construction with [`ConvertError::UnknownFieldType`]; no
    /// half-built specification is ever returned.
    pub fn new<N, T>(fields: &[(N, T)], separator: u8, escape: u8) -> ConvertResult<Self>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let mut resolved = Vec::with_capacity(fields.len());
        for (name, type_name) in fields {
            let field_type = FieldType::from_name(type_name.as_ref()).ok_or_else(|| {
                ConvertError::UnknownFieldType {
                    field: name.as_ref().to_string(),
                    type_name: type_name.as_ref().to_string(),
                }
            })?;
            resolved.push(Field {
                name: name.as_ref().to_string(),
                field_type,
            });
        }

        Ok(Self {
            fields: resolved,
            separator,
            escape,
        })
    }

    /// Field specifications, in record order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Escape byte; `0` means escaping is disabled.
    pub fn escape(&self) -> u8 {
        self.escape
    }
}
