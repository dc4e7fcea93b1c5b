//! Typed records built by coercing raw line tokens against a schema.

use crate::error::{ConvertError, ConvertResult};
use crate::schema::{FieldType, Specification};

/// One typed field value.
///
/// The active variant always matches the schema type of the field at the
/// same position; a mismatch at a consumption site is a bug in record
/// construction, not a runtime condition to handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int64(i64),
    Float64(f64),
    Text(String),
}

/// One immutable, schema-typed row.
///
/// Built by an ingester from the tokens of a single record unit; carries
/// its 0-based ingestion index so emitters can detect the first record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    index: usize,
    values: Vec<Value>,
}

impl Record {
    /// Coerce `tokens` against `spec`, in schema field order.
    ///
    /// Fails without producing a record if the token count does not match
    /// the schema's field count, or if any token cannot be parsed as its
    /// declared numeric type. Numeric tokens have surrounding spaces and
    /// tabs stripped before parsing; string tokens are copied verbatim.
    pub fn from_tokens(
        spec: &Specification,
        index: usize,
        tokens: &[String],
    ) -> ConvertResult<Self> {
        if tokens.len() != spec.field_count() {
            return Err(ConvertError::FieldCountMismatch {
                record: index,
                expected: spec.field_count(),
                actual: tokens.len(),
            });
        }

        let mut values = Vec::with_capacity(tokens.len());
        for (field, token) in spec.fields().iter().zip(tokens) {
            let value = match field.field_type() {
                FieldType::Int64 => {
                    let stripped = strip_whitespace(token);
                    Value::Int64(parse_int_auto(stripped).ok_or_else(|| {
                        ConvertError::IntParse {
                            record: index,
                            field: field.name().to_string(),
                            token: token.clone(),
                        }
                    })?)
                }
                FieldType::Float64 => {
                    let stripped = strip_whitespace(token);
                    Value::Float64(stripped.parse::<f64>().map_err(|_| {
                        ConvertError::FloatParse {
                            record: index,
                            field: field.name().to_string(),
                            token: token.clone(),
                        }
                    })?)
                }
                FieldType::String => Value::Text(token.clone()),
            };
            values.push(value);
        }

        Ok(Self { index, values })
    }

    /// 0-based ingestion index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Field values in schema field order; same length as
    /// `Specification::field_count`.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Strip leading and trailing spaces and tabs only; other whitespace is
/// field data.
fn strip_whitespace(token: &str) -> &str {
    token.trim_matches([' ', '\t'])
}

/// Strict C-style integer parse with automatic base detection.
///
/// Accepts an optional sign, then decimal digits, `0x`/`0X` hex, or a
/// leading-zero octal form. The whole input must be consumed; trailing
/// non-numeric characters and out-of-range magnitudes yield `None`.
fn parse_int_auto(input: &str) -> Option<i64> {
    let (negative, digits) = match input.bytes().next() {
        Some(b'+') => (false, &input[1..]),
        Some(b'-') => (true, &input[1..]),
        Some(_) => (false, input),
        None => return None,
    };

    let (radix, digits) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    // Parse the magnitude wide, then apply the sign with a range check so
    // that i64::MIN still parses.
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}
