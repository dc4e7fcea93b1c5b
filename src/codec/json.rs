//! Object-array emitter: records as a JSON array of objects keyed by field
//! name.

use std::io::Write;

use crate::error::ConvertResult;
use crate::record::{Record, Value};
use crate::schema::Specification;

use super::Emitter;

/// Emits records as `[ {..}, {..}, .. ]` with one object per record.
///
/// Numeric fields are written bare, string fields and field names are
/// escaped through `serde_json` so arbitrary text stays valid JSON.
/// Non-finite floats (infinities, NaN) are written as `null`, since JSON
/// has no number form for them.
#[derive(Debug, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for JsonEmitter {
    fn begin(
        &mut self,
        output: &mut dyn Write,
        _config: &str,
        _spec: &Specification,
    ) -> ConvertResult<()> {
        writeln!(output, "[")?;
        Ok(())
    }

    fn emit_record(
        &mut self,
        output: &mut dyn Write,
        spec: &Specification,
        record: &Record,
    ) -> ConvertResult<()> {
        // Records after the first need a separating comma.
        if record.index() > 0 {
            writeln!(output, ",")?;
        }
        writeln!(output, "{{")?;

        let last = spec.field_count().saturating_sub(1);
        for (position, (field, value)) in spec.fields().iter().zip(record.values()).enumerate() {
            write!(output, "    {}: ", encode_text(field.name()))?;
            match value {
                Value::Int64(v) => write!(output, "{}", v)?,
                // JSON has no representation for non-finite numbers.
                Value::Float64(v) if !v.is_finite() => write!(output, "null")?,
                Value::Float64(v) => write!(output, "{}", v)?,
                Value::Text(v) => write!(output, "{}", encode_text(v))?,
            }
            if position < last {
                writeln!(output, ",")?;
            } else {
                writeln!(output)?;
            }
        }

        write!(output, "}}")?;
        Ok(())
    }

    fn end(&mut self, output: &mut dyn Write, _spec: &Specification) -> ConvertResult<()> {
        writeln!(output)?;
        writeln!(output, "]")?;
        Ok(())
    }
}

/// JSON-encode a text value, quotes included.
fn encode_text(text: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}
