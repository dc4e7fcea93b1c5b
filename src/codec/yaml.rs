//! Block-mapping emitter: one YAML mapping block per record.

use std::io::Write;

use crate::error::ConvertResult;
use crate::record::{Record, Value};
use crate::schema::Specification;

use super::Emitter;

/// Emits each record as a YAML sequence item: the first field on the `- `
/// marker, remaining fields indented beneath it, `key: value` per line.
///
/// String values are written as double-quoted scalars with JSON-compatible
/// escaping, which YAML accepts verbatim.
#[derive(Debug, Default)]
pub struct YamlEmitter;

impl YamlEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for YamlEmitter {
    fn begin(
        &mut self,
        _output: &mut dyn Write,
        _config: &str,
        _spec: &Specification,
    ) -> ConvertResult<()> {
        Ok(())
    }

    fn emit_record(
        &mut self,
        output: &mut dyn Write,
        spec: &Specification,
        record: &Record,
    ) -> ConvertResult<()> {
        for (position, (field, value)) in spec.fields().iter().zip(record.values()).enumerate() {
            let marker = if position == 0 { "- " } else { "  " };
            write!(output, "{}{}: ", marker, field.name())?;
            match value {
                Value::Int64(v) => writeln!(output, "{}", v)?,
                Value::Float64(v) => writeln!(output, "{}", v)?,
                Value::Text(v) => writeln!(output, "{}", encode_text(v))?,
            }
        }
        writeln!(output)?;
        Ok(())
    }

    fn end(&mut self, _output: &mut dyn Write, _spec: &Specification) -> ConvertResult<()> {
        Ok(())
    }
}

/// Double-quoted YAML scalar; JSON escaping is a YAML subset.
fn encode_text(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}
