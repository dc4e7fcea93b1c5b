//! Delimited-text codec: one record per line, fields split by the schema's
//! separator byte, escape-aware.

use std::io::{BufRead, Write};

use crate::error::ConvertResult;
use crate::record::{Record, Value};
use crate::schema::Specification;
use crate::tokenizer::tokenize_line;

use super::{Emitter, Ingestion};

/// Reads delimited text lines and coerces them into records.
///
/// Lines that tokenize to zero tokens (empty lines) are skipped as noise
/// rather than treated as records. String quoting is not supported; the
/// only structure is the separator and escape bytes from the schema.
#[derive(Debug, Default)]
pub struct DelimitedIngester {
    tokens: Vec<String>,
}

impl DelimitedIngester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next line, stripped of its `\n` / `\r\n` terminator, or
    /// `None` at end of input.
    fn read_line(&mut self, input: &mut dyn BufRead) -> ConvertResult<Option<String>> {
        let mut line = String::new();
        let n = input.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl Ingestion for DelimitedIngester {
    fn ingest_record(
        &mut self,
        input: &mut dyn BufRead,
        spec: &Specification,
        record_index: usize,
    ) -> ConvertResult<Option<Record>> {
        loop {
            let line = match self.read_line(input)? {
                Some(line) => line,
                None => return Ok(None),
            };

            self.tokens.clear();
            let count = tokenize_line(&line, spec.separator(), spec.escape(), &mut self.tokens);
            if count == 0 {
                continue; // blank line
            }

            return Record::from_tokens(spec, record_index, &self.tokens).map(Some);
        }
    }
}

/// Writes records as delimited text lines.
///
/// Integers and floats are written in their shortest round-trip form. When
/// escaping is enabled by the schema, the separator and escape bytes inside
/// string fields are escaped on output, so the emitted text is readable by
/// [`DelimitedIngester`] with the same schema.
#[derive(Debug, Default)]
pub struct DelimitedEmitter;

impl DelimitedEmitter {
    pub fn new() -> Self {
        Self
    }

    fn write_text(&self, line: &mut String, text: &str, spec: &Specification) {
        if spec.escape() == 0 {
            line.push_str(text);
            return;
        }
        for ch in text.chars() {
            if ch as u32 == spec.separator() as u32 || ch as u32 == spec.escape() as u32 {
                line.push(spec.escape() as char);
            }
            line.push(ch);
        }
    }
}

impl Emitter for DelimitedEmitter {
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
        let mut line = String::new();

        for (position, value) in record.values().iter().enumerate() {
            if position > 0 {
                line.push(spec.separator() as char);
            }
            match value {
                Value::Int64(v) => line.push_str(&v.to_string()),
                Value::Float64(v) => line.push_str(&v.to_string()),
                Value::Text(v) => self.write_text(&mut line, v, spec),
            }
        }

        writeln!(output, "{}", line)?;
        Ok(())
    }

    fn end(&mut self, _output: &mut dyn Write, _spec: &Specification) -> ConvertResult<()> {
        Ok(())
    }
}
