//! Ingestion and emission capabilities plus built-in codec registration.

use std::io::{BufRead, Write};

use crate::error::ConvertResult;
use crate::record::Record;
use crate::registry::CodecRegistry;
use crate::schema::Specification;

pub mod delimited;
pub mod json;
pub mod yaml;

/// A strategy for reading records from an input stream.
///
/// Implementations are resolved by name through a
/// [`CodecRegistry<dyn Ingestion>`] and never constructed directly by the
/// pipeline.
pub trait Ingestion {
    /// Read, tokenize, and coerce exactly one record unit.
    ///
    /// Returns `Ok(None)` when the stream is exhausted. Record units that
    /// carry no data (for line-oriented codecs: lines that tokenize to zero
    /// tokens) are skipped, not reported. A field-count mismatch or
    /// coercion failure is fatal for the whole conversion and carries the
    /// record index, field name, and offending token.
    fn ingest_record(
        &mut self,
        input: &mut dyn BufRead,
        spec: &Specification,
        record_index: usize,
    ) -> ConvertResult<Option<Record>>;
}

/// A strategy for writing records to an output stream.
///
/// The pipeline drives implementations through a strict three-phase
/// protocol:
///
/// ```text
/// emitter.begin(..)
/// emitter.emit_record(..)   // once per record, in ingestion order
/// emitter.end(..)           // even when no records were emitted
/// ```
///
/// An error from any phase stops the conversion; later phases are not
/// invoked. Emitters never close the output sink; its lifetime belongs to
/// the caller.
pub trait Emitter {
    /// Write any header or prologue the target format needs. Called exactly
    /// once, before any record. `config` is an opaque, emitter-specific
    /// option string; built-in emitters accept and ignore it.
    fn begin(
        &mut self,
        output: &mut dyn Write,
        config: &str,
        spec: &Specification,
    ) -> ConvertResult<()>;

    /// Write one record's fields in schema field order. Emitters that must
    /// treat the first record specially use `record.index()`.
    fn emit_record(
        &mut self,
        output: &mut dyn Write,
        spec: &Specification,
        record: &Record,
    ) -> ConvertResult<()>;

    /// Write any trailer or epilogue. Called exactly once, after the last
    /// record.
    fn end(&mut self, output: &mut dyn Write, spec: &Specification) -> ConvertResult<()>;
}

/// Build the ingestion registry with every codec this crate ships.
///
/// This is the composition-root replacement for static registration: the
/// registry is an owned value, callers may register additional codecs on it
/// before any lookup.
pub fn builtin_ingesters() -> CodecRegistry<dyn Ingestion> {
    let mut registry = CodecRegistry::new();
    registry.register("csv", || {
        Box::new(delimited::DelimitedIngester::new()) as Box<dyn Ingestion>
    });
    registry
}

/// Build the emission registry with every codec this crate ships.
pub fn builtin_emitters() -> CodecRegistry<dyn Emitter> {
    let mut registry = CodecRegistry::new();
    registry.register("csv", || {
        Box::new(delimited::DelimitedEmitter::new()) as Box<dyn Emitter>
    });
    registry.register("json", || Box::new(json::JsonEmitter::new()) as Box<dyn Emitter>);
    registry.register("yaml", || Box::new(yaml::YamlEmitter::new()) as Box<dyn Emitter>);
    registry
}
