//! The format-agnostic conversion loop gluing one ingester to one emitter.

use std::io::{BufRead, Write};

use crate::codec::{Emitter, Ingestion};
use crate::error::ConvertResult;
use crate::schema::Specification;

/// Convert every record `ingester` can read from `input` into `output`
/// through `emitter`, returning the number of records converted.
///
/// The emitter is driven as `begin`, `emit_record` once per record in
/// ingestion order, then `end`; `end` runs even when the input holds no
/// records. Any error from either side aborts immediately and no further
/// emitter phase is invoked; partial output is left as written.
pub fn convert(
    spec: &Specification,
    ingester: &mut dyn Ingestion,
    input: &mut dyn BufRead,
    emitter: &mut dyn Emitter,
    output: &mut dyn Write,
) -> ConvertResult<usize> {
    convert_with_config(spec, ingester, input, emitter, output, "")
}

/// [`convert`] with an opaque emitter option string passed to
/// [`Emitter::begin`].
pub fn convert_with_config(
    spec: &Specification,
    ingester: &mut dyn Ingestion,
    input: &mut dyn BufRead,
    emitter: &mut dyn Emitter,
    output: &mut dyn Write,
    emitter_config: &str,
) -> ConvertResult<usize> {
    emitter.begin(output, emitter_config, spec)?;

    let mut count = 0usize;
    while let Some(record) = ingester.ingest_record(input, spec, count)? {
        emitter.emit_record(output, spec, &record)?;
        count += 1;
    }

    emitter.end(output, spec)?;
    Ok(count)
}
