//! tabconv: schema-driven conversion of tabular text records between
//! serialized formats.
//!
//! A caller supplies an immutable [`Specification`] (field names, field
//! types, separator and escape bytes), picks an ingestion and an emission
//! codec by name from a [`CodecRegistry`], and drives the streaming
//! [`pipeline::convert`] loop over an input and an output stream.

use std::io::{BufRead, Write};

pub mod cli;
pub mod codec;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod schema;
pub mod tokenizer;

// Re-export commonly used types
pub use codec::{builtin_emitters, builtin_ingesters, Emitter, Ingestion};
pub use error::{ConvertError, ConvertResult};
pub use pipeline::{convert, convert_with_config};
pub use record::{Record, Value};
pub use registry::CodecRegistry;
pub use schema::{Field, FieldType, Specification};
pub use tokenizer::tokenize_line;

/// Resolve codecs by name from the given registries and run a full
/// conversion.
///
/// Unknown names are reported as [`ConvertError::UnknownCodec`] before any
/// stream I/O is attempted.
#[allow(clippy::too_many_arguments)]
pub fn convert_named(
    spec: &Specification,
    ingesters: &CodecRegistry<dyn Ingestion>,
    ingester_name: &str,
    emitters: &CodecRegistry<dyn Emitter>,
    emitter_name: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    emitter_config: &str,
) -> ConvertResult<usize> {
    let mut ingester = ingesters
        .produce(ingester_name)
        .ok_or_else(|| ConvertError::unknown_codec("ingestion", ingester_name))?;
    let mut emitter = emitters
        .produce(emitter_name)
        .ok_or_else(|| ConvertError::unknown_codec("emission", emitter_name))?;

    convert_with_config(
        spec,
        ingester.as_mut(),
        input,
        emitter.as_mut(),
        output,
        emitter_config,
    )
}
