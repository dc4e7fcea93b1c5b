//! Registry behavior through the public API, including third-party codec
//! registration without touching core dispatch code.

use std::io::Write;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tabconv::{
    builtin_emitters, builtin_ingesters, convert_named, ConvertError, ConvertResult, Emitter,
    Record, Specification, Value,
};

#[test]
fn unknown_names_resolve_to_absent() {
    assert!(builtin_ingesters().produce("nonexistent").is_none());
    assert!(builtin_emitters().produce("nonexistent").is_none());
}

#[test]
fn convert_named_maps_absent_to_unknown_codec_error() {
    let spec = Specification::new(&[("id", "int")], b',', 0).unwrap();
    let mut input: &[u8] = b"1\n";
    let mut output = Vec::new();

    let err = convert_named(
        &spec,
        &builtin_ingesters(),
        "tsv",
        &builtin_emitters(),
        "json",
        &mut input,
        &mut output,
        "",
    )
    .unwrap_err();

    assert_matches!(
        err,
        ConvertError::UnknownCodec { family: "ingestion", ref name } if name == "tsv"
    );
}

/// A minimal external emitter: one line per record with values joined by
/// a pipe, no framing.
#[derive(Default)]
struct PipeEmitter;

impl Emitter for PipeEmitter {
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
        _spec: &Specification,
        record: &Record,
    ) -> ConvertResult<()> {
        let parts: Vec<String> = record
            .values()
            .iter()
            .map(|value| match value {
                Value::Int64(v) => v.to_string(),
                Value::Float64(v) => v.to_string(),
                Value::Text(v) => v.clone(),
            })
            .collect();
        writeln!(output, "{}", parts.join("|"))?;
        Ok(())
    }

    fn end(&mut self, _output: &mut dyn Write, _spec: &Specification) -> ConvertResult<()> {
        Ok(())
    }
}

#[test]
fn third_party_emitters_register_without_core_changes() {
    let spec = Specification::new(&[("name", "string"), ("score", "int")], b',', b'\\').unwrap();

    let ingesters = builtin_ingesters();
    let mut emitters = builtin_emitters();
    assert!(emitters.register("pipe", || Box::new(PipeEmitter) as Box<dyn Emitter>));
    assert_eq!(emitters.names(), vec!["csv", "json", "pipe", "yaml"]);

    let mut input: &[u8] = b"A,1\nB,2\n";
    let mut output = Vec::new();
    let count = convert_named(
        &spec,
        &ingesters,
        "csv",
        &emitters,
        "pipe",
        &mut input,
        &mut output,
        "",
    )
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(output).unwrap(), "A|1\nB|2\n");
}

#[test]
fn reregistering_a_builtin_replaces_it() {
    let mut emitters = builtin_emitters();
    emitters.register("json", || Box::new(PipeEmitter) as Box<dyn Emitter>);

    let spec = Specification::new(&[("id", "int")], b',', 0).unwrap();
    let mut input: &[u8] = b"7\n";
    let mut output = Vec::new();
    convert_named(
        &spec,
        &builtin_ingesters(),
        "csv",
        &emitters,
        "json",
        &mut input,
        &mut output,
        "",
    )
    .unwrap();

    // The replacement emitter ran, not the built-in JSON one.
    assert_eq!(String::from_utf8(output).unwrap(), "7\n");
}

#[test]
fn each_produce_call_yields_an_independent_instance() {
    let emitters = builtin_emitters();
    let spec = Specification::new(&[("id", "int")], b',', 0).unwrap();
    let record = Record::from_tokens(&spec, 0, &["1".to_string()]).unwrap();

    let mut first = emitters.produce("json").unwrap();
    let mut second = emitters.produce("json").unwrap();

    // Drive the two instances through different phases; neither sees the
    // other's state.
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    first.begin(&mut out_a, "", &spec).unwrap();
    first.emit_record(&mut out_a, &spec, &record).unwrap();
    first.end(&mut out_a, &spec).unwrap();

    second.begin(&mut out_b, "", &spec).unwrap();
    second.end(&mut out_b, &spec).unwrap();

    let a: serde_json::Value = serde_json::from_slice(&out_a).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&out_b).unwrap();
    assert_eq!(a, serde_json::json!([{ "id": 1 }]));
    assert_eq!(b, serde_json::json!([]));
}
