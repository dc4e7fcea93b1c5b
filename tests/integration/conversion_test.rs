//! End-to-end conversions through the public library API.

use pretty_assertions::assert_eq;
use tabconv::{builtin_emitters, builtin_ingesters, convert_named, Specification};

fn spec() -> Specification {
    Specification::new(
        &[("name", "string"), ("score", "int"), ("ratio", "double")],
        b',',
        b'\\',
    )
    .unwrap()
}

fn convert(input: &str, emitter: &str) -> (usize, String) {
    let ingesters = builtin_ingesters();
    let emitters = builtin_emitters();
    let mut reader = input.as_bytes();
    let mut output = Vec::new();

    let count = convert_named(
        &spec(),
        &ingesters,
        "csv",
        &emitters,
        emitter,
        &mut reader,
        &mut output,
        "",
    )
    .unwrap();

    (count, String::from_utf8(output).unwrap())
}

#[test]
fn csv_to_json_produces_parseable_objects() {
    let (count, text) = convert("A1,  12 , 3.50\nB2,7,0.25\n", "json");
    assert_eq!(count, 2);

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "name": "A1", "score": 12, "ratio": 3.5 },
            { "name": "B2", "score": 7, "ratio": 0.25 },
        ])
    );
}

#[test]
fn csv_to_yaml_produces_block_mappings() {
    let (count, text) = convert("A1,12,3.5\n", "yaml");
    assert_eq!(count, 1);
    assert_eq!(text, "- name: \"A1\"\n  score: 12\n  ratio: 3.5\n\n");
}

#[test]
fn blank_lines_are_skipped_not_counted() {
    let (count, text) = convert("\nA1,12,3.5\n\nB2,7,0.25\n\n", "csv");
    assert_eq!(count, 2);
    assert_eq!(text, "A1,12,3.5\nB2,7,0.25\n");
}

#[test]
fn empty_input_still_emits_framing() {
    let (count, text) = convert("", "json");
    assert_eq!(count, 0);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn numeric_whitespace_is_normalized_strings_keep_theirs() {
    let (_, text) = convert("  A1 ,  12 ,  3.5 \n", "json");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    // The string field keeps its padding; the numeric fields were stripped.
    assert_eq!(parsed[0]["name"], "  A1 ");
    assert_eq!(parsed[0]["score"], 12);
}

#[test]
fn escaped_separators_survive_into_structured_output() {
    let (_, text) = convert("first\\, second,1,2.0\n", "json");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["name"], "first, second");
}

#[test]
fn field_count_mismatch_aborts_with_context() {
    let ingesters = builtin_ingesters();
    let emitters = builtin_emitters();
    let mut reader: &[u8] = b"A1,12,3.5\nB2,7\n";
    let mut output = Vec::new();

    let err = convert_named(
        &spec(),
        &ingesters,
        "csv",
        &emitters,
        "json",
        &mut reader,
        &mut output,
        "",
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("record 1"), "unexpected message: {}", msg);
    assert!(msg.contains("expected 3"), "unexpected message: {}", msg);
    assert!(msg.contains("found 2"), "unexpected message: {}", msg);
}

#[test]
fn hex_and_octal_integers_are_accepted() {
    let (_, text) = convert("A,0x10,1.0\nB,010,2.0\n", "json");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["score"], 16);
    assert_eq!(parsed[1]["score"], 8);
}
