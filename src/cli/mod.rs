//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::error::{ConvertError, ConvertResult};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "tabconv")]
#[command(about = "Convert tabular text records between formats using an explicit schema")]
#[command(version)]
pub struct Args {
    /// Field specifications as name:type pairs, in record order.
    /// Types: string/str, int/integer, double/float
    #[arg(value_name = "FIELD_SPEC", required_unless_present = "list_codecs")]
    pub field_specs: Vec<String>,

    /// Input file (default: standard input)
    #[arg(short = 'c', long)]
    pub input: Option<PathBuf>,

    /// Read records from standard input
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Output file (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ingestion codec name
    #[arg(short = 'T', long = "from", default_value = "csv")]
    pub ingester: String,

    /// Emission codec name
    #[arg(short = 't', long = "to", default_value = "json")]
    pub emitter: String,

    /// Field separator character
    #[arg(long, default_value = ",")]
    pub separator: String,

    /// Escape character
    #[arg(long, default_value = "\\")]
    pub escape: String,

    /// Disable escape handling entirely
    #[arg(long)]
    pub no_escape: bool,

    /// Opaque option string passed to the emitter's begin phase
    #[arg(long, default_value = "")]
    pub emitter_config: String,

    /// List registered codec names and exit
    #[arg(long)]
    pub list_codecs: bool,

    /// Suppress the status line
    #[arg(long)]
    pub quiet: bool,
}

/// Parse `name:type` field specifications into `(name, type-name)` pairs.
///
/// The split is on the first colon, so type names never contain one while
/// field names may not either; an empty name or missing colon is rejected.
pub fn parse_field_specs(specs: &[String]) -> ConvertResult<Vec<(String, String)>> {
    let mut fields = Vec::with_capacity(specs.len());
    for spec in specs {
        let (name, type_name) = spec
            .split_once(':')
            .ok_or_else(|| ConvertError::InvalidFieldSpec { spec: spec.clone() })?;
        if name.is_empty() || type_name.is_empty() {
            return Err(ConvertError::InvalidFieldSpec { spec: spec.clone() });
        }
        fields.push((name.to_string(), type_name.to_string()));
    }
    Ok(fields)
}

/// Parse a single-ASCII-character flag value into its byte.
pub fn parse_control_char(value: &str, flag: &str) -> anyhow::Result<u8> {
    let bytes = value.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() {
        anyhow::bail!(
            "--{} must be a single ASCII character, got '{}'",
            flag,
            value
        );
    }
    Ok(bytes[0])
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{} {}", style_mark("✓", true), message);
    }
}

/// Show an error message
pub fn show_error(message: &str) {
    eprintln!("{} {}", style_mark("✗", false), message);
}

fn style_mark(mark: &str, ok: bool) -> String {
    if should_use_color() {
        if ok {
            console::style(mark).green().to_string()
        } else {
            console::style(mark).red().to_string()
        }
    } else {
        mark.to_string()
    }
}

/// Check if output should be colored
fn should_use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
}
