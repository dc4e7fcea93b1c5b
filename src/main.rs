use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::Result;

use tabconv::cli::{self, Args};
use tabconv::{
    builtin_emitters, builtin_ingesters, pipeline, CodecRegistry, ConvertError, Emitter,
    Ingestion, Specification,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // Codec discovery happens here, at the composition root; everything
    // downstream sees only the registries.
    let ingesters = builtin_ingesters();
    let emitters = builtin_emitters();

    if args.list_codecs {
        print_codecs(&ingesters, &emitters);
        return Ok(());
    }

    match run(&args, &ingesters, &emitters) {
        Ok(count) => {
            cli::show_success(&format!("Converted {} records", count), args.quiet);
            Ok(())
        }
        Err(err) => {
            cli::show_error(&err.to_string());
            std::process::exit(1);
        }
    }
}

fn run(
    args: &Args,
    ingesters: &CodecRegistry<dyn Ingestion>,
    emitters: &CodecRegistry<dyn Emitter>,
) -> Result<usize> {
    let fields = cli::parse_field_specs(&args.field_specs)?;
    let separator = cli::parse_control_char(&args.separator, "separator")?;
    let escape = if args.no_escape {
        0
    } else {
        cli::parse_control_char(&args.escape, "escape")?
    };

    let spec = Specification::new(&fields, separator, escape)?;

    // Resolve both codec names before touching any stream.
    let mut ingester = ingesters
        .produce(&args.ingester)
        .ok_or_else(|| ConvertError::unknown_codec("ingestion", args.ingester.clone()))?;
    let mut emitter = emitters
        .produce(&args.emitter)
        .ok_or_else(|| ConvertError::unknown_codec("emission", args.emitter.clone()))?;

    let mut input = open_input(args)?;
    let mut output = open_output(args)?;

    let count = pipeline::convert_with_config(
        &spec,
        ingester.as_mut(),
        input.as_mut(),
        emitter.as_mut(),
        output.as_mut(),
        &args.emitter_config,
    )?;

    output.flush()?;
    Ok(count)
}

fn open_input(args: &Args) -> Result<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| ConvertError::io_at(e, path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(std::io::stdin()))),
    }
}

fn open_output(args: &Args) -> Result<Box<dyn Write>> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| ConvertError::io_at(e, path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn print_codecs(ingesters: &CodecRegistry<dyn Ingestion>, emitters: &CodecRegistry<dyn Emitter>) {
    println!("Available reader types:");
    for name in ingesters.names() {
        println!("  {}", name);
    }
    println!("Available output types:");
    for name in emitters.names() {
        println!("  {}", name);
    }
}
