//! CLI tool to convert a YAML document to JSON and an inferred JSON Schema.
//!
//! Usage:
//!   yaml-schema <input.yaml>
//!   yaml-schema <input.yaml> --emit schema --schema-url <url> -o <output.json>
//!   cat input.yaml | yaml-schema
//!
//! If no output file is specified, writes to stdout.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;
use yaml_schema_rs::try_derive;

/// Which derived text to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Json,
    Schema,
    Both,
}

/// Convert a YAML document to JSON and an inferred JSON Schema.
#[derive(Parser)]
#[command(name = "yaml-schema")]
struct Cli {
    /// YAML input file (omit or `-` for stdin)
    input: Option<String>,

    /// Value for the schema's `$schema` field (default: draft-04)
    #[arg(long, default_value = "")]
    schema_url: String,

    /// Which output to write
    #[arg(long, value_enum, default_value_t = Emit::Both)]
    emit: Emit,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log pipeline details on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let yaml_text = read_input(cli.input.as_deref())?;
    tracing::debug!(
        input = cli.input.as_deref().unwrap_or("(stdin)"),
        bytes = yaml_text.len(),
        "read YAML"
    );

    let derived = try_derive(&yaml_text, &cli.schema_url).context("Invalid YAML")?;

    let mut output = match cli.emit {
        Emit::Json => derived.json,
        Emit::Schema => derived.schema,
        Emit::Both => format!("{}\n\n{}", derived.json, derived.schema),
    };
    output.push('\n');

    match &cli.output {
        Some(out_path) => {
            if let Some(parent) = Path::new(out_path.as_str()).parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("creating output directory for '{out_path}'")
                })?;
            }
            fs::write(out_path, &output)
                .with_context(|| format!("writing output file '{out_path}'"))?;
            tracing::debug!(output = %out_path, "wrote output");
        }
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("writing output")?,
    }

    Ok(())
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading input file '{path}'"))
        }
    }
}
