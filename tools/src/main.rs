use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::CodecLimits;
use schema::Registry;
use tools::{decode_object_json, format_decode_pretty, inspect_object, InspectReport};

#[derive(Parser)]
#[command(
    name = "tlcodec-tools",
    version,
    about = "tlcodec inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect an encoded object's structure and sizes.
    Inspect {
        /// Path to the encoded object bytes.
        object_file: PathBuf,
        /// Schema JSON listing the registered constructors.
        #[arg(long)]
        schema: PathBuf,
    },
    /// Decode an encoded object into structured JSON.
    Decode {
        /// Path to the encoded object bytes.
        object_file: PathBuf,
        /// Schema JSON listing the registered constructors.
        #[arg(long)]
        schema: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Print the 64-bit fingerprint of a schema JSON file.
    SchemaHash {
        /// Schema JSON listing the registered constructors.
        schema: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            object_file,
            schema,
        } => {
            let registry = load_registry(&schema).context("load schema")?;
            let bytes = fs::read(&object_file)
                .with_context(|| format!("read object {}", object_file.display()))?;
            let report = inspect_object(&bytes, &registry, &CodecLimits::default())?;
            print_inspect_report(&report);
        }
        Command::Decode {
            object_file,
            schema,
            format,
        } => {
            let registry = load_registry(&schema).context("load schema")?;
            let bytes = fs::read(&object_file)
                .with_context(|| format!("read object {}", object_file.display()))?;
            let output = decode_object_json(&bytes, &registry, &CodecLimits::default())?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output));
                }
            }
        }
        Command::SchemaHash { schema } => {
            let registry = load_registry(&schema).context("load schema")?;
            println!("0x{:016x}", schema::registry_hash(&registry));
        }
    }
    Ok(())
}

fn load_registry(path: &PathBuf) -> Result<Registry> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))?;
    let defs: Vec<schema::ConstructorDef> =
        serde_json::from_str(&contents).context("parse schema json")?;
    Registry::from_defs(defs).context("validate schema")
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "constructor: {} ({}) {} bytes",
        report.constructor, report.id, report.byte_len
    );
    println!("fields:");
    for field in &report.fields {
        println!("  {}: {} = {}", field.name, field.type_name, field.summary);
    }
}
