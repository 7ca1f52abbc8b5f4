//! Validate a column from a JSON document and print it with its schema.
//!
//! Usage: `validate_column [FILE] [--field NAME] [--config PATH]`
//!
//! Reads the document from FILE, or stdin when FILE is omitted or `-`.
//! With `--field`, only that top-level field is validated.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Read;

use series_field::{AdapterConfig, SeriesAdapter};

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    field: Option<String>,
    config: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--field" => {
                args.field = Some(iter.next().context("--field requires a value")?);
            }
            "--config" => {
                args.config = Some(iter.next().context("--config requires a value")?);
            }
            "-h" | "--help" => {
                println!("Usage: validate_column [FILE] [--field NAME] [--config PATH]");
                std::process::exit(0);
            }
            other if args.input.is_none() => args.input = Some(other.to_string()),
            other => bail!("Unexpected argument: {}", other),
        }
    }

    Ok(args)
}

fn read_document(input: Option<&str>) -> Result<Value> {
    let content = match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {}", path))?,
    };
    serde_json::from_str(&content).context("Failed to parse document as JSON")
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => AdapterConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => AdapterConfig::default(),
    };

    let document = read_document(args.input.as_deref())?;
    let raw = match &args.field {
        Some(field) => {
            if config.name.is_empty() {
                config.name = field.clone();
            }
            document
                .get(field)
                .cloned()
                .with_context(|| format!("Field '{}' not found in document", field))?
        }
        None => document,
    };

    let adapter = SeriesAdapter::with_config(config);
    let series = match adapter.validate(raw) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("✗ Validation failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", series);
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&series.instance_schema())
            .context("Failed to render schema")?
    );

    Ok(())
}
