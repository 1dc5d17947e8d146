//! Command-line driver for the JavaEL-to-DMN translator (spec §6.3).
//!
//! Not part of the translation core — this crate's only job is argument
//! parsing, file I/O, and turning a [`javael_compiler::CompileError`] into a
//! process exit code.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Translates a JavaEL boolean/relational expression into a DMN document.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// JavaEL expression to translate (ignored if `--file` is given).
    #[clap(value_parser)]
    expression: Option<String>,

    /// Read the expression from a file instead of the positional argument.
    #[clap(long, value_parser)]
    file: Option<PathBuf>,

    /// Directory the translated `<object-id>.xml` is written into.
    #[clap(short, long, value_parser, default_value = ".")]
    out_dir: PathBuf,

    /// Print a complexity summary and the output path.
    #[clap(short, long)]
    verbose: bool,

    /// Prefix used for every generated element id, for reproducible output.
    #[clap(long, default_value = "javael")]
    id_prefix: String,

    /// Alias for `--id-prefix`, read second if both are given.
    #[clap(long)]
    seed: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let expression = match (&args.file, &args.expression) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(expression)) => expression.clone(),
        (None, None) => {
            println!("No expression provided. Use --help for usage information.");
            return Ok(());
        }
    };

    let id_prefix = args.seed.as_deref().unwrap_or(&args.id_prefix);
    commands::translate(expression.trim(), &args.out_dir, id_prefix, args.verbose)
}
