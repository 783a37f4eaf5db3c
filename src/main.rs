//! # update-harness
//!
//! Build step that embeds the JavaScript test harness into the interpreter.
//! Reads `harness.js` from the directory holding this executable and
//! overwrites `harness.ml` next to it.
//!
//! ## Usage
//!
//! - Regenerate: `update-harness`
//! - Other files: `update-harness path/to/harness.js path/to/harness.ml`
//! - Verify only: `update-harness --check`

use clap::Parser as ClapParser;
use harness_embed::{Freshness, HarnessPaths, check, embed, fatal_error};
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for update-harness.
#[derive(ClapParser)]
#[command(name = "update-harness")]
#[command(version = PKG_VERSION)]
#[command(about = "Embed harness.js into harness.ml as an OCaml string", long_about = None)]
struct Cli {
    /// JavaScript harness to embed (default: harness.js next to this tool)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Generated OCaml file (default: harness.ml next to this tool)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Verify OUTPUT is up to date instead of writing it
    #[arg(long)]
    check: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    json: bool,
}

/// Entry point for the CLI tool.
fn main() {
    let cli = Cli::parse();

    let paths = HarnessPaths::resolve(cli.input, cli.output)
        .unwrap_or_else(|e| fatal_error(&e.to_string()));

    if cli.check {
        match check(&paths.input, &paths.output) {
            Ok(Freshness::UpToDate) => {}
            Ok(Freshness::Stale) => fatal_error(&format!(
                "'{}' is out of date with '{}'; run update-harness to regenerate it",
                paths.output.display(),
                paths.input.display()
            )),
            Err(e) => fatal_error(&e.to_string()),
        }
        return;
    }

    let report =
        embed(&paths.input, &paths.output).unwrap_or_else(|e| fatal_error(&e.to_string()));

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal_error(&format!("Error serializing report: {e}")),
        }
    }
}
