//! # harness-embed
//!
//! Regenerates `harness.ml` from `harness.js`, embedding the JavaScript test
//! harness as an OCaml string so the interpreter can inject it without
//! reading it from disk.

pub mod embed;
pub mod error;
pub mod paths;

pub use embed::{EmbedReport, Freshness, check, embed};
pub use error::EmbedError;
pub use paths::HarnessPaths;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
