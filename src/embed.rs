//! Embedding of the JavaScript harness as an OCaml string expression.
//!
//! Every input line becomes one quoted operand of a `^` chain bound to
//! `harness`:
//!
//! ```text
//! let harness =
//!   "first line\n" ^
//!   "second line\n"
//! ```
//!
//! Input is handled as raw bytes. Only `\` and `"` are escaped; everything
//! else is copied through untouched.

use crate::error::EmbedError;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Name the generated file binds the harness text to.
pub const BINDING: &str = "harness";

const INDENT: &[u8] = b"  ";
const SEPARATOR: &[u8] = b" ^\n";
const NEWLINE_ESCAPE: &[u8] = b"\\n";

/// Both special characters in one class, so a backslash inserted for one
/// match is never seen again by the other.
#[allow(clippy::expect_used)]
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\"]"#).expect("special character pattern is valid"));

/// Output of [`render`]: the generated file plus the operand count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: Vec<u8>,
    pub lines: usize,
}

/// Summary of a completed `embed` run, printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of input lines embedded.
    pub lines: usize,
    /// Size of the generated file in bytes.
    pub bytes: usize,
}

/// Whether an existing output matches what its input would render to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
}

/// Escape `\` as `\\` and `"` as `\"` in a single left-to-right pass.
#[must_use]
pub fn escape_line(line: &[u8]) -> Cow<'_, [u8]> {
    SPECIAL_CHARS.replace_all(line, &b"\\${0}"[..])
}

/// Drop a trailing `\n` and, if present, the `\r` before it.
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Quote one line as a concatenation operand: `  "<escaped>\n"`.
fn push_operand(out: &mut Vec<u8>, line: &[u8]) {
    out.extend_from_slice(INDENT);
    out.push(b'"');
    out.extend_from_slice(&escape_line(strip_terminator(line)));
    out.extend_from_slice(NEWLINE_ESCAPE);
    out.push(b'"');
}

/// Render a sequence of lines into the generated file.
///
/// Lines may still carry their terminator. An empty sequence renders a
/// single `""` operand so the binding stays well-formed.
///
/// # Errors
///
/// Returns the first error yielded by `lines`.
pub fn render<I, L>(lines: I) -> io::Result<Rendered>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: AsRef<[u8]>,
{
    let mut text = format!("let {BINDING} =\n").into_bytes();
    let mut count = 0usize;

    for line in lines {
        let line = line?;
        if count > 0 {
            text.extend_from_slice(SEPARATOR);
        }
        push_operand(&mut text, line.as_ref());
        count += 1;
    }

    if count == 0 {
        text.extend_from_slice(INDENT);
        text.extend_from_slice(b"\"\"");
    }
    text.push(b'\n');

    Ok(Rendered { text, lines: count })
}

/// Read `input` line by line and render it. The file is closed on return.
fn render_file(input: &Path) -> Result<Rendered, EmbedError> {
    let file = File::open(input).map_err(|e| EmbedError::read(input, e))?;
    let reader = BufReader::new(file);
    render(reader.split(b'\n')).map_err(|e| EmbedError::read(input, e))
}

/// Regenerate `output` from `input`, overwriting whatever was there.
///
/// # Errors
///
/// Returns [`EmbedError::Read`] if the input cannot be opened or read (in
/// which case `output` is left untouched) and [`EmbedError::Write`] if the
/// output cannot be written.
pub fn embed(input: &Path, output: &Path) -> Result<EmbedReport, EmbedError> {
    let rendered = render_file(input)?;
    fs::write(output, &rendered.text).map_err(|e| EmbedError::write(output, e))?;

    Ok(EmbedReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        lines: rendered.lines,
        bytes: rendered.text.len(),
    })
}

/// Compare `output` against a fresh rendering of `input` without writing.
///
/// A missing output counts as stale.
///
/// # Errors
///
/// Returns [`EmbedError::Read`] if the input cannot be read, or if the
/// output exists but cannot be read.
pub fn check(input: &Path, output: &Path) -> Result<Freshness, EmbedError> {
    let rendered = render_file(input)?;
    match fs::read(output) {
        Ok(existing) if existing == rendered.text => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Freshness::Stale),
        Err(e) => Err(EmbedError::read(output, e)),
    }
}
