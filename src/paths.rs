//! Location of the harness files.
//!
//! Both files live next to the tool itself, so the generator works the same
//! no matter which directory it is invoked from.

use crate::error::EmbedError;
use std::env;
use std::path::{Path, PathBuf};

/// JavaScript harness that gets embedded.
pub const HARNESS_JS: &str = "harness.js";
/// Generated OCaml source holding the embedded harness.
pub const HARNESS_ML: &str = "harness.ml";

/// Directory containing the running executable, with symlinks resolved.
///
/// # Errors
///
/// Returns [`EmbedError::ToolDir`] if the executable path cannot be
/// determined or canonicalized.
pub fn tool_dir() -> Result<PathBuf, EmbedError> {
    let exe = env::current_exe()
        .and_then(std::fs::canonicalize)
        .map_err(EmbedError::ToolDir)?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Input and output path pair for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl HarnessPaths {
    /// The fixed file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        HarnessPaths {
            input: dir.join(HARNESS_JS),
            output: dir.join(HARNESS_ML),
        }
    }

    /// Use the given paths, falling back to the tool directory for any that
    /// are missing. The tool directory is only looked up when needed.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::ToolDir`] if a default is needed and the tool
    /// directory cannot be determined.
    pub fn resolve(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self, EmbedError> {
        Self::resolve_with(input, output, tool_dir)
    }

    fn resolve_with(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        locate: impl FnOnce() -> Result<PathBuf, EmbedError>,
    ) -> Result<Self, EmbedError> {
        match (input, output) {
            (Some(input), Some(output)) => Ok(HarnessPaths { input, output }),
            (input, output) => {
                let defaults = Self::in_dir(&locate()?);
                Ok(HarnessPaths {
                    input: input.unwrap_or(defaults.input),
                    output: output.unwrap_or(defaults.output),
                })
            }
        }
    }
}
