//! Per-file conversion pipeline: read, parse, generate, write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use sidegen::Suite;

/// Convert one `.side` file, returning the path of the generated class.
///
/// The output file is `<ClassName>.java` in `out_dir`, where the class name
/// is the suite name with whitespace stripped. The write is atomic: lines
/// are generated into a temp file in the target directory and persisted
/// only after the whole suite translated, so a failing suite never leaves a
/// partial `.java` behind.
pub fn convert_file(input: &Path, out_dir: &Path) -> CliResult<PathBuf> {
    let raw = fs::read_to_string(input)?;

    let suite = Suite::from_json(&raw).map_err(|e| CliError::convert(input, e))?;
    let lines = sidegen::generate(&suite).map_err(|e| CliError::convert(input, e))?;
    let class_name = suite
        .class_name()
        .map_err(|e| CliError::convert(input, e))?;
    debug!(suite = %suite.name, tests = suite.tests.len(), "suite translated");

    let out_path = out_dir.join(format!("{class_name}.java"));
    let mut tmp = NamedTempFile::new_in(out_dir)?;
    for line in &lines {
        writeln!(tmp, "{line}")?;
    }
    tmp.persist(&out_path).map_err(|e| e.error)?;

    info!(path = %out_path.display(), "generated");
    Ok(out_path)
}
