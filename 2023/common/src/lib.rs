use miette::*;
use std::path::{Path, PathBuf};

/// Directory holding the puzzle inputs, named `d<day>.txt`.
pub fn inputs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../inputs")
}

pub fn input_path(day: u32) -> PathBuf {
    inputs_dir().join(format!("d{day}.txt"))
}

/// Reads a file line by line, stripping line endings and trailing whitespace.
#[tracing::instrument]
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    Ok(lines(&contents))
}

fn lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
