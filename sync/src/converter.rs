use std::{ffi::OsStr, path::Path, process::Command};

use anyhow::Context as _;

/// The external tools that turn a source document into an output folder.
pub trait Converter {
    /// Convert `source` into the zip archive at `archive`.
    fn convert(&self, source: &Path, archive: &Path) -> anyhow::Result<()>;

    /// Extract `archive` into `destination`, overwriting existing files.
    fn extract(&self, archive: &Path, destination: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct ExternalTools {
    pub convert_program: String,
    pub extract_program: String,
}

impl ExternalTools {
    pub fn new(convert_program: impl Into<String>, extract_program: impl Into<String>) -> Self {
        Self {
            convert_program: convert_program.into(),
            extract_program: extract_program.into(),
        }
    }
}

impl Converter for ExternalTools {
    fn convert(&self, source: &Path, archive: &Path) -> anyhow::Result<()> {
        log::info!("convert {} -> {}", source.display(), archive.display());
        run(&self.convert_program, [source.as_os_str(), archive.as_os_str()])
    }

    fn extract(&self, archive: &Path, destination: &Path) -> anyhow::Result<()> {
        log::info!("extract {} -> {}", archive.display(), destination.display());
        run(
            &self.extract_program,
            [
                OsStr::new("-o"),
                archive.as_os_str(),
                OsStr::new("-d"),
                destination.as_os_str(),
            ],
        )
    }
}

/// Run `program` to completion; a non-zero exit is an error.
fn run<'a>(program: &str, args: impl IntoIterator<Item = &'a OsStr>) -> anyhow::Result<()> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run `{program}`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("`{}` failed with {}: {}", program, output.status, stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(line) = stdout.lines().last() {
        log::debug!("{program}: {}", line.trim());
    }

    Ok(())
}
