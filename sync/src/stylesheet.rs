use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::plan;

/// Minified from `static/reader.css` by the build script.
pub const READER_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/reader.css"));

const STYLESHEET_NAME: &str = "calibreHtmlOutBasicCss.css";

/// `<folder>/<base>_files/calibreHtmlOutBasicCss.css`
pub fn stylesheet_path(folder: impl AsRef<Path>, base_name: &str) -> PathBuf {
    folder
        .as_ref()
        .join(format!("{base_name}_files"))
        .join(STYLESHEET_NAME)
}

/// Append the reader rules to the generated stylesheet, if there is one.
///
/// Returns `Ok(false)` when the folder has no stylesheet.
pub fn patch(folder: impl AsRef<Path>, base_name: &str) -> anyhow::Result<bool> {
    let path = stylesheet_path(folder, base_name);

    if !plan::exists(&path) {
        log::debug!("no stylesheet at {}", path.display());
        return Ok(false);
    }

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open stylesheet: {}", path.display()))?;

    write!(file, "\n{READER_CSS}\n")
        .with_context(|| format!("failed to append to stylesheet: {}", path.display()))?;

    log::info!("patched stylesheet: {}", path.display());

    Ok(true)
}
