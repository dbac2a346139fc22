use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::pages::{App, ListingEntry};

const TITLE: &str = "Epub HTML";

/// Every folder in `output_dir` holding a `<folder>/<folder>.html`, sorted by name.
pub fn collect_entries(
    output_dir: impl AsRef<Path>,
    url_prefix: &str,
) -> anyhow::Result<Vec<ListingEntry>> {
    let output_dir = output_dir.as_ref();

    let mut entries = Vec::new();
    for entry in fs::read_dir(output_dir)
        .with_context(|| format!("failed to read dir: {}", output_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        let is_dir = fs::metadata(&path)
            .with_context(|| format!("failed to stat: {}", path.display()))?
            .is_dir();
        if !is_dir {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(|x| x.to_owned()) else {
            log::warn!("skip non UTF-8 folder: {}", path.display());
            continue;
        };

        // braces open a JSX expression
        if name.contains(['{', '}']) {
            log::warn!("skip folder not usable in the page source: {name}");
            continue;
        }

        if page_path(output_dir, &name).try_exists().unwrap_or(false) {
            entries.push(ListingEntry::new(name, url_prefix));
        } else {
            log::info!("no html found for {name}");
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}

/// `<output>/<name>/<name>.html`
pub fn page_path(output_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    output_dir.as_ref().join(name).join(format!("{name}.html"))
}

pub fn render_app(entries: &[ListingEntry]) -> String {
    App {
        title: TITLE,
        entries,
    }
    .source()
}

/// Overwrite `app_file` with the listing of `output_dir`.
///
/// Returns the number of listed folders.
pub fn write_app(
    output_dir: impl AsRef<Path>,
    app_file: impl AsRef<Path>,
    url_prefix: &str,
) -> anyhow::Result<usize> {
    let app_file = app_file.as_ref();

    let entries = collect_entries(output_dir, url_prefix)?;
    let content = render_app(&entries);

    write_into(app_file, content.as_bytes())
        .with_context(|| format!("failed to write: {}", app_file.display()))?;
    log::info!("{} has been generated", app_file.display());

    Ok(entries.len())
}

fn write_into(output_path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent_dir) = output_path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(output_path)?
        .write_all(content)
}
