use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::source::SourceDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    /// Kept as-is, a name that is not UTF-8 can never match a source document.
    pub name: OsString,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// What a run has to do to make the output dir match the source dir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Source documents with no output entry yet.
    pub missing: Vec<SourceDocument>,
    /// Output folders with no source document.
    pub orphans: Vec<PathBuf>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.orphans.is_empty()
    }

    /// One log line describing the plan for `output_dir`.
    pub fn summary(&self, output_dir: &Path) -> String {
        if self.is_empty() {
            format!("{} is up to date", output_dir.display())
        } else {
            format!(
                "{} missing, {} extra in {}",
                self.missing.len(),
                self.orphans.len(),
                output_dir.display()
            )
        }
    }
}

pub fn list_output_entries(dir: impl AsRef<Path>) -> anyhow::Result<Vec<OutputEntry>> {
    let dir = dir.as_ref();

    let mut entries = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read dir: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        let name = entry.file_name();
        let is_dir = fs::metadata(&path)
            .with_context(|| format!("failed to stat: {}", path.display()))?
            .is_dir();

        entries.push(OutputEntry { name, path, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}

/// A path that cannot be accessed counts as missing.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(false)
}

pub fn build_plan(
    sources: &[SourceDocument],
    output_dir: impl AsRef<Path>,
) -> anyhow::Result<SyncPlan> {
    let output_dir = output_dir.as_ref();

    let missing = sources
        .iter()
        .filter(|doc| !exists(output_dir.join(&doc.base_name)))
        .cloned()
        .collect();

    let wanted: HashSet<&str> = sources.iter().map(|doc| doc.base_name.as_str()).collect();

    let orphans = list_output_entries(output_dir)?
        .into_iter()
        .filter(|entry| {
            entry.is_dir && !entry.name.to_str().is_some_and(|name| wanted.contains(name))
        })
        .map(|entry| entry.path)
        .collect();

    Ok(SyncPlan { missing, orphans })
}
