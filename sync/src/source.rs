use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

/// A source file slated for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// `fixtures/holes.epub`
    pub path: PathBuf,
    /// `holes`
    pub base_name: String,
}

impl SourceDocument {
    /// Returns `None` when `path` is not a `*.<extension>` file with a UTF-8 name.
    pub fn from_path(path: impl Into<PathBuf>, extension: &str) -> Option<Self> {
        let path = path.into();

        if path.extension().and_then(|x| x.to_str()) != Some(extension) {
            return None;
        }

        let base_name = path.file_stem()?.to_str()?.to_owned();

        Some(Self { path, base_name })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List every `*.<extension>` file directly inside `dir`, sorted by base name.
pub fn list_source_documents(
    dir: impl AsRef<Path>,
    extension: &str,
) -> anyhow::Result<Vec<SourceDocument>> {
    let dir = dir.as_ref();

    let mut docs = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read dir: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if entry.file_name().to_str().is_none() {
            log::warn!("skip non UTF-8 file name: {}", path.display());
            continue;
        }

        if let Some(doc) = SourceDocument::from_path(path, extension) {
            docs.push(doc);
        }
    }

    docs.sort_by(|a, b| a.base_name.cmp(&b.base_name));

    Ok(docs)
}
