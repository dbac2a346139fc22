use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    config::Config,
    converter::{Converter, ExternalTools},
    plan::{self, SyncPlan},
    source::{self, SourceDocument},
    stylesheet,
};

pub struct Reconciler<C> {
    source_dir: PathBuf,
    output_dir: PathBuf,
    extension: String,
    patch_stylesheet: bool,
    converter: C,
}

/// What a single run changed on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Base names of the newly generated folders.
    pub converted: Vec<String>,
    pub deleted: Vec<PathBuf>,
    /// Stylesheets the reader rules were appended to.
    pub patched: Vec<PathBuf>,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.converted.is_empty() && self.deleted.is_empty()
    }
}

impl Reconciler<ExternalTools> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.source_path(),
            config.output_path(),
            ExternalTools::new(&config.convert_program, &config.extract_program),
        )
        .extension(&config.extension)
        .patch_stylesheet(config.patch_stylesheet)
    }
}

impl<C: Converter> Reconciler<C> {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        converter: C,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            extension: "epub".to_string(),
            patch_stylesheet: true,
            converter,
        }
    }

    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn patch_stylesheet(mut self, patch_stylesheet: bool) -> Self {
        self.patch_stylesheet = patch_stylesheet;
        self
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn plan(&self) -> anyhow::Result<SyncPlan> {
        let sources = source::list_source_documents(&self.source_dir, &self.extension)?;
        plan::build_plan(&sources, &self.output_dir)
    }

    pub fn run(&self) -> anyhow::Result<SyncReport> {
        if !plan::exists(&self.output_dir) {
            log::info!("create output dir: {}", self.output_dir.display());
            fs::create_dir_all(&self.output_dir).with_context(|| {
                format!("failed to create output dir: {}", self.output_dir.display())
            })?;
        }

        let plan = self.plan()?;
        log::info!("{}", plan.summary(&self.output_dir));

        let report = self.execute(&plan)?;
        log::info!("sync complete");

        Ok(report)
    }

    /// Generate every missing document, then delete every orphan.
    ///
    /// Stops at the first failure; already generated folders stay on disk and
    /// are skipped by the next run.
    pub fn execute(&self, plan: &SyncPlan) -> anyhow::Result<SyncReport> {
        let mut report = SyncReport::default();

        for doc in &plan.missing {
            if let Some(patched) = self.generate(doc)? {
                report.patched.push(patched);
            }
            report.converted.push(doc.base_name.clone());
        }

        for folder in &plan.orphans {
            remove_dir_all_force(folder)
                .with_context(|| format!("failed to delete folder: {}", folder.display()))?;
            log::info!("deleted extra folder: {}", folder.display());
            report.deleted.push(folder.clone());
        }

        Ok(report)
    }

    /// Returns the patched stylesheet, if any.
    fn generate(&self, doc: &SourceDocument) -> anyhow::Result<Option<PathBuf>> {
        let archive = self.output_dir.join(format!("{}.zip", doc.base_name));
        let folder = self.output_dir.join(&doc.base_name);

        self.converter
            .convert(&doc.path, &archive)
            .with_context(|| format!("failed to convert {}", doc.path.display()))?;
        self.converter
            .extract(&archive, &folder)
            .with_context(|| format!("failed to extract {}", archive.display()))?;

        fs::remove_file(&archive)
            .with_context(|| format!("failed to remove archive: {}", archive.display()))?;

        log::info!(
            "processed {}: created {} folder",
            doc.file_name(),
            doc.base_name
        );

        if self.patch_stylesheet && stylesheet::patch(&folder, &doc.base_name)? {
            return Ok(Some(stylesheet::stylesheet_path(&folder, &doc.base_name)));
        }

        Ok(None)
    }
}

/// `rm -rf`: a folder that is already gone is fine.
fn remove_dir_all_force(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        res => res,
    }
}
