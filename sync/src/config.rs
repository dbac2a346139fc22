use std::path::PathBuf;

use envconfig::Envconfig;

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    /// Project root, every other path is resolved against it.
    #[envconfig(from = "EPUB_SYNC_ROOT", default = ".")]
    pub root: PathBuf,
    /// Directory holding the source documents.
    #[envconfig(from = "EPUB_SYNC_SOURCE_DIR", default = "fixtures")]
    pub source_dir: PathBuf,
    /// Directory holding one generated folder per source document.
    #[envconfig(from = "EPUB_SYNC_OUTPUT_DIR", default = "public/outputs")]
    pub output_dir: PathBuf,
    /// Extension of the source documents, without the dot.
    #[envconfig(from = "EPUB_SYNC_EXTENSION", default = "epub")]
    pub extension: String,
    #[envconfig(from = "EPUB_SYNC_CONVERT_PROGRAM", default = "ebook-convert")]
    pub convert_program: String,
    #[envconfig(from = "EPUB_SYNC_EXTRACT_PROGRAM", default = "unzip")]
    pub extract_program: String,
    /// Append the reader rules to the generated stylesheet after extraction.
    #[envconfig(from = "EPUB_SYNC_PATCH_STYLESHEET", default = "true")]
    pub patch_stylesheet: bool,
}

impl Config {
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();

        assert_eq!(config.source_path(), PathBuf::from("./fixtures"));
        assert_eq!(config.output_path(), PathBuf::from("./public/outputs"));
        assert_eq!(config.extension, "epub");
        assert_eq!(config.convert_program, "ebook-convert");
        assert_eq!(config.extract_program, "unzip");
        assert!(config.patch_stylesheet);
    }

    #[test]
    fn absolute_dirs_ignore_root() {
        let env: HashMap<String, String> = [
            ("EPUB_SYNC_ROOT", "/project"),
            ("EPUB_SYNC_OUTPUT_DIR", "/srv/outputs"),
            ("EPUB_SYNC_PATCH_STYLESHEET", "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::init_from_hashmap(&env).unwrap();

        assert_eq!(config.source_path(), PathBuf::from("/project/fixtures"));
        assert_eq!(config.output_path(), PathBuf::from("/srv/outputs"));
        assert!(!config.patch_stylesheet);
    }
}
