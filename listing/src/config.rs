use std::path::PathBuf;

use envconfig::Envconfig;

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    /// Project root, every other path is resolved against it.
    #[envconfig(from = "EPUB_LISTING_ROOT", default = ".")]
    pub root: PathBuf,
    /// Directory holding one generated folder per book.
    #[envconfig(from = "EPUB_LISTING_OUTPUT_DIR", default = "public/outputs")]
    pub output_dir: PathBuf,
    /// Page source file that is overwritten with the listing.
    #[envconfig(from = "EPUB_LISTING_APP_FILE", default = "src/App.tsx")]
    pub app_file: PathBuf,
    /// URL the output dir is served under.
    #[envconfig(from = "EPUB_LISTING_URL_PREFIX", default = "/outputs")]
    pub url_prefix: String,
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn app_path(&self) -> PathBuf {
        self.root.join(&self.app_file)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();

        assert_eq!(config.output_path(), PathBuf::from("./public/outputs"));
        assert_eq!(config.app_path(), PathBuf::from("./src/App.tsx"));
        assert_eq!(config.url_prefix, "/outputs");
    }

    #[test]
    fn root_override() {
        let env = HashMap::from([("EPUB_LISTING_ROOT".to_string(), "/site".to_string())]);

        let config = Config::init_from_hashmap(&env).unwrap();

        assert_eq!(config.output_path(), PathBuf::from("/site/public/outputs"));
        assert_eq!(config.app_path(), PathBuf::from("/site/src/App.tsx"));
    }
}
