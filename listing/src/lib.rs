pub mod config;
pub mod listing;
pub mod pages;

pub use config::Config;
pub use listing::{collect_entries, render_app, write_app};
pub use pages::ListingEntry;

/// Regenerate the app file from the output dir named in `config`.
pub fn generate(config: &Config) -> anyhow::Result<usize> {
    write_app(config.output_path(), config.app_path(), &config.url_prefix)
}
