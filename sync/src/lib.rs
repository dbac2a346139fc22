pub mod config;
pub mod converter;
pub mod plan;
pub mod reconciler;
pub mod source;
pub mod stylesheet;

pub use config::Config;
pub use converter::{Converter, ExternalTools};
pub use plan::SyncPlan;
pub use reconciler::{Reconciler, SyncReport};

/// Make `<output>` hold exactly one folder per source document, using the
/// external tools named in `config`.
pub fn sync(config: &Config) -> anyhow::Result<SyncReport> {
    Reconciler::from_config(config).run()
}
