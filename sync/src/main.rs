use anyhow::Context as _;
use envconfig::Envconfig as _;
use epub_outputs_sync::{Config, sync};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::init_from_env().context("failed to get the config")?;

    log::info!(
        "sync {} -> {}",
        config.source_path().display(),
        config.output_path().display()
    );

    let report = sync(&config)?;

    log::info!(
        "{} converted, {} deleted, {} stylesheets patched",
        report.converted.len(),
        report.deleted.len(),
        report.patched.len()
    );

    Ok(())
}
