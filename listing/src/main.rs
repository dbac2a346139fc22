use anyhow::Context as _;
use envconfig::Envconfig as _;
use epub_outputs_listing::{Config, generate};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::init_from_env().context("failed to get the config")?;

    log::info!("list {}", config.output_path().display());
    let count = generate(&config)?;
    log::info!("{count} books listed");

    Ok(())
}
