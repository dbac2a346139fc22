use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context as _;
use lightningcss::{
    bundler::{Bundler, FileProvider},
    printer::PrinterOptions,
    stylesheet::{MinifyOptions, ParserOptions},
};

fn main() -> anyhow::Result<()> {
    println!("cargo::rerun-if-changed=static");

    let out_dir = env::var_os("OUT_DIR").context("env var OUT_DIR not found")?;
    let cargo_manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").context("env var CARGO_MANIFEST_DIR not found")?;

    let src_css = Path::new(&cargo_manifest_dir).join("static/reader.css");
    let out_css = Path::new(&out_dir).join("reader.css");

    // delete old generated
    if out_css.exists() {
        fs::remove_file(&out_css).context("failed to remove generated reader.css")?;
    }

    build_css(&src_css, &out_css).context("failed to generate reader.css")?;

    Ok(())
}

fn build_css(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> anyhow::Result<()> {
    let fs = FileProvider::new();
    let mut bundler = Bundler::new(&fs, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(input_path.as_ref())
        .map_err(|e| anyhow::anyhow!("failed to build stylesheet: {:?}", e))?;

    stylesheet.minify(MinifyOptions::default())?;

    let res = stylesheet.to_css(PrinterOptions {
        minify: true,
        ..Default::default()
    })?;

    fs::write(output_path, res.code)?;

    Ok(())
}
