//! Renders the built-in scene as a P3 image on stdout.
//!
//! Scanline progress goes to stderr. Set `RUST_LOG=info` for timing.

use anyhow::{Context, Result};
use rtw_renderer::{render, PpmWriter, RenderConfig, Scene};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Keep stderr to the progress lines unless asked otherwise
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = RenderConfig::default();
    let scene = Scene::three_spheres(config.aspect_ratio);
    let mut rng = config.rng();

    let stdout = io::stdout();
    let mut out = PpmWriter::new(BufWriter::new(stdout.lock()));
    let mut progress = io::stderr();

    render(&scene, &config, &mut rng, &mut out, &mut progress)
        .context("Failed to render image")?;
    out.finish().context("Failed to flush image")?;

    log::info!("Image written to stdout");
    Ok(())
}
