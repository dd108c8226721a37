use anyhow::{bail, Context, Result};
use glint_core::load_scene;
use glint_renderer::{RenderConfig, Scene};
use std::path::PathBuf;
use std::time::Instant;

const USAGE: &str = "Usage: glint <scene.json> [output.png] [--sequential]";

/// Command line options
struct Options {
    scene_path: PathBuf,
    output_path: PathBuf,
    parallel: bool,
}

impl Options {
    /// Parse arguments. Returns `None` when help was requested.
    fn parse(args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let mut positional = Vec::new();
        let mut parallel = true;

        for arg in args {
            match arg.as_str() {
                "--sequential" => parallel = false,
                "-h" | "--help" => return Ok(None),
                flag if flag.starts_with("--") => bail!("Unknown option {}\n{}", flag, USAGE),
                _ => positional.push(PathBuf::from(&arg)),
            }
        }

        let mut positional = positional.into_iter();
        let Some(scene_path) = positional.next() else {
            bail!(USAGE);
        };
        let output_path = positional.next().unwrap_or_else(|| PathBuf::from("out.png"));
        if positional.next().is_some() {
            bail!("Too many arguments\n{}", USAGE);
        }

        Ok(Some(Self {
            scene_path,
            output_path,
            parallel,
        }))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Some(options) = Options::parse(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let start = Instant::now();
    let desc = load_scene(&options.scene_path)
        .with_context(|| format!("Failed to load scene {}", options.scene_path.display()))?;
    let scene = Scene::from_description(&desc)?;
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        parallel: options.parallel,
        ..Default::default()
    };
    let (width, height) = (desc.image.width, desc.image.height);
    log::info!(
        "Rendering {}x{} ({})",
        width,
        height,
        if config.parallel { "parallel" } else { "sequential" }
    );

    let start = Instant::now();
    let image = scene.render_with(width, height, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    image
        .save_png(&options.output_path)
        .with_context(|| format!("Failed to write {}", options.output_path.display()))?;
    log::info!("Saved to {}", options.output_path.display());

    Ok(())
}
