use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::render::TextureImage;
use lumen_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

mod app;
mod scenes;

use app::DemoApp;
use scenes::SceneName;

#[derive(Parser, Debug)]
#[command(name = "lumen-demos", version, about = "Hierarchical transform demos")]
struct Cli {
    /// Scene to run.
    #[arg(value_enum, default_value_t = SceneName::Orbit)]
    scene: SceneName,

    /// Window width in logical pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Texture image for the textured scenes (PNG, JPEG, BMP or GIF).
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Log filter, env_logger syntax (falls back to RUST_LOG, then "info").
    #[arg(long)]
    log: Option<String>,

    /// Print the scene names and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for name in SceneName::value_variants() {
            println!("{}", name.cli_name());
        }
        return Ok(());
    }

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let scene = cli.scene.build();
    log::info!("starting scene {} ({})", cli.scene.cli_name(), scene.title());

    let textured = matches!(cli.scene, SceneName::Textures | SceneName::KeyboardFilters);
    let texture = textured.then(|| TextureImage::load_or_checkerboard(cli.texture.as_deref()));

    let config = RuntimeConfig {
        title: format!("lumen: {}", scene.title()),
        initial_size: LogicalSize::new(f64::from(cli.width), f64::from(cli.height)),
    };

    // Tutorial colours are written to the framebuffer as given.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, DemoApp::new(scene, texture))
}
