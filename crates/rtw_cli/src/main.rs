use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use rtw_renderer::{Camera, RenderConfig, Renderer, SceneConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod ppm;
mod scene;

#[derive(Parser, Debug)]
#[command(author, version, about = "Monte Carlo ray tracer")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the demo scene to a PPM image
    Render(RenderArgs),
    /// Write the color ramp test image, without tracing any rays
    Gradient(GradientArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file with `render` and `camera` sections
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Samples per pixel
    #[arg(short, long)]
    spp: Option<u32>,
    /// Maximum bounce depth
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,
    /// Seed for a reproducible image
    #[arg(long)]
    seed: Option<u64>,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GradientArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = 256)]
    width: u32,
    /// Image height in pixels
    #[arg(long, default_value_t = 256)]
    height: u32,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Config file values (or defaults) with command line overrides applied.
    fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SceneConfig::default(),
        };

        let render = &mut config.render;
        render.width = self.width.unwrap_or(render.width);
        render.height = self.height.unwrap_or(render.height);
        render.samples_per_pixel = self.spp.unwrap_or(render.samples_per_pixel);
        render.max_depth = self.max_depth.unwrap_or(render.max_depth);

        // The viewport always matches the image shape
        config.camera.aspect_ratio = config.render.aspect_ratio();
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Render(args) => run_render(&args),
        Command::Gradient(args) => run_gradient(&args),
    }
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let SceneConfig { render, camera } = args.scene_config()?;

    let mut renderer = match args.seed {
        Some(seed) => Renderer::with_seed(render, seed),
        None => Renderer::new(render),
    }
    .context("Invalid render settings")?;

    let start = Instant::now();
    let world = scene::demo_scene();
    renderer.set_scene(world, Camera::from_pose(camera));
    log::info!("Scene built in {:?}", start.elapsed());

    log::info!(
        "Rendering {}x{} @ {} spp...",
        render.width,
        render.height,
        render.samples_per_pixel
    );
    let start = Instant::now();
    renderer.render_scene();
    log::info!("Rendered in {:?}", start.elapsed());

    write_image(args.output.as_deref(), &render, renderer.pixels())
}

fn run_gradient(args: &GradientArgs) -> Result<()> {
    ensure!(
        args.width >= 2 && args.height >= 2,
        "Image must be at least 2x2 pixels, got {}x{}",
        args.width,
        args.height
    );

    let rgb = ppm::gradient_image(args.width, args.height);
    let render = RenderConfig {
        width: args.width,
        height: args.height,
        ..Default::default()
    };
    write_image(args.output.as_deref(), &render, &rgb)
}

fn write_image(output: Option<&Path>, render: &RenderConfig, rgb: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            ppm::write_ppm(&mut writer, render.width, render.height, rgb)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            ppm::write_ppm(&mut writer, render.width, render.height, rgb)
                .context("Failed to write image to stdout")?;
            writer.flush()?;
        }
    }
    Ok(())
}
