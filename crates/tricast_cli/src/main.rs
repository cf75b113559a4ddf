// Renders the reference four-triangle scene to an image file.
// Run with: cargo run --release -- [output_path] [width] [height]

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tricast_math::{Color, Point3};
use tricast_renderer::{render, save_image, Camera, RenderConfig, Scene, Triangle};

const DEFAULT_OUTPUT: &str = "triangles.bmp";

/// Command line settings
#[derive(Debug)]
struct Args {
    output: PathBuf,
    config: RenderConfig,
}

impl Args {
    /// Parse settings from the arguments following the program name.
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let defaults = RenderConfig::default();

        let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let width = parse_dimension(args.next(), "width", defaults.width)?;
        let height = parse_dimension(args.next(), "height", defaults.height)?;

        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument '{extra}'\nusage: tricast [output_path] [width] [height]");
        }

        Ok(Self {
            output: PathBuf::from(output),
            config: RenderConfig::new(width, height),
        })
    }
}

fn parse_dimension(arg: Option<String>, name: &str, default: u32) -> Result<u32> {
    let Some(arg) = arg else {
        return Ok(default);
    };

    let value: u32 = arg
        .parse()
        .with_context(|| format!("{name} must be a positive integer, got '{arg}'"))?;
    anyhow::ensure!(value > 0, "{name} must be greater than zero");

    Ok(value)
}

/// Front triangle, a larger one behind it, a wide one partly hidden and a
/// large backdrop behind everything.
fn build_scene() -> Scene {
    let triangles = vec![
        Triangle::with_color(
            Point3::new(0.0, 1.0, -3.0),
            Point3::new(-1.0, -1.0, -3.0),
            Point3::new(1.0, -1.0, -3.0),
            Color::new(1.0, 1.0, 0.0),
        ),
        Triangle::with_color(
            Point3::new(0.0, 2.0, -4.0),
            Point3::new(-2.0, -2.0, -4.0),
            Point3::new(2.0, -2.0, -4.0),
            Color::new(0.0, 1.0, 0.0),
        ),
        Triangle::with_color(
            Point3::new(-3.0, 1.0, -7.0),
            Point3::new(-3.0, -1.0, -7.0),
            Point3::new(3.0, -1.0, -7.0),
            Color::new(1.0, 0.0, 0.0),
        ),
        Triangle::with_color(
            Point3::new(-0.5, 6.0, -8.0),
            Point3::new(-6.5, -6.0, -8.0),
            Point3::new(5.0, -6.0, -8.0),
            Color::new(0.0, 0.0, 0.7),
        ),
    ];

    triangles.into_iter().collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    log::info!("Starting Tricast");

    let scene = build_scene();
    let camera = Camera::default();
    let image = render(&camera, &scene, &args.config);

    save_image(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
