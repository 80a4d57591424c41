//! Simple path tracer example.
//!
//! Renders three spheres resting on a large ground sphere and writes the
//! result to stdout as a plain-text PPM:
//!
//! ```text
//! cargo run --example simple_render > output.ppm
//! cargo run --example simple_render -- config.json > output.ppm
//! ```
//!
//! The optional argument is a JSON `RenderConfig`; missing fields take defaults.

use anyhow::Context;
use glint_renderer::{render, Camera, Color, ImageBuffer, Material, RenderConfig, Scene, Vec3};
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            RenderConfig::from_json_str(&json)?
        }
        None => RenderConfig::default(),
    };

    let scene = build_scene()?;
    log::info!(
        "Scene built: {} surfaces, {} materials",
        scene.len(),
        scene.material_count()
    );

    // Image plane matches the configured aspect ratio
    let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, config.aspect_ratio())?;
    let image = render(&camera, &scene, &config, &mut config.seeded_rng())?;

    let stdout = std::io::stdout();
    write_ppm(&image, &mut BufWriter::new(stdout.lock()))?;
    Ok(())
}

fn build_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.0)))?;
    let matte = scene.add_material(Material::lambertian(Color::new(0.1, 0.2, 0.5)))?;
    let metal = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2), 0.3))?;
    let glass = scene.add_material(Material::dielectric(1.5))?;

    scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)?;
    scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, matte)?;
    scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)?;
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass)?;

    Ok(scene)
}

fn write_ppm(image: &ImageBuffer, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for pixel in &image.pixels {
        writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
    }

    writer.flush()
}
