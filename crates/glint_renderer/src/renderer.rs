//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use crate::{gen_f32, Camera, ConfigResult, Hittable, RenderConfig, Scatter, Scene};
use bytemuck::{Pod, Zeroable};
use glint_math::{unit_vector, Color, Interval, Ray};
use rand::RngCore;
use std::time::Instant;

/// Lower bound on hit distance, keeps scattered rays from re-hitting
/// the surface they just left ("shadow acne").
pub const T_MIN: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// `depth` counts bounces taken so far. A hit at `depth >= max_depth`
/// contributes black; a miss always returns the sky.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = scene.hit(ray, Interval::from_min(T_MIN)) else {
        return sky_gradient(ray);
    };

    if depth >= max_depth {
        return Color::ZERO;
    }

    match scene.material(rec.material).scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, scene, depth + 1, max_depth, rng)
        }
        // Absorbed
        None => Color::ZERO,
    }
}

/// Vertical white-to-blue blend used for rays that escape the scene.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white.lerp(blue, a)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// An 8-bit RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Gamma-correct a linear color and quantize each channel to [0, 255].
pub fn color_to_rgb8(color: Color) -> Rgb8 {
    let unit = Interval::new(0.0, 1.0);
    let quantize = |c: f32| (255.999 * unit.clamp(linear_to_gamma(c))) as u8;
    Rgb8::new(quantize(color.x), quantize(color.y), quantize(color.z))
}

/// Render a single pixel with multi-sampling.
///
/// `i` is the column from the left, `j` the row from the bottom. Returns the
/// averaged linear color, before gamma correction. `config` must be valid
/// (see [`RenderConfig::validate`]).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    debug_assert!(config.samples_per_pixel > 0, "samples_per_pixel must be positive");
    debug_assert!(config.width > 0 && config.height > 0, "image dimensions must be positive");

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / config.width as f32;
        let v = (j as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, scene, 0, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Quantized render output, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb8::default(); width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at column `x`, row `y` counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column `x`, row `y` counted from the top.
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb8) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    /// Flat `r, g, b, r, g, b, ...` bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Render the entire scene.
///
/// Pixels are produced top row first, left to right, drawing from `rng`
/// in that order so a fixed seed reproduces the image exactly. Fails if
/// `config` does not validate.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} surfaces",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        scene.len()
    );
    if scene.is_empty() {
        log::warn!("Scene is empty, every pixel will show the background");
    }

    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);

    for (row, j) in (0..config.height).rev().enumerate() {
        for i in 0..config.width {
            let color = render_pixel(camera, scene, i, j, config, rng);
            image.set(i, row as u32, color_to_rgb8(color));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
