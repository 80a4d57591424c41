//! Glint - CPU path tracing kernel.
//!
//! A Monte Carlo path tracer for scenes made of spheres with diffuse,
//! metallic and dielectric materials. The crate turns a [`Scene`], a
//! [`Camera`] and a [`RenderConfig`] into an [`ImageBuffer`] of 8-bit RGB
//! pixels; writing that buffer anywhere is left to the caller.
//!
//! # Example
//!
//! ```
//! use glint_renderer::{render, Camera, Color, Material, RenderConfig, Scene, Vec3};
//!
//! let mut scene = Scene::new();
//! let grey = scene.add_material(Material::lambertian(Color::splat(0.5))).unwrap();
//! scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, grey).unwrap();
//!
//! let config = RenderConfig::default().with_resolution(8, 4).with_quality(2, 10);
//! let image = render(&Camera::default(), &scene, &config, &mut config.seeded_rng()).unwrap();
//! assert_eq!(image.pixels.len(), 32);
//! ```

mod camera;
mod config;
mod hittable;
mod material;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::Camera;
pub use config::{ConfigError, ConfigResult, RenderConfig, DEFAULT_MAX_DEPTH};
pub use hittable::{HitRecord, Hittable, Surface};
pub use material::{
    reflect, refract, schlick, Dielectric, Lambertian, Material, Metal, Scatter, ScatterResult,
};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    Rgb8, T_MIN,
};
pub use sampling::{gen_f32, random_in_unit_sphere};
pub use scene::{MaterialId, Scene, SceneError, SceneResult, SurfaceId};
pub use sphere::Sphere;

/// Re-export vector and ray types from glint_math
pub use glint_math::{Color, Interval, MathError, Point3, Ray, Vec3};
