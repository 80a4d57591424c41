//! Materials and the scatter contract.

use crate::{gen_f32, random_in_unit_sphere, HitRecord, SceneError, SceneResult};
use glint_math::{unit_vector, Color, Ray, Vec3};
use rand::RngCore;

/// Outcome of a successful scatter event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel throughput multiplier
    pub attenuation: Color,
    /// Continuation ray
    pub scattered: Ray,
}

/// Capability shared by every material.
pub trait Scatter {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` when the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Scatter for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough. Clamped to [0, 1].
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Scatter for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Rays perturbed below the surface are absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = vacuum, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }
}

impl Scatter for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let direction = ray_in.direction();
        let d_dot_n = direction.dot(rec.normal);
        let cos_incident = d_dot_n / direction.length();

        // Leaving the medium when travelling along the outward normal
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            (-rec.normal, self.ior, self.ior * cos_incident)
        } else {
            (rec.normal, 1.0 / self.ior, -cos_incident)
        };

        // Total internal reflection falls through to the reflected branch
        let scattered_dir = match refract(direction, outward_normal, ni_over_nt) {
            Some(refracted) if gen_f32(rng) >= schlick(cosine, self.ior) => refracted,
            _ => reflect(unit_vector(direction), rec.normal),
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, scattered_dir),
        })
    }
}

/// Every material a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian(Lambertian::new(albedo))
    }

    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal(Metal::new(albedo, fuzz))
    }

    pub fn dielectric(ior: f32) -> Self {
        Material::Dielectric(Dielectric::new(ior))
    }

    /// Check parameter ranges: albedo channels in [0, 1], finite fuzz,
    /// finite positive index of refraction.
    pub fn validate(&self) -> SceneResult<()> {
        match self {
            Material::Lambertian(m) => validate_albedo(m.albedo),
            Material::Metal(m) => {
                validate_albedo(m.albedo)?;
                if m.fuzz.is_nan() {
                    return Err(SceneError::InvalidMaterial(format!(
                        "metal fuzz must be a number, got {}",
                        m.fuzz
                    )));
                }
                Ok(())
            }
            Material::Dielectric(m) => {
                if !(m.ior > 0.0 && m.ior.is_finite()) {
                    return Err(SceneError::InvalidMaterial(format!(
                        "index of refraction must be finite and positive, got {}",
                        m.ior
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Scatter for Material {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

fn validate_albedo(albedo: Color) -> SceneResult<()> {
    if albedo.is_finite() && albedo.cmpge(Vec3::ZERO).all() && albedo.cmple(Vec3::ONE).all() {
        Ok(())
    } else {
        Err(SceneError::InvalidMaterial(format!(
            "albedo channels must lie in [0, 1], got {albedo}"
        )))
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with unit normal `n` facing the incoming side.
///
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = unit_vector(v);
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant < 0.0 {
        return None;
    }
    Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
}

/// Schlick's approximation for reflectance.
#[inline]
pub fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
