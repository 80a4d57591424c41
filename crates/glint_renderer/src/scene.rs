//! Scene arena: owns every material and surface, resolves nearest hits.
//!
//! Surfaces reference materials through `MaterialId` handles rather than
//! pointers. Handles are plain indices and stay valid for the lifetime of
//! the scene because the arena only grows (or is cleared as a whole).

use crate::{HitRecord, Hittable, Material, Sphere, Surface};
use glint_math::{Interval, MathError, Point3, Ray, Vec3};
use thiserror::Error;

/// Errors raised while building a scene or camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("sphere center must be finite, got {0}")]
    InvalidCenter(Vec3),

    #[error("unknown material handle {0:?}")]
    UnknownMaterial(MaterialId),

    #[error("invalid material parameter: {0}")]
    InvalidMaterial(String),

    #[error("degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Handle to a material owned by a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// Handle to a surface owned by a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

/// A collection of surfaces and the materials they reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: Vec<Material>,
    surfaces: Vec<Surface>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a material.
    pub fn add_material(&mut self, material: impl Into<Material>) -> SceneResult<MaterialId> {
        let material = material.into();
        material.validate()?;

        let id = MaterialId(self.materials.len());
        log::debug!("Added material {:?}: {:?}", id, material);
        self.materials.push(material);
        Ok(id)
    }

    /// Add a sphere that uses an already registered material.
    pub fn add_sphere(
        &mut self,
        center: Point3,
        radius: f32,
        material: MaterialId,
    ) -> SceneResult<SurfaceId> {
        let sphere = Sphere::new(center, radius, material)?;
        self.add_surface(sphere)
    }

    /// Add any surface whose material handle belongs to this scene.
    pub fn add_surface(&mut self, surface: impl Into<Surface>) -> SceneResult<SurfaceId> {
        let surface = surface.into();
        let material = surface.material();
        if material.0 >= self.materials.len() {
            return Err(SceneError::UnknownMaterial(material));
        }

        let id = SurfaceId(self.surfaces.len());
        log::debug!("Added surface {:?}: {:?}", id, surface);
        self.surfaces.push(surface);
        Ok(id)
    }

    /// Look up a material.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this scene.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    /// Number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Remove every surface and material. Previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.surfaces.clear();
        self.materials.clear();
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for surface in &self.surfaces {
            // Later surfaces can only win by being strictly closer
            if let Some(rec) = surface.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
