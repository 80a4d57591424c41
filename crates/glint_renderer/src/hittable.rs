//! Hittable trait and HitRecord for ray-object intersection.

use crate::{MaterialId, Sphere};
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit outward surface normal
    pub normal: Vec3,
    /// Whether the ray arrived from outside the surface
    pub front_face: bool,
    /// Material at the intersection point, resolved through the scene
    pub material: MaterialId,
}

impl HitRecord {
    /// Build a record for a hit at `t` along `ray`.
    ///
    /// `outward_normal` must be unit length. It is stored as-is; materials
    /// that care about entry versus exit inspect `front_face` or the sign of
    /// `dot(ray.direction, normal)` themselves.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: MaterialId) -> Self {
        Self {
            t,
            p: ray.at(t),
            normal: outward_normal,
            front_face: ray.direction().dot(outward_normal) < 0.0,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Every kind of surface a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
}

impl Surface {
    /// Material handle attached to this surface.
    pub fn material(&self) -> MaterialId {
        match self {
            Surface::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl Hittable for Surface {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}
