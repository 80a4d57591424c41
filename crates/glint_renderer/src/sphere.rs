//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    MaterialId, SceneError, SceneResult,
};
use glint_math::{Interval, Point3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Point3, radius: f32, material: MaterialId) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidCenter(center));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // |O + tD - C|^2 = r^2
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, then the far one
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material))
    }
}
