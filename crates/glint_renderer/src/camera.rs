//! Camera for ray generation.

use crate::{SceneError, SceneResult};
use glint_math::{try_unit_vector, Point3, Ray, Vec3};

/// Pinhole camera spanning an image plane in world space.
///
/// Image-plane coordinates `(u, v)` run from the lower-left corner
/// `(0, 0)` to the upper-right corner `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera from its four spanning vectors.
    pub fn new(origin: Point3, lower_left_corner: Point3, horizontal: Vec3, vertical: Vec3) -> Self {
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Create a camera at `look_from` aimed at `look_at`.
    ///
    /// - `vup`: world "up" used to orient the image plane
    /// - `vfov`: vertical field of view in degrees, in (0, 180)
    /// - `aspect`: image width / height
    ///
    /// The image plane sits at unit distance along the view direction.
    pub fn look_at(
        look_from: Point3,
        look_at: Point3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
    ) -> SceneResult<Self> {
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(SceneError::DegenerateCamera(format!(
                "vertical field of view must lie in (0, 180) degrees, got {vfov}"
            )));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(SceneError::DegenerateCamera(format!(
                "aspect ratio must be finite and positive, got {aspect}"
            )));
        }

        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect * half_height;

        // Camera basis
        let w = try_unit_vector(look_from - look_at)?;
        let u = try_unit_vector(vup.cross(w)).map_err(|_| {
            SceneError::DegenerateCamera(format!("up vector {vup} is parallel to the view direction"))
        })?;
        let v = w.cross(u);

        Ok(Self {
            origin: look_from,
            lower_left_corner: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        })
    }

    /// Generate the ray through image-plane coordinates `(u, v)`.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    /// A 4:2 image plane at z = -1, viewed from the origin.
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::new(-2.0, -1.0, -1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::MathError;

    #[test]
    fn test_default_camera_corners() {
        let camera = Camera::default();

        assert_eq!(camera.get_ray(0.0, 0.0).direction(), Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(camera.get_ray(1.0, 1.0).direction(), Vec3::new(2.0, 1.0, -1.0));
        assert_eq!(camera.get_ray(0.5, 0.5).direction(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(camera.get_ray(0.5, 0.5).origin(), Vec3::ZERO);
    }

    #[test]
    fn test_rays_start_at_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(origin, Vec3::new(0.0, 1.0, 2.0), Vec3::X, Vec3::Y);

        let ray = camera.get_ray(0.25, 0.75);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), Vec3::new(-0.75, -0.25, -1.0));
    }

    #[test]
    fn test_look_at_matches_default() {
        // 90 degree vfov gives half height 1; aspect 2 gives half width 2
        let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 2.0).unwrap();
        let reference = Camera::default();

        for (u, v) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.2, 0.9)] {
            let a = camera.get_ray(u, v).direction();
            let b = reference.get_ray(u, v).direction();
            assert!((a - b).length() < 1e-5, "({u}, {v}): {a} vs {b}");
        }
    }

    #[test]
    fn test_look_at_center_ray_points_at_target() {
        let from = Vec3::new(13.0, 2.0, 3.0);
        let camera = Camera::look_at(from, Vec3::ZERO, Vec3::Y, 20.0, 1.5).unwrap();

        let dir = camera.get_ray(0.5, 0.5).direction().normalize();
        assert!((dir - (-from).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_look_at_follows_config_aspect() {
        let config = crate::RenderConfig::default().with_resolution(300, 100);
        let camera =
            Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, config.aspect_ratio()).unwrap();

        let ratio = camera.horizontal.length() / camera.vertical.length();
        assert!((ratio - 3.0).abs() < 1e-5);
        assert!((camera.vertical.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_look_at_rejects_degenerate_setups() {
        assert_eq!(
            Camera::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y, 90.0, 1.0),
            Err(SceneError::Math(MathError::DegenerateVector(Vec3::ZERO)))
        );
        assert!(matches!(
            Camera::look_at(Vec3::ZERO, Vec3::NEG_Y, Vec3::Y, 90.0, 1.0),
            Err(SceneError::DegenerateCamera(_))
        ));
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 0.0, 1.0).is_err());
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 180.0, 1.0).is_err());
        assert!(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 60.0, 0.0).is_err());
    }
}
