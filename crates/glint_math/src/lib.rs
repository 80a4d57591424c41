// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod error;
mod interval;
mod ray;
mod vector;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{try_unit_vector, unit_vector};

/// RGB color, one linear channel per component.
pub type Color = Vec3;

/// A position in world space.
pub type Point3 = Vec3;
