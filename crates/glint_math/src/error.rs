//! Errors raised by fallible math helpers.

use glam::Vec3;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector {0}")]
    DegenerateVector(Vec3),
}

pub type MathResult<T> = Result<T, MathError>;
