//! Math types shared by the tracer: vectors, rays, intervals and the
//! random sampling helpers used by scattering.

// Re-export glam's vector type; everything else stays behind our own names
pub use glam::Vec3;

mod interval;
mod ray;
pub mod sampling;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{degrees_to_radians, near_zero, reflect, refract};

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB color. Components are unbounded above until tone mapping.
pub type Color = Vec3;
