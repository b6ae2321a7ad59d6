//! rtw renderer - CPU Monte Carlo ray tracing
//!
//! Spheres with diffuse, metal and glass materials under a sky gradient,
//! seen through a pinhole camera. The output is a flat RGB byte buffer;
//! displaying or saving it is up to the caller.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rtw_renderer::{Camera, Color, HittableList, Lambertian, RenderConfig, Renderer, Sphere, Vec3};
//!
//! let mut world = HittableList::new();
//! let grey = Arc::new(Lambertian::new(Color::splat(0.5)));
//! world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey)));
//!
//! let config = RenderConfig::default();
//! let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, config.aspect_ratio());
//!
//! let mut renderer = Renderer::new(config)?;
//! renderer.set_scene(world, camera);
//! renderer.render_scene();
//! let rgb: &[u8] = renderer.pixels();
//! # Ok::<(), rtw_renderer::RenderError>(())
//! ```

mod camera;
mod config;
mod error;
mod hittable;
mod material;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use config::{CameraPose, RenderConfig, SceneConfig, MAX_DEPTH_LIMIT};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{color_to_rgb, linear_to_gamma, ray_color, sky_gradient, Renderer, T_MIN};
pub use sphere::Sphere;

/// Re-export the math types from rtw_math
pub use rtw_math::{Color, Interval, Point3, Ray, Vec3};
