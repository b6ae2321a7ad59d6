//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth bound
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma-2 correction and 8-bit quantization into an RGB buffer

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::{Camera, HitRecord, Hittable, HittableList};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rtw_math::sampling::gen_f32;
use rtw_math::{Color, Interval, Ray};
use std::time::Instant;

/// Secondary rays start slightly off the surface to avoid shadow acne.
pub const T_MIN: f32 = 0.001;

/// Linear intensities are clamped to this range before quantization.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in each material's
/// attenuation. Depth exhaustion returns black.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    if !world.hit(ray, Interval::new(T_MIN, f32::INFINITY), &mut rec) {
        return sky_gradient(ray);
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth - 1, rng)
        }
        None => Color::ZERO,
    }
}

/// Background for rays that leave the scene: white at the bottom blending
/// to sky blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
///
/// Non-positive and NaN inputs map to 0.
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |linear: f32| (256.0 * INTENSITY.clamp(linear_to_gamma(linear))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` counts from the lower-left corner of the image. Returns the
/// average of `samples_per_pixel` jittered samples. `config` must have
/// passed [`RenderConfig::validate`].
pub(crate) fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f32 + gen_f32(rng)) / (config.width - 1) as f32;
        let t = (j as f32 + gen_f32(rng)) / (config.height - 1) as f32;
        let ray = camera.get_ray(s, t);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    pixel_color * (1.0 / config.samples_per_pixel as f32)
}

/// Renders a scene snapshot into a flat RGB byte buffer.
///
/// The buffer is row-major with the top row first, 3 bytes per pixel, and
/// is fully overwritten by every [`Renderer::render_scene`] call.
pub struct Renderer {
    config: RenderConfig,
    camera: Camera,
    world: HittableList,
    pixels: Vec<u8>,
    rng: StdRng,
}

impl Renderer {
    /// Create a renderer that draws fresh randomness from the OS.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a renderer with a reproducible sample stream.
    pub fn with_seed(config: RenderConfig, seed: u64) -> RenderResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RenderConfig, rng: StdRng) -> RenderResult<Self> {
        config.validate()?;

        let pixel_count = config.width as usize * config.height as usize;
        Ok(Self {
            config,
            camera: Camera::default(),
            world: HittableList::new(),
            pixels: vec![0; pixel_count * 3],
            rng,
        })
    }

    /// Install the scene and camera used by following passes.
    ///
    /// The renderer keeps its own copy, so edits the caller makes to its
    /// list afterwards only take effect on the next `set_scene`.
    pub fn set_scene(&mut self, world: HittableList, camera: Camera) {
        log::debug!("Scene updated: {} objects", world.len());
        self.world = world;
        self.camera = camera;
    }

    pub fn update_camera(&mut self, camera: Camera) {
        log::debug!("Camera updated: {:?}", camera.pose());
        self.camera = camera;
    }

    /// Run one full render pass over every pixel.
    pub fn render_scene(&mut self) {
        let config = self.config;

        log::debug!(
            "Rendering {}x{} @ {} spp, max depth {}",
            config.width,
            config.height,
            config.samples_per_pixel,
            config.max_depth
        );
        let start = Instant::now();

        let width = config.width as usize;
        for j in 0..config.height {
            // Sample rows count upward from the bottom; buffer rows go down
            let row = (config.height - 1 - j) as usize;
            for i in 0..config.width {
                let color = render_pixel(&self.camera, &self.world, i, j, &config, &mut self.rng);
                let index = (row * width + i as usize) * 3;
                self.pixels[index..index + 3].copy_from_slice(&color_to_rgb(color));
            }
        }

        log::debug!("Render pass finished in {:?}", start.elapsed());
    }

    /// The RGB buffer from the last pass (zeroed before the first).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &HittableList {
        &self.world
    }
}
