//! Pinhole camera for ray generation.

use crate::config::CameraPose;
use rtw_math::{degrees_to_radians, Point3, Ray, Vec3};

/// Maps normalized image-plane coordinates to world-space rays.
///
/// All state is derived from a [`CameraPose`]; changing the pose rebuilds
/// the whole frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pose: CameraPose,

    // Cached values derived from the pose
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `look_from` looking at `look_at`.
    ///
    /// `vfov` is the vertical field of view in degrees.
    pub fn new(look_from: Point3, look_at: Point3, vup: Vec3, vfov: f32, aspect_ratio: f32) -> Self {
        Self::from_pose(CameraPose {
            look_from,
            look_at,
            vup,
            vfov,
            aspect_ratio,
        })
    }

    pub fn from_pose(pose: CameraPose) -> Self {
        let mut camera = Self {
            pose,
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Replace the pose and recompute the frame.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.initialize();
    }

    fn initialize(&mut self) {
        let pose = &self.pose;

        // Calculate viewport dimensions
        let theta = degrees_to_radians(pose.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = pose.aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (pose.look_from - pose.look_at).try_normalize().unwrap_or_else(|| {
            log::warn!("Camera looks at its own position, defaulting to -Z view");
            Vec3::Z
        });
        let u = pose.vup.cross(w).try_normalize().unwrap_or_else(|| {
            log::warn!("Camera up vector is parallel to the view direction");
            w.any_orthonormal_vector()
        });
        let v = w.cross(u);

        self.origin = pose.look_from;
        self.horizontal = viewport_width * u;
        self.vertical = viewport_height * v;
        self.lower_left_corner = self.origin - self.horizontal / 2.0 - self.vertical / 2.0 - w;
    }

    /// Ray through the viewport point (s, t), both in [0, 1] from the
    /// lower-left corner.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_pose(CameraPose::default())
    }
}
