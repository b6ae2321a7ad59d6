//! Vector helpers glam does not provide: the degenerate-direction test and
//! the reflection/refraction formulas used by the materials.

use crate::Vec3;

/// Components below this magnitude count as zero for [`near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// True if every component of `v` is smaller than [`NEAR_ZERO_EPSILON`] in
/// magnitude.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with normal `n` (Snell's law).
///
/// `etai_over_etat` is the ratio of refractive indices on the incoming and
/// transmitted side. The cosine is clamped to 1 so rounding cannot push the
/// perpendicular term past the square root's domain.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
