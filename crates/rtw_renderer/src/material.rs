//! Materials describe how a surface scatters the light arriving at it.

use crate::hittable::HitRecord;
use rand::RngCore;
use rtw_math::sampling::{random_in_unit_sphere, random_unit_vector};
use rtw_math::{near_zero, reflect, refract, Color, Ray};

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel factor applied to the light carried back along `scattered`
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials carry no per-ray state, so one instance can be shared by any
/// number of primitives.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn set_albedo(&mut self, albedo: Color) {
        self.albedo = albedo;
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough.
    ///   Clamped to [0, 1].
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn set_albedo(&mut self, albedo: Color) {
        self.albedo = albedo;
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzz can push the reflection below the surface; absorb those
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
///
/// Always refracts: there is no total internal reflection fallback and no
/// Fresnel reflectance term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = ray_in.direction().normalize();
        let refracted = refract(unit_direction, rec.normal, refraction_ratio);

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, refracted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rtw_math::Vec3;

    fn record_at<'a>(material: &'a dyn Material, normal: Vec3, front_face: bool) -> HitRecord<'a> {
        HitRecord {
            p: Vec3::new(0.0, 0.0, -0.5),
            normal,
            material,
            t: 0.5,
            front_face,
        }
    }

    #[test]
    fn test_lambertian_always_scatters_with_albedo() {
        let albedo = Color::new(0.7, 0.3, 0.3);
        let material = Lambertian::new(albedo);
        let rec = record_at(&material, Vec3::Z, true);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let result = material
                .scatter(&ray, &rec, &mut rng)
                .expect("lambertian never absorbs");
            assert_eq!(result.attenuation, albedo);
            assert_eq!(result.scattered.origin(), rec.p);
            assert!(!near_zero(result.scattered.direction()));
            // normal + unit vector never points into the surface
            assert!(result.scattered.direction().dot(rec.normal) >= 0.0);
        }
    }

    #[test]
    fn test_lambertian_set_albedo() {
        let mut material = Lambertian::new(Color::ONE);
        material.set_albedo(Color::new(0.1, 0.2, 0.3));
        assert_eq!(material.albedo(), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_metal_fuzz_clamped() {
        assert_eq!(Metal::new(Color::ONE, 1.5).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, -0.5).fuzz(), 0.0);
        assert_eq!(Metal::new(Color::ONE, 0.3).fuzz(), 0.3);
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let albedo = Color::new(0.8, 0.6, 0.2);
        let material = Metal::new(albedo, 0.0);
        let rec = record_at(&material, Vec3::Y, true);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(2.0, -2.0, 0.0));
        let mut rng = StdRng::seed_from_u64(42);

        let result = material.scatter(&ray, &rec, &mut rng).expect("reflects");
        assert_eq!(result.attenuation, albedo);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction() - expected).length() < 1e-6);
    }

    #[test]
    fn test_metal_absorbs_below_surface() {
        let material = Metal::new(Color::ONE, 0.0);
        // Normal on the same side as the incoming direction: the mirror
        // direction points into the surface
        let rec = record_at(&material, Vec3::NEG_Z, true);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(42);

        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_fuzzy_metal_stays_above_surface() {
        let material = Metal::new(Color::ONE, 1.0);
        let rec = record_at(&material, Vec3::Y, true);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -0.2, 0.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            if let Some(result) = material.scatter(&ray, &rec, &mut rng) {
                assert!(result.scattered.direction().dot(rec.normal) > 0.0);
            }
        }
    }

    #[test]
    fn test_dielectric_head_on_passes_straight() {
        let material = Dielectric::new(1.5);
        let rec = record_at(&material, Vec3::Z, true);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0));
        let mut rng = StdRng::seed_from_u64(42);

        let result = material.scatter(&ray, &rec, &mut rng).expect("refracts");
        assert_eq!(result.attenuation, Color::ONE);
        assert!((result.scattered.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_dielectric_bends_toward_normal_on_entry() {
        let material = Dielectric::new(1.5);
        let rec = record_at(&material, Vec3::Y, true);
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), incoming);
        let mut rng = StdRng::seed_from_u64(42);

        let out = material
            .scatter(&ray, &rec, &mut rng)
            .expect("refracts")
            .scattered
            .direction();
        assert!(out.y < 0.0);
        assert!((out.x - incoming.x / 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_dielectric_never_reflects() {
        // Leaving glass at 45 degrees is past the critical angle, but this
        // material has no internal reflection and still transmits
        let material = Dielectric::new(1.5);
        let rec = record_at(&material, Vec3::Y, false);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(42);

        let result = material.scatter(&ray, &rec, &mut rng).expect("always scatters");
        assert_eq!(result.attenuation, Color::ONE);
        assert!(result.scattered.direction().is_finite());
        assert!(result.scattered.direction().y < 0.0);
    }
}
