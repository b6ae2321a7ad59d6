//! Built-in demo scene.

use rtw_renderer::{Color, Dielectric, HittableList, Lambertian, Material, Metal, Point3, Sphere};
use std::sync::Arc;

/// Three spheres on a large ground sphere, plus a small glass ball.
pub fn demo_scene() -> HittableList {
    let material_ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let material_center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3)));
    let material_left: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.3));
    let material_right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));
    let material_glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, material_center)));
    world.add(Arc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, material_left)));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_right)));
    world.add(Arc::new(Sphere::new(Point3::new(0.5, -0.3, -0.4), 0.18, material_glass)));

    log::debug!("Built demo scene with {} objects", world.len());
    world
}
