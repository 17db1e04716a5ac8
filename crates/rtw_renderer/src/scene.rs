//! Scene description: a camera plus the objects it looks at.

use crate::{Camera, HittableList, Material, Sphere};
use rtw_math::{Color, Vec3};
use std::sync::Arc;

/// Everything the integrator reads during a render.
///
/// Built once up front and only borrowed immutably afterwards.
pub struct Scene {
    pub camera: Camera,
    pub world: HittableList,
}

impl Scene {
    pub fn new(camera: Camera, world: HittableList) -> Self {
        Self { camera, world }
    }

    /// The built-in scene: a diffuse sphere between a hollow glass sphere
    /// and a polished metal one, resting on a large diffuse ground sphere.
    pub fn three_spheres(aspect_ratio: f64) -> Self {
        let ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
        let center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
        let glass = Arc::new(Material::dielectric(1.5));
        let metal = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

        let left = Vec3::new(-1.0, 0.0, -1.0);

        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            ground,
        )));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)));
        // Negative inner radius flips the normals, leaving a glass shell
        world.add(Box::new(Sphere::new(left, 0.5, Arc::clone(&glass))));
        world.add(Box::new(Sphere::new(left, -0.4, glass)));
        world.add(Box::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)));

        let camera = Camera::builder()
            .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_fov(20.0)
            .with_aspect_ratio(aspect_ratio)
            .build();

        log::debug!("Built scene with {} objects", world.len());
        Self::new(camera, world)
    }
}
