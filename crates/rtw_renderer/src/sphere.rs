//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use rtw_math::{Interval, Point3};
use std::sync::Arc;

/// An analytic sphere.
///
/// A negative radius is allowed: the surface is the same, but the outward
/// normal points inwards. Nesting one inside a glass sphere gives a
/// hollow shell.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtw_math::Vec3;

    const FORWARD: Interval = Interval::new(0.001, f64::INFINITY);

    fn sphere(center: Vec3, radius: f64) -> Sphere {
        Sphere::new(
            center,
            radius,
            Arc::new(Material::lambertian(Vec3::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, FORWARD).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12); // Should hit at t=0.5
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_sphere_hit_unnormalized_direction() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        let rec = sphere.hit(&ray, FORWARD).unwrap();
        assert!((rec.t - 0.25).abs() < 1e-12);
        assert!((rec.normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, FORWARD).is_none());
    }

    #[test]
    fn test_sphere_far_root_from_inside() {
        let sphere = sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, FORWARD).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-12);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::X);
    }

    #[test]
    fn test_sphere_self_miss() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Starts exactly on the surface, heading outward
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.5), Vec3::Z);
        assert!(sphere.hit(&ray, FORWARD).is_none());
    }

    #[test]
    fn test_sphere_interval_is_inclusive() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.5, 0.5)).unwrap();
        assert_eq!(rec.t, 0.5);
    }

    #[test]
    fn test_negative_radius_inverts_normal() {
        let solid = sphere(Vec3::ZERO, 0.5);
        let hollow = sphere(Vec3::ZERO, -0.5);
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);

        let outside = solid.hit(&ray, FORWARD).unwrap();
        let inverted = hollow.hit(&ray, FORWARD).unwrap();

        // Same intersection, opposite face classification
        assert_eq!(outside.t, inverted.t);
        assert!(outside.front_face);
        assert!(!inverted.front_face);
        // Stored normal still faces the incoming ray
        assert_eq!(inverted.normal, -Vec3::X);
    }

    #[test]
    fn test_sphere_shares_material() {
        let material = Arc::new(Material::dielectric(1.5));
        let a = Sphere::new(Vec3::ZERO, 0.5, Arc::clone(&material));
        let b = Sphere::new(Vec3::ZERO, -0.4, Arc::clone(&material));
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);

        let rec_a = a.hit(&ray, FORWARD).unwrap();
        let rec_b = b.hit(&ray, FORWARD).unwrap();
        assert!(std::ptr::eq(rec_a.material, rec_b.material));
        assert!(std::ptr::eq(rec_a.material, material.as_ref()));
    }
}
