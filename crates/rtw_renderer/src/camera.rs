//! Camera for ray generation.

use crate::Ray;
use rtw_math::{Point3, Vec3, Vec3Ext};

/// Pinhole camera generating primary rays from normalized image coordinates.
///
/// Immutable once built; see [`CameraBuilder`] for the settings.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal basis: u right, v up, w backwards (away from look_at)
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `vfov_deg`: vertical field of view in degrees
    /// - `aspect_ratio`: viewport width over height
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        vup: Vec3,
        vfov_deg: f64,
        aspect_ratio: f64,
    ) -> Self {
        let theta = vfov_deg.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at).unit_vector();
        let u = vup.cross(w).unit_vector();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
        }
    }

    /// Start building a camera from the default settings.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    /// Ray through the viewport point `(s, t)`, both in [0, 1] from the
    /// lower left corner. The direction is not normalized.
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    /// Camera position.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// The camera basis `(u, v, w)`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

impl Default for Camera {
    fn default() -> Self {
        CameraBuilder::new().build()
    }
}

/// Settings for a [`Camera`].
#[derive(Debug, Clone, Copy)]
pub struct CameraBuilder {
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,
    vfov: f64, // Vertical field of view in degrees
    aspect_ratio: f64,
}

impl CameraBuilder {
    /// Camera at the origin looking down -Z with a 90° field of view.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn build(&self) -> Camera {
        Camera::new(
            self.look_from,
            self.look_at,
            self.vup,
            self.vfov,
            self.aspect_ratio,
        )
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_camera() -> Camera {
        Camera::builder()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_fov(90.0)
            .with_aspect_ratio(1.0)
            .build()
    }

    #[test]
    fn test_camera_basis() {
        let camera = square_camera();
        let (u, v, w) = camera.basis();

        assert_eq!(camera.origin(), Vec3::ZERO);
        assert!(u.abs_diff_eq(Vec3::X, 1e-12));
        assert!(v.abs_diff_eq(Vec3::Y, 1e-12));
        assert!(w.abs_diff_eq(Vec3::Z, 1e-12));
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = square_camera();
        let ray = camera.get_ray(0.5, 0.5);

        assert_eq!(ray.origin(), Vec3::ZERO);
        let direction = ray.direction().unit_vector();
        assert!(direction.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-12));
    }

    #[test]
    fn test_corner_rays_span_viewport() {
        // 90° vertical fov at unit focal distance gives a 2x2 viewport
        let camera = square_camera();

        assert!(camera
            .get_ray(0.0, 0.0)
            .direction()
            .abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), 1e-12));
        assert!(camera
            .get_ray(1.0, 1.0)
            .direction()
            .abs_diff_eq(Vec3::new(1.0, 1.0, -1.0), 1e-12));
    }

    #[test]
    fn test_aspect_ratio_widens_viewport() {
        let camera = Camera::builder().with_aspect_ratio(2.0).build();

        let right = camera.get_ray(1.0, 0.5).direction();
        assert!(right.abs_diff_eq(Vec3::new(2.0, 0.0, -1.0), 1e-12));
    }

    #[test]
    fn test_look_from_offset() {
        let camera = Camera::builder()
            .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_fov(20.0)
            .build();

        let direction = camera.get_ray(0.5, 0.5).direction().unit_vector();
        let expected = (Vec3::new(0.0, 0.0, -1.0) - Vec3::new(-2.0, 2.0, 1.0)).unit_vector();
        assert!(direction.abs_diff_eq(expected, 1e-12));
    }
}
