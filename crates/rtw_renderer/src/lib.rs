//! rtw renderer - CPU path tracing of sphere scenes.
//!
//! A Monte Carlo path tracer that renders analytic spheres lit by a
//! procedural sky into a plain-text PPM image.

mod camera;
mod error;
mod hittable;
mod material;
mod ppm;
mod ray;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::{Camera, CameraBuilder};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{reflect, refract, schlick, Material, ScatterResult};
pub use ppm::{color_to_rgb, PpmWriter};
pub use ray::Ray;
pub use renderer::{
    normal_color, ray_color, render, render_pixel, sky_gradient, RenderConfig, ShadingMode, T_MIN,
};
pub use sampling::{
    gen_f64, random_in_unit_cube, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the vector types from rtw_math
pub use rtw_math::{Color, Interval, Point3, Vec3, Vec3Ext};
