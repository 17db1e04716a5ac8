//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative radiance estimation with a bounded bounce depth
//! - Anti-aliasing via jittered multi-sampling
//! - Scanline streaming to a PPM writer

use crate::sampling::gen_f64;
use crate::{Camera, Color, Hittable, PpmWriter, Ray, RenderError, RenderResult, Scene};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rtw_math::{Interval, Vec3Ext};
use std::io::Write;
use std::time::Instant;

/// Closest hit distance accepted after a bounce, so a scattered ray does
/// not re-hit the surface it starts on.
pub const T_MIN: f64 = 0.001;

/// What a primary ray's color represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Full path traced radiance
    #[default]
    PathTraced,
    /// First-hit surface normals mapped into [0, 1], for debugging geometry
    Normals,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width over height
    pub aspect_ratio: f64,
    /// Image width in pixels; the height follows from the aspect ratio
    pub image_width: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    pub shading: ShadingMode,
    /// Fixed RNG seed for reproducible images; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            shading: ShadingMode::PathTraced,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Set image width and aspect ratio.
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f64) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Image height in pixels, truncated.
    pub fn image_height(&self) -> u32 {
        (self.image_width as f64 / self.aspect_ratio) as u32
    }

    /// The random source for a render with these settings.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Check that every pixel of the image can be sampled.
    ///
    /// Pixel coordinates are normalized by `width - 1` and `height - 1`,
    /// so both must be at least 2.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "aspect ratio must be positive and finite, got {}",
                self.aspect_ratio
            )));
        }
        if self.image_width < 2 || self.image_height() < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width,
                self.image_height()
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sky color for a ray that escapes the scene: white at the horizon
/// blending to light blue straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().unit_vector();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Compute the radiance carried back along a ray.
///
/// This is the core path tracing function. Each bounce multiplies the
/// path throughput by the surface attenuation; the path ends when it
/// escapes to the sky, is absorbed, or runs out of depth. A path with no
/// depth left carries no light.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut throughput = Color::ONE;
    let mut ray = *ray;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(T_MIN, f64::INFINITY)) else {
            return throughput * sky_gradient(&ray);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
            }
            // Absorbed
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Color a ray by the normal of the first surface it hits.
pub fn normal_color(ray: &Ray, world: &dyn Hittable) -> Color {
    match world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) {
        Some(rec) => 0.5 * (rec.normal + Color::ONE),
        None => sky_gradient(ray),
    }
}

/// Average color of pixel `(i, j)`, with `j` counted up from the bottom row.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Degenerate sizes are rejected by `validate`; keep direct callers finite
    let width_span = config.image_width.saturating_sub(1).max(1) as f64;
    let height_span = config.image_height().saturating_sub(1).max(1) as f64;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f64 + gen_f64(rng)) / width_span;
        let t = (j as f64 + gen_f64(rng)) / height_span;
        let ray = camera.get_ray(s, t);

        pixel_color += match config.shading {
            ShadingMode::PathTraced => ray_color(&ray, world, config.max_depth, rng),
            ShadingMode::Normals => normal_color(&ray, world),
        };
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Render the scene, streaming pixels top row first, left to right.
///
/// Progress goes to `progress` as one `Scanlines remaining: <j>` line per
/// row followed by `Done`. The first write error aborts the render.
pub fn render<W: Write>(
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    out: &mut PpmWriter<W>,
    progress: &mut dyn Write,
) -> RenderResult<()> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height();
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );

    let start = Instant::now();
    out.write_header(width, height)?;

    for j in (0..height).rev() {
        writeln!(progress, "Scanlines remaining: {}", j)?;
        log::debug!("Scanline {} of {}", height - j, height);

        for i in 0..width {
            let color = render_pixel(&scene.camera, &scene.world, i, j, config, rng);
            out.write_color(color)?;
        }
    }

    writeln!(progress, "Done")?;
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(())
}
