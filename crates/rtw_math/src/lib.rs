//! Vector math for the rtw path tracer.
//!
//! Everything is double precision: points, directions and linear RGB
//! radiance all share the same three-component type.

// Re-export glam for convenience
pub use glam;

mod interval;
pub use interval::Interval;

/// Three-component real vector.
pub type Vec3 = glam::DVec3;

/// A position in world space.
pub type Point3 = glam::DVec3;

/// Linear-light RGB. Channels are non-negative and may exceed 1.
pub type Color = glam::DVec3;

/// Components below this magnitude count as zero for [`Vec3Ext::near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Helpers glam does not provide directly.
pub trait Vec3Ext {
    /// True when every component is smaller than [`NEAR_ZERO_EPSILON`] in magnitude.
    fn near_zero(&self) -> bool;

    /// The vector scaled to unit length.
    fn unit_vector(&self) -> Self;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().max_element() < NEAR_ZERO_EPSILON
    }

    #[inline]
    fn unit_vector(&self) -> Self {
        *self / self.length()
    }
}
