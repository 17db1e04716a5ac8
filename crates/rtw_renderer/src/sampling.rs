//! Random sampling helpers.
//!
//! All sampling goes through an explicitly passed `RngCore`, so a render
//! seeded with a fixed value is reproducible and tests can script the
//! exact sequence of draws.

use rand::{Rng, RngCore};
use rtw_math::Vec3;

/// Uniform sample on `[0, 1)`.
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform sample in the cube `[-1, 1)^3`.
pub fn random_in_unit_cube(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        gen_f64(rng) * 2.0 - 1.0,
        gen_f64(rng) * 2.0 - 1.0,
        gen_f64(rng) * 2.0 - 1.0,
    )
}

/// Uniform sample in the open unit ball, by rejection from the cube.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_cube(rng);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform sample on the unit sphere surface.
///
/// A ball sample of exactly zero has no direction and yields zero; a
/// Lambertian bounce then falls back to the surface normal.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_sphere(rng).normalize_or_zero()
}

/// Uniform sample in the unit disk on the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f64(rng) * 2.0 - 1.0, gen_f64(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// An `RngCore` that replays a fixed list of uniform values, cycling when
/// it runs out.
///
/// Each value `u` in `[0, 1)` is encoded so that `gen::<f64>()` returns it
/// to 53 bits of precision.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<u64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(uniforms: &[f64]) -> Self {
        let values = uniforms
            .iter()
            .map(|u| ((u * (1u64 << 53) as f64) as u64) << 11)
            .collect();
        Self { values, next: 0 }
    }
}

#[cfg(test)]
impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
