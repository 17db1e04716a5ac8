//! Plain-text PPM (P3) output.

use rtw_math::{Color, Interval};
use std::io::{self, Write};

/// Channel values are clamped into this range before quantisation, so
/// that `256 * x` truncates into 0..=255.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Streams pixels into a P3 image, one `R G B` triple per line.
pub struct PpmWriter<W: Write> {
    inner: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the `P3` header for a `width` x `height` image.
    pub fn write_header(&mut self, width: u32, height: u32) -> io::Result<()> {
        write!(self.inner, "P3\n{} {}\n255\n", width, height)
    }

    /// Write one pixel given its averaged linear color.
    pub fn write_color(&mut self, color: Color) -> io::Result<()> {
        let [r, g, b] = color_to_rgb(color);
        writeln!(self.inner, "{} {} {}", r, g, b)
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
