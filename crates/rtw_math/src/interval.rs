/// A closed interval of reals, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// The same interval with `max` replaced.
    ///
    /// Used to tighten the search range as closer hits are found.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_unbounded() {
        let forward = Interval::new(0.001, f64::INFINITY);

        assert!(forward.contains(1e300));
        assert!(forward.contains(0.001));
        assert!(!forward.contains(0.0));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 0.999);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.5), 0.5);
        assert_eq!(interval.clamp(0.999), 0.999);
        assert_eq!(interval.clamp(1.0), 0.999);
    }

    #[test]
    fn test_interval_with_max() {
        let interval = Interval::new(0.001, f64::INFINITY).with_max(4.0);

        assert_eq!(interval.min, 0.001);
        assert_eq!(interval.max, 4.0);
        assert!(!interval.contains(4.5));
    }
}
