/// A range of ray parameters between `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f32) -> Self {
        Self::new(self.min, max)
    }

    /// Returns true if x is strictly within (min, max).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Endpoints are excluded
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_from_min_and_narrowing() {
        let open = Interval::from_min(0.001);
        assert!(open.surrounds(1e20));
        assert!(!open.surrounds(0.0));

        let narrowed = open.with_max(2.0);
        assert_eq!(narrowed.min, 0.001);
        assert!(!narrowed.surrounds(2.0));
        assert!(narrowed.surrounds(1.999));
    }

    #[test]
    fn test_interval_clamp() {
        let unit = Interval::new(0.0, 1.0);

        assert_eq!(unit.clamp(-5.0), 0.0);
        assert_eq!(unit.clamp(0.25), 0.25);
        assert_eq!(unit.clamp(15.0), 1.0);
    }
}
