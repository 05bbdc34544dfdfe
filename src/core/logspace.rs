//! core/logspace.rs — Log10-spaced axis of represented values.
//!
//! Points are uniform in log10(value), endpoints included.
//! Example: LogSpace::new(1.0, 1e10, 11) → 1, 10, 100, ..., 1e10.

/// Log-spaced sample axis (geometric progression between two bounds).
#[derive(Clone, Debug)]
pub struct LogSpace {
    pub values: Vec<f64>,
    pub step_log10: f64,
}

impl LogSpace {
    /// Create `n_points` log-spaced values over `value_min..=value_max`.
    ///
    /// A single point holds `value_min` only.
    pub fn new(value_min: f64, value_max: f64, n_points: usize) -> Self {
        assert!(value_min > 0.0 && value_max > value_min);
        assert!(n_points > 0);

        let lo = value_min.log10();
        let hi = value_max.log10();
        if n_points == 1 {
            return Self {
                values: vec![value_min],
                step_log10: 0.0,
            };
        }

        let last = (n_points - 1) as f64;
        let values: Vec<f64> = (0..n_points)
            .map(|i| 10f64.powf(lo + (hi - lo) * (i as f64 / last)))
            .collect();

        Self {
            values,
            step_log10: (hi - lo) / last,
        }
    }

    /// Number of points.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn assert_scan_len<T>(&self, scan: &[T]) {
        debug_assert_eq!(scan.len(), self.n_points());
    }

    #[inline]
    pub fn assert_scan_len_named<T>(&self, scan: &[T], name: &str) {
        debug_assert_eq!(scan.len(), self.n_points(), "scan length mismatch: {name}");
    }

    /// Δlog10 between neighbouring points.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step_log10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logspace_decades() {
        let s = LogSpace::new(1.0, 1e10, 11);
        assert_eq!(s.n_points(), 11);
        for (k, &v) in s.values.iter().enumerate() {
            assert_relative_eq!(v, 10f64.powi(k as i32), max_relative = 1e-12);
        }
        assert_relative_eq!(s.step(), 1.0);
    }

    #[test]
    fn test_logspace_geometric_spacing() {
        let s = LogSpace::new(1.0, 1e10, 1000);
        let ratios: Vec<f64> = s.values.windows(2).map(|w| w[1] / w[0]).collect();
        let target = ratios[0];
        assert!(ratios.iter().all(|&r| (r / target - 1.0).abs() < 1e-9));
        assert!(s.values.windows(2).all(|w| w[1] > w[0]));
        assert_relative_eq!(s.values[0], 1.0);
        assert_relative_eq!(*s.values.last().unwrap(), 1e10, max_relative = 1e-12);
    }

    #[test]
    fn test_single_point_holds_min() {
        let s = LogSpace::new(5.0, 500.0, 1);
        assert_eq!(s.values, vec![5.0]);
        assert_eq!(s.step(), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_empty_range_panics() {
        LogSpace::new(5.0, 5.0, 10);
    }
}
