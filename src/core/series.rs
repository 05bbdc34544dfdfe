//! core/series.rs — Economy series over (value axis × base set).

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::SweepConfig;
use crate::core::logspace::LogSpace;
use crate::core::radix::{DigitCounting, cheapest_base, radix_economy_with};

/// One economy sequence per base, each aligned with the value axis.
#[derive(Clone, Debug)]
pub struct EconomySeries {
    space: LogSpace,
    counting: DigitCounting,
    by_base: BTreeMap<u32, Vec<f64>>,
}

impl EconomySeries {
    /// Evaluate the radix economy for every (value, base) pair of the sweep.
    pub fn generate(sweep: &SweepConfig) -> Self {
        let space = LogSpace::new(sweep.value_min, sweep.value_max, sweep.sample_count);
        Self::from_space(space, sweep.bases(), sweep.counting)
    }

    /// Same as [`EconomySeries::generate`] with an explicit axis and base set.
    pub fn from_space<I>(space: LogSpace, bases: I, counting: DigitCounting) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut by_base = BTreeMap::new();
        for base in bases {
            let scan: Vec<f64> = space
                .values
                .iter()
                .map(|&v| radix_economy_with(counting, v, base))
                .collect();
            space.assert_scan_len_named(&scan, "economy scan");
            by_base.insert(base, scan);
        }

        debug!(
            n_values = space.n_points(),
            n_bases = by_base.len(),
            %counting,
            "generated economy series"
        );

        Self {
            space,
            counting,
            by_base,
        }
    }

    pub fn space(&self) -> &LogSpace {
        &self.space
    }

    /// Represented values, in axis order.
    pub fn values(&self) -> &[f64] {
        &self.space.values
    }

    pub fn counting(&self) -> DigitCounting {
        self.counting
    }

    /// Bases in ascending order.
    pub fn bases(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_base.keys().copied()
    }

    pub fn get(&self, base: u32) -> Option<&[f64]> {
        self.by_base.get(&base).map(Vec::as_slice)
    }

    /// `(base, economy scan)` pairs in ascending base order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[f64])> + '_ {
        self.by_base.iter().map(|(&b, scan)| (b, scan.as_slice()))
    }

    /// Number of bases.
    pub fn len(&self) -> usize {
        self.by_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_base.is_empty()
    }

    /// Smallest and largest finite economy over all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.by_base
            .values()
            .flatten()
            .copied()
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    /// Cheapest base at the i-th value; ties go to the smaller base.
    pub fn optimal_base_at(&self, i: usize) -> Option<u32> {
        cheapest_base(
            self.by_base
                .iter()
                .filter_map(|(&base, scan)| scan.get(i).map(|&cost| (base, cost))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::radix::{optimal_base, radix_economy};

    #[test]
    fn one_scan_per_base_aligned_with_values() {
        let sweep = SweepConfig {
            value_min: 1.0,
            value_max: 1e6,
            sample_count: 50,
            base_min: 2,
            base_max: 6,
            counting: DigitCounting::Logarithm,
        };
        let series = EconomySeries::generate(&sweep);
        assert_eq!(series.len(), 5);
        assert_eq!(series.bases().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
        for (base, scan) in series.iter() {
            assert_eq!(scan.len(), series.values().len());
            for (i, &y) in scan.iter().enumerate() {
                assert_eq!(y, radix_economy(series.values()[i], base));
            }
        }
        assert!(series.get(7).is_none());
    }

    #[test]
    fn y_range_spans_all_scans() {
        let space = LogSpace::new(1.0, 1e3, 4);
        let series = EconomySeries::from_space(space, [2, 10], DigitCounting::Logarithm);
        // base 2 at 1 → 2; base 10 at 1000 → 40.
        assert_eq!(series.y_range(), Some((2.0, 40.0)));
    }

    #[test]
    fn empty_base_set_has_no_range() {
        let space = LogSpace::new(1.0, 10.0, 3);
        let series = EconomySeries::from_space(space, std::iter::empty(), DigitCounting::Exact);
        assert!(series.is_empty());
        assert_eq!(series.y_range(), None);
        assert_eq!(series.optimal_base_at(0), None);
    }

    #[test]
    fn optimal_base_at_agrees_with_optimal_base() {
        let space = LogSpace::new(1.0, 1e10, 101);
        let series = EconomySeries::from_space(space, 2..=20, DigitCounting::Logarithm);
        for (i, &v) in series.values().iter().enumerate() {
            assert_eq!(series.optimal_base_at(i), optimal_base(v, 2..=20), "value {v}");
        }
        assert_eq!(series.optimal_base_at(series.values().len()), None);
    }
}
