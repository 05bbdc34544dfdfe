use radix_economy::config::SweepConfig;
use radix_economy::core::logspace::LogSpace;
use radix_economy::core::radix::{DigitCounting, radix_economy, radix_economy_with};
use radix_economy::core::series::EconomySeries;

#[test]
fn default_sweep_covers_bases_two_to_twenty() {
    let sweep = SweepConfig::default();
    let series = EconomySeries::generate(&sweep);

    assert_eq!(series.values().len(), 1000);
    assert_eq!(series.bases().collect::<Vec<_>>(), (2..=20).collect::<Vec<_>>());
    let space = series.space();
    for (base, scan) in series.iter() {
        space.assert_scan_len(scan);
        assert_eq!(scan.len(), series.values().len(), "base {base}");
    }
}

#[test]
fn scans_match_pointwise_economy() {
    let sweep = SweepConfig {
        sample_count: 257,
        ..SweepConfig::default()
    };
    let series = EconomySeries::generate(&sweep);
    for (base, scan) in series.iter() {
        for (i, &y) in scan.iter().enumerate() {
            assert_eq!(y, radix_economy(series.values()[i], base));
        }
    }
}

#[test]
fn exact_counting_flows_through_generation() {
    let space = LogSpace::new(1.0, 1e6, 61);
    let series = EconomySeries::from_space(space, 2..=12, DigitCounting::Exact);
    assert_eq!(series.counting(), DigitCounting::Exact);
    for (base, scan) in series.iter() {
        for (i, &y) in scan.iter().enumerate() {
            assert_eq!(
                y,
                radix_economy_with(DigitCounting::Exact, series.values()[i], base)
            );
        }
    }
}

#[test]
fn economy_is_non_decreasing_along_value_axis() {
    let series = EconomySeries::generate(&SweepConfig::default());
    for (base, scan) in series.iter() {
        assert!(
            scan.windows(2).all(|w| w[1] >= w[0]),
            "base {base} economy decreased"
        );
    }
}

#[test]
fn base_three_wins_at_the_top_of_the_axis() {
    let series = EconomySeries::generate(&SweepConfig::default());
    let last = series.values().len() - 1;
    assert_eq!(series.optimal_base_at(last), Some(3));
    // Every value is 1 digit at the start, so the smallest base is cheapest.
    assert_eq!(series.optimal_base_at(0), Some(2));
}

#[test]
fn single_sample_sweep() {
    let sweep = SweepConfig {
        value_min: 42.0,
        value_max: 4200.0,
        sample_count: 1,
        ..SweepConfig::default()
    };
    assert_eq!(sweep.validate(), Ok(()));
    let series = EconomySeries::generate(&sweep);
    assert_eq!(series.values(), &[42.0][..]);
    assert_eq!(series.get(10), Some(&[20.0][..]));
}

#[test]
fn sub_unit_values_cost_one_digit() {
    let sweep = SweepConfig {
        value_min: 0.5,
        value_max: 5e7,
        sample_count: 64,
        ..SweepConfig::default()
    };
    let series = EconomySeries::generate(&sweep);
    for (base, scan) in series.iter() {
        assert_eq!(scan[0], f64::from(base), "base {base} at 0.5");
        assert!(scan.iter().all(|&y| y >= f64::from(base)));
    }
    assert_eq!(series.y_range().map(|(lo, _)| lo), Some(2.0));
}
