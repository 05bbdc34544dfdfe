//! core/radix.rs — Digit counts and radix economy.
//!
//! Radix economy of a value `n` in base `b` is `b * digits_b(n)`: the number
//! of symbols times the size of the alphabet they are drawn from.
//! Example: 1000 in base 10 → 4 digits → economy 40; in base 2 → 10 digits → 20.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixError {
    #[error("base {0} cannot count digits (need base >= 2)")]
    InvalidBase(u32),
    #[error("unknown digit counting mode '{0}' (expected 'logarithm' or 'exact')")]
    UnknownCounting(String),
}

/// How digit counts are evaluated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DigitCounting {
    /// `floor(ln v / ln b) + 1` in f64. Invalid inputs propagate as NaN/inf.
    #[default]
    Logarithm,
    /// Repeated integer division on `floor(v)`.
    Exact,
}

impl DigitCounting {
    /// Digit count of `value` in `base` under this mode.
    ///
    /// Exact mode has no representation for invalid input, so negative or
    /// non-finite values and bases below 2 come back as NaN, the same way
    /// the logarithm path reports them.
    pub fn count(self, value: f64, base: u32) -> f64 {
        match self {
            Self::Logarithm => digit_count(value, base),
            Self::Exact => {
                if !value.is_finite() || value < 0.0 {
                    return f64::NAN;
                }
                match digit_count_exact(value.floor() as u64, base) {
                    Ok(digits) => f64::from(digits),
                    Err(_) => f64::NAN,
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logarithm => "logarithm",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for DigitCounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigitCounting {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logarithm" | "log" => Ok(Self::Logarithm),
            "exact" => Ok(Self::Exact),
            other => Err(RadixError::UnknownCounting(other.to_string())),
        }
    }
}

/// Number of digits needed to write `value` in `base`.
///
/// - `value == 0` → 1.
/// - otherwise `trunc(log_base(value)) + 1`, estimated with natural logs
///   and never below 1 for a finite estimate, so every value under 1 takes
///   a single digit.
///
/// The ln-ratio can land one ulp below an exact power (`ln 1000 / ln 10`
/// is `2.9999999999999996`), so the exponent is checked against `base^k`
/// and moved by one when the estimate sits on the wrong side.
///
/// Bases below 2 and negative values are not rejected: `base == 1` gives
/// `inf`, a negative `value` gives `NaN`.
pub fn digit_count(value: f64, base: u32) -> f64 {
    if value == 0.0 {
        return 1.0;
    }
    let radix = f64::from(base);
    let ratio = value.ln() / radix.ln();
    if !ratio.is_finite() {
        return ratio.trunc() + 1.0;
    }
    if ratio <= 0.0 {
        return 1.0;
    }
    let mut exponent = ratio.trunc();
    if radix.powf(exponent + 1.0) <= value {
        exponent += 1.0;
    } else if radix.powf(exponent) > value {
        exponent -= 1.0;
    }
    exponent.max(0.0) + 1.0
}

/// Digit count by repeated division. Exact at every power of the base.
pub fn digit_count_exact(value: u64, base: u32) -> Result<u32, RadixError> {
    if base < 2 {
        return Err(RadixError::InvalidBase(base));
    }
    let radix = u64::from(base);
    let mut rest = value / radix;
    let mut digits = 1;
    while rest > 0 {
        rest /= radix;
        digits += 1;
    }
    Ok(digits)
}

/// `base * digit_count(value, base)`.
#[inline]
pub fn radix_economy(value: f64, base: u32) -> f64 {
    f64::from(base) * digit_count(value, base)
}

/// Radix economy with an explicit digit counting mode.
#[inline]
pub fn radix_economy_with(counting: DigitCounting, value: f64, base: u32) -> f64 {
    f64::from(base) * counting.count(value, base)
}

/// Continuous relaxation `b * ln(v) / ln(b)`; minimal at `b = e` for any v > 1.
#[inline]
pub fn continuous_radix_economy(value: f64, base: f64) -> f64 {
    base * value.ln() / base.ln()
}

/// Base with the smallest economy for `value`. Ties go to the smaller base.
pub fn optimal_base<I>(value: f64, bases: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    cheapest_base(bases.into_iter().map(|base| (base, radix_economy(value, base))))
}

/// Base of the smallest finite cost among `(base, cost)` pairs.
/// Ties go to the smaller base whatever the input order.
pub fn cheapest_base<I>(costs: I) -> Option<u32>
where
    I: IntoIterator<Item = (u32, f64)>,
{
    let mut best: Option<(u32, f64)> = None;
    for (base, cost) in costs {
        if !cost.is_finite() {
            continue;
        }
        match best {
            Some((best_base, best_cost))
                if cost > best_cost || (cost == best_cost && base > best_base) => {}
            _ => best = Some((base, cost)),
        }
    }
    best.map(|(base, _)| base)
}
