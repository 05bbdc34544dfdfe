//! Pure computation: digit counts, economy, value axis, series. No rendering.

pub mod logspace;
pub mod radix;
pub mod series;
