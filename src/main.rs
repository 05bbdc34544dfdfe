// Entry point: one sweep, one chart.
use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use radix_economy::cli::Args;
use radix_economy::core::series::EconomySeries;
use radix_economy::plot::render_economy_chart;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = args.resolve_config();
    cfg.validate()?;

    let sweep = &cfg.sweep;
    info!(
        value_min = sweep.value_min,
        value_max = sweep.value_max,
        sample_count = sweep.sample_count,
        base_min = sweep.base_min,
        base_max = sweep.base_max,
        counting = %sweep.counting,
        "generating economy series"
    );
    let series = EconomySeries::generate(sweep);

    let last = series.values().len() - 1;
    if let Some(best) = series.optimal_base_at(last) {
        info!(
            "cheapest base at {:e}: {best}",
            series.values()[last]
        );
    }

    let out_path = Path::new(&cfg.chart.out_path);
    render_economy_chart(out_path, &series, &cfg.chart)?;
    info!("Saved chart to {}", out_path.display());
    Ok(())
}
