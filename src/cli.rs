use clap::Parser;

use crate::config::AppConfig;
use crate::core::radix::DigitCounting;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (written with commented defaults if missing)
    #[arg(long)]
    pub config: Option<String>,

    /// Output chart path, .png or .svg (overrides config)
    #[arg(long)]
    pub out: Option<String>,

    /// Digit counting: logarithm or exact (overrides config)
    #[arg(long)]
    pub counting: Option<DigitCounting>,
}

impl Args {
    /// Load the config named by `--config` (or defaults) and apply flag overrides.
    pub fn resolve_config(&self) -> AppConfig {
        let mut cfg = match self.config.as_deref() {
            Some(path) => AppConfig::load_or_default(path),
            None => AppConfig::default(),
        };
        if let Some(out) = &self.out {
            cfg.chart.out_path = out.clone();
        }
        if let Some(counting) = self.counting {
            cfg.sweep.counting = counting;
        }
        cfg
    }
}
