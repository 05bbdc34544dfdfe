use crate::core::radix::DigitCounting;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sweep.value_min must be a finite value > 0 (got {0})")]
    ValueMin(f64),
    #[error("sweep.value_max must be finite and > value_min (got {max} <= {min})")]
    ValueMax { min: f64, max: f64 },
    #[error("sweep.sample_count must be at least 1")]
    SampleCount,
    #[error("sweep.base_min must be at least 2 (got {0})")]
    BaseMin(u32),
    #[error("sweep.base_max must be >= base_min (got {max} < {min})")]
    BaseMax { min: u32, max: u32 },
    #[error("chart size must be non-zero (got {width}x{height})")]
    ChartSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepConfig {
    #[serde(default = "SweepConfig::default_value_min")]
    pub value_min: f64,
    #[serde(default = "SweepConfig::default_value_max")]
    pub value_max: f64,
    #[serde(default = "SweepConfig::default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "SweepConfig::default_base_min")]
    pub base_min: u32,
    #[serde(default = "SweepConfig::default_base_max")]
    pub base_max: u32,
    #[serde(default)]
    pub counting: DigitCounting,
}

impl SweepConfig {
    fn default_value_min() -> f64 {
        1.0
    }
    fn default_value_max() -> f64 {
        1e10
    }
    fn default_sample_count() -> usize {
        1000
    }
    fn default_base_min() -> u32 {
        2
    }
    fn default_base_max() -> u32 {
        20
    }

    pub fn bases(&self) -> RangeInclusive<u32> {
        self.base_min..=self.base_max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.value_min.is_finite() || self.value_min <= 0.0 {
            return Err(ConfigError::ValueMin(self.value_min));
        }
        if !self.value_max.is_finite() || self.value_max <= self.value_min {
            return Err(ConfigError::ValueMax {
                min: self.value_min,
                max: self.value_max,
            });
        }
        if self.sample_count == 0 {
            return Err(ConfigError::SampleCount);
        }
        if self.base_min < 2 {
            return Err(ConfigError::BaseMin(self.base_min));
        }
        if self.base_max < self.base_min {
            return Err(ConfigError::BaseMax {
                min: self.base_min,
                max: self.base_max,
            });
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            value_min: Self::default_value_min(),
            value_max: Self::default_value_max(),
            sample_count: Self::default_sample_count(),
            base_min: Self::default_base_min(),
            base_max: Self::default_base_max(),
            counting: DigitCounting::default(),
        }
    }
}

/// Boxed text label anchored by its bottom-right corner at a data coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationConfig {
    #[serde(default = "AnnotationConfig::default_text")]
    pub text: String,
    #[serde(default = "AnnotationConfig::default_x")]
    pub x: f64,
    #[serde(default = "AnnotationConfig::default_y")]
    pub y: f64,
}

impl AnnotationConfig {
    fn default_text() -> String {
        "Base 3 becomes\nmost efficient\nfor large numbers".to_string()
    }
    fn default_x() -> f64 {
        1e9
    }
    fn default_y() -> f64 {
        100.0
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            text: Self::default_text(),
            x: Self::default_x(),
            y: Self::default_y(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_out_path")]
    pub out_path: String,
    #[serde(default = "ChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "ChartConfig::default_height")]
    pub height: u32,
    #[serde(default = "ChartConfig::default_title")]
    pub title: String,
    #[serde(default)]
    pub annotation: AnnotationConfig,
}

impl ChartConfig {
    fn default_out_path() -> String {
        "target/plots/radix_economy.png".to_string()
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        800
    }
    fn default_title() -> String {
        "Radix Efficiency for Different Bases".to_string()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ChartSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            out_path: Self::default_out_path(),
            width: Self::default_width(),
            height: Self::default_height(),
            title: Self::default_title(),
            annotation: AnnotationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sweep.validate()?;
        self.chart.validate()
    }

    /// Default config as TOML with every key commented out.
    ///
    /// Section headers stay live so uncommenting a single key is enough.
    fn commented_template(&self) -> Result<String, toml::ser::Error> {
        let text = toml::to_string_pretty(self)?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                commented.push_str("# ");
                commented.push_str(line);
                commented.push('\n');
            }
        }
        Ok(commented)
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match default_cfg.commented_template() {
            Ok(commented) => {
                if let Some(parent) = path_obj.parent().filter(|p| !p.as_os_str().is_empty()) {
                    if let Err(err) = fs::create_dir_all(parent) {
                        warn!("Failed to create config directory {}: {err}", parent.display());
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("Failed to serialize default config ({err}); continuing with defaults");
            }
        }
        default_cfg
    }
}
