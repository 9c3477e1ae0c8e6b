// src/config.rs
use crate::errors::{AppError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding `rooms.json`, `inventory.json` and `bookings.json`.
    pub data_dir: PathBuf,
    /// Prefix used when formatting money, e.g. "₱".
    pub currency_symbol: String,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            currency_symbol: "₱".to_string(),
            chart: ChartConfig {
                width: 600.0,
                height: 300.0,
            },
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by any `HOTEL_OPS_*` variables present.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(dir) = lookup("HOTEL_OPS_DATA_DIR").filter(|s| !s.trim().is_empty()) {
            cfg.data_dir = PathBuf::from(dir.trim());
        }
        if let Some(symbol) = lookup("HOTEL_OPS_CURRENCY") {
            cfg.currency_symbol = symbol;
        }
        if let Some(raw) = lookup("HOTEL_OPS_CHART_WIDTH") {
            cfg.chart.width = parse_dimension("HOTEL_OPS_CHART_WIDTH", &raw)?;
        }
        if let Some(raw) = lookup("HOTEL_OPS_CHART_HEIGHT") {
            cfg.chart.height = parse_dimension("HOTEL_OPS_CHART_HEIGHT", &raw)?;
        }

        Ok(cfg)
    }
}

fn parse_dimension(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| AppError::invalid(format!("{key} must be a positive number, got '{raw}'")))
}
