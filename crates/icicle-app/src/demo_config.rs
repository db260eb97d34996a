//! Demo configuration: the panel options plus what the demo lays out.
//!
//! ```toml
//! [panel]
//! gap = 10.0
//! column_gap = 10.0
//! column_width = 200.0
//! min_columns = 1
//! max_columns = 5
//!
//! [demo]
//! item_count = 100
//! seed = 7
//! widths = [420.0, 860.0, 1100.0]
//! templates = ["Auto, *", "100, 2*, *"]
//! ```

use std::path::Path;

use serde::Deserialize;

use icicle_types::config::PanelConfig;
use icicle_types::error::{IcicleError, Result};

/// Environment variable naming a demo config file.
pub const CONFIG_ENV: &str = "ICICLE_DEMO_CONFIG";

/// Settings for the generated sample items and the widths to lay out at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of sample cards.
    pub item_count: usize,
    /// Seed for card heights and colors.
    pub seed: u64,
    /// Shortest card height.
    pub min_height: f64,
    /// Cards are `min_height + [0, height_spread)` tall.
    pub height_spread: f64,
    /// Panel widths to lay out at, in order.
    pub widths: Vec<f64>,
    /// Column templates to try after the width sweep.
    pub templates: Vec<String>,
    /// Width of the ASCII sketch in characters; 0 disables it.
    pub sketch_columns: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            item_count: 100,
            seed: 7,
            min_height: 50.0,
            height_spread: 300.0,
            widths: vec![420.0, 860.0, 1100.0],
            templates: vec!["Auto, *".to_string(), "100, 2*, *".to_string()],
            sketch_columns: 72,
        }
    }
}

/// Full demo configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "sample_panel")]
    pub panel: PanelConfig,
    #[serde(default)]
    pub demo: DemoSettings,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            panel: sample_panel(),
            demo: DemoSettings::default(),
        }
    }
}

/// Panel options used when no config file is given.
pub fn sample_panel() -> PanelConfig {
    PanelConfig::default()
        .with_gap(10.0)
        .with_column_gap(10.0)
        .with_column_width(200.0)
        .with_columns(1, 5)
}

impl DemoConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate().map_err(|e| e.in_file(path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.panel.validate()?;
        if self.demo.height_spread < 0.0 || self.demo.min_height < 0.0 {
            return Err(IcicleError::Config(
                "demo heights must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the config from a CLI argument, then the
    /// [`CONFIG_ENV`] variable, then the built-in sample.
    pub fn resolve(arg: Option<String>) -> Result<Self> {
        match arg.or_else(|| std::env::var(CONFIG_ENV).ok()) {
            Some(path) => {
                log::info!("Loading demo config from {path}");
                Self::load(path)
            },
            None => {
                log::info!("No demo config given, using built-in sample");
                Ok(Self::default())
            },
        }
    }
}
