//! Panel configuration.
//!
//! A [`PanelConfig`] is the plain-value form of every option the columns
//! panel recognizes. It is immutable for the duration of a layout pass and
//! can be loaded from TOML:
//!
//! ```toml
//! gap = 10.0
//! column_gap = 10.0
//! column_width = 200.0
//! min_columns = 1
//! max_columns = 5
//! column_spec = "Auto, 2*, *"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IcicleError, Result};

/// Default width of a column when neither a template nor a host override
/// says otherwise.
pub const DEFAULT_COLUMN_WIDTH: f64 = 300.0;

/// Options consumed by the columns layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Vertical space between items stacked in the same column.
    pub gap: f64,
    /// Horizontal space between adjacent columns.
    pub column_gap: f64,
    /// Nominal column width. Also the width of `Auto` template columns.
    pub column_width: f64,
    /// Lower bound on the derived column count (inclusive).
    pub min_columns: u32,
    /// Upper bound on the derived column count (inclusive).
    pub max_columns: u32,
    /// Comma-separated column template (`Auto`, `120`, `2*`, `*`).
    /// Empty disables template mode.
    pub column_spec: String,
    /// Explicit panel width. Replaces the width offered by the host.
    pub width: Option<f64>,
    /// Smallest width the panel lays itself out at.
    pub min_width: f64,
    /// Largest width the panel lays itself out at.
    pub max_width: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            gap: 0.0,
            column_gap: 0.0,
            column_width: DEFAULT_COLUMN_WIDTH,
            min_columns: 1,
            max_columns: u32::MAX,
            column_spec: String::new(),
            width: None,
            min_width: 0.0,
            max_width: f64::INFINITY,
        }
    }
}

impl PanelConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate().map_err(|e| e.in_file(path))?;
        log::debug!("Loaded panel config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants a loaded configuration must hold.
    ///
    /// The layout engine itself accepts any value; this is only the gate
    /// for configuration coming from files.
    pub fn validate(&self) -> Result<()> {
        if self.min_columns == 0 {
            return Err(IcicleError::Config(
                "min_columns must be at least 1".into(),
            ));
        }
        if self.min_columns > self.max_columns {
            return Err(IcicleError::Config(format!(
                "min_columns ({}) exceeds max_columns ({})",
                self.min_columns, self.max_columns
            )));
        }
        for (name, value) in [
            ("gap", self.gap),
            ("column_gap", self.column_gap),
            ("column_width", self.column_width),
            ("min_width", self.min_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(IcicleError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if let Some(width) = self.width {
            if !width.is_finite() || width < 0.0 {
                return Err(IcicleError::Config(format!(
                    "width must be a non-negative number, got {width}"
                )));
            }
        }
        if self.max_width.is_nan() || self.max_width < self.min_width {
            return Err(IcicleError::Config(format!(
                "max_width ({}) is below min_width ({})",
                self.max_width, self.min_width
            )));
        }
        Ok(())
    }

    /// Whether a column template is set.
    pub fn has_column_spec(&self) -> bool {
        !self.column_spec.trim().is_empty()
    }

    /// Width the panel lays its columns out in, given the width the host
    /// offers: the explicit `width` wins, then `max_width` caps it and
    /// `min_width` floors it.
    pub fn constrain_width(&self, available: f64) -> f64 {
        let width = self.width.unwrap_or(available);
        width.min(self.max_width).max(self.min_width)
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_column_gap(mut self, column_gap: f64) -> Self {
        self.column_gap = column_gap;
        self
    }

    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    /// Set both column-count bounds.
    pub fn with_columns(mut self, min_columns: u32, max_columns: u32) -> Self {
        self.min_columns = min_columns;
        self.max_columns = max_columns;
        self
    }

    pub fn with_column_spec(mut self, spec: impl Into<String>) -> Self {
        self.column_spec = spec.into();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the panel's own width bounds.
    pub fn with_width_bounds(mut self, min_width: f64, max_width: f64) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }
}
