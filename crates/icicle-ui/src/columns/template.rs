//! Column templates: `"Auto, 120, 2*, *"`.
//!
//! A template fixes the number of columns and sizes each one. Tokens are
//! comma separated and whitespace around them is ignored:
//!
//! - `Auto` (any case): the panel's column width, or `*` when that is not
//!   positive.
//! - a number: a fixed width in pixels.
//! - `N*` or `*`: a proportional share of whatever the fixed columns and
//!   gaps leave over, weighted by `N` (default 1).
//!
//! Anything else resolves to a zero-width column. A bad template never
//! fails a layout pass.

use std::fmt;

/// One parsed template token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnDef {
    /// `Auto`; sized from the panel's column width at resolve time.
    Auto,
    /// Fixed pixel width.
    Fixed(f64),
    /// Proportional share with the given weight.
    Star(f64),
    /// Unparseable token. Resolves to width 0.
    Invalid,
}

impl ColumnDef {
    /// Parse a single, already trimmed token.
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("auto") {
            return Self::Auto;
        }
        if let Some(weight) = token.strip_suffix('*') {
            let weight = weight.trim();
            if weight.is_empty() {
                return Self::Star(1.0);
            }
            return match parse_number(weight) {
                Some(w) => Self::Star(w),
                None => Self::Invalid,
            };
        }
        match parse_number(token) {
            Some(px) => Self::Fixed(px),
            None => Self::Invalid,
        }
    }

    /// Replace `Auto` with its concrete meaning for the given column width.
    fn concrete(self, column_width: f64) -> Self {
        match self {
            Self::Auto if column_width > 0.0 => Self::Fixed(column_width),
            Self::Auto => Self::Star(1.0),
            other => other,
        }
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Fixed(px) => write!(f, "{px}"),
            Self::Star(w) if *w == 1.0 => write!(f, "*"),
            Self::Star(w) => write!(f, "{w}*"),
            Self::Invalid => write!(f, "<invalid>"),
        }
    }
}

/// Only finite numbers count; `inf` and `NaN` are rejected like any other
/// junk.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A parsed column template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnTemplate {
    defs: Vec<ColumnDef>,
}

impl ColumnTemplate {
    /// Split `spec` on commas, trim each token and drop empty ones.
    pub fn parse(spec: &str) -> Self {
        let defs = spec
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ColumnDef::parse)
            .collect();
        Self { defs }
    }

    /// Number of columns the template defines.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn defs(&self) -> &[ColumnDef] {
        &self.defs
    }

    /// Number of tokens that failed to parse.
    pub fn invalid_count(&self) -> usize {
        self.defs
            .iter()
            .filter(|d| matches!(d, ColumnDef::Invalid))
            .count()
    }

    /// Resolve every column to a pixel width.
    ///
    /// Fixed columns take their width first. What is left of
    /// `available_width` after fixed columns and the gaps between columns is
    /// split among star columns by weight. The leftover may be negative;
    /// star columns then come out negative too.
    pub fn resolve_widths(
        &self,
        available_width: f64,
        column_width: f64,
        column_gap: f64,
    ) -> Vec<f64> {
        let defs: Vec<ColumnDef> = self
            .defs
            .iter()
            .map(|d| d.concrete(column_width))
            .collect();

        let mut fixed_width = 0.0_f64;
        let mut total_weight = 0.0_f64;
        for def in &defs {
            match *def {
                ColumnDef::Fixed(px) => fixed_width += px,
                ColumnDef::Star(w) => total_weight += w,
                _ => {},
            }
        }

        let gaps = column_gap * defs.len().saturating_sub(1) as f64;
        let remaining = available_width - fixed_width - gaps;

        defs.iter()
            .map(|def| match *def {
                ColumnDef::Fixed(px) => px,
                ColumnDef::Star(w) if total_weight > 0.0 => w * remaining / total_weight,
                _ => 0.0,
            })
            .collect()
    }
}

impl fmt::Display for ColumnTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.defs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{def}")?;
        }
        Ok(())
    }
}
