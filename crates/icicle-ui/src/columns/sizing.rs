//! Column count and width resolution.
//!
//! Both functions are pure in `(width, config)`, so the measure and arrange
//! passes agree whenever they are handed the same width.

use icicle_types::config::PanelConfig;

use super::template::ColumnTemplate;

/// Template parsed from the config, if it defines at least one column.
pub(crate) fn template_of(config: &PanelConfig) -> Option<ColumnTemplate> {
    if !config.has_column_spec() {
        return None;
    }
    let template = ColumnTemplate::parse(&config.column_spec);
    (!template.is_empty()).then_some(template)
}

/// Number of columns to lay out in `available_width`.
///
/// A column template fixes the count to its token count. Otherwise as many
/// `column_width + column_gap` footprints as fit, clamped to
/// `[min_columns, max_columns]` and never below one. Widths that are too
/// narrow, infinite or not a number yield `min_columns`.
pub fn resolve_column_count(available_width: f64, config: &PanelConfig) -> usize {
    if let Some(template) = template_of(config) {
        return template.len();
    }

    let footprint = config.column_width + config.column_gap;
    let fit = (available_width / footprint).floor();
    let fit = if fit.is_finite() && fit > 0.0 {
        // Saturating float-to-int cast.
        fit as u64
    } else {
        0
    };

    let count = fit
        .max(u64::from(config.min_columns))
        .min(u64::from(config.max_columns))
        .max(1);
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Width of each of `count` columns.
///
/// Without a template every column is `column_width`. With one, the
/// template decides and `count` is ignored; see
/// [`ColumnTemplate::resolve_widths`].
pub fn resolve_column_widths(
    available_width: f64,
    count: usize,
    config: &PanelConfig,
) -> Vec<f64> {
    match template_of(config) {
        Some(template) => {
            template.resolve_widths(available_width, config.column_width, config.column_gap)
        },
        None => vec![config.column_width; count],
    }
}

/// Total width of `widths` laid side by side with `column_gap` between
/// neighbours.
pub fn columns_extent(widths: &[f64], column_gap: f64) -> f64 {
    let gaps = column_gap * widths.len().saturating_sub(1) as f64;
    widths.iter().sum::<f64>() + gaps
}
