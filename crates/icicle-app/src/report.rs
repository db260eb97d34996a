//! Text output for demo runs: a per-column summary and an ASCII sketch.

use std::fmt::Write as _;

use icicle_ui::ColumnsLayout;

use crate::sample::SampleItem;

/// Per-column statistics of an arranged layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: usize,
    pub left: f64,
    pub width: f64,
    pub items: usize,
    /// Bottom edge of the lowest item in the column.
    pub bottom: f64,
}

/// Summarize every column of `layout`.
pub fn summarize(layout: &ColumnsLayout) -> Vec<ColumnSummary> {
    let mut columns: Vec<ColumnSummary> = layout
        .column_widths
        .iter()
        .zip(&layout.column_lefts)
        .enumerate()
        .map(|(column, (&width, &left))| ColumnSummary {
            column,
            left,
            width: width * layout.scale,
            items: 0,
            bottom: 0.0,
        })
        .collect();
    for p in &layout.placements {
        if let Some(c) = columns.get_mut(p.column) {
            c.items += 1;
            c.bottom = c.bottom.max(p.rect.bottom());
        }
    }
    columns
}

/// Difference between the tallest and shortest non-empty column.
pub fn imbalance(columns: &[ColumnSummary]) -> f64 {
    let bottoms = columns.iter().filter(|c| c.items > 0).map(|c| c.bottom);
    let (min, max) = bottoms.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
        (lo.min(b), hi.max(b))
    });
    if min.is_finite() { max - min } else { 0.0 }
}

/// Render a heading line plus one line per column.
pub fn render_summary(title: &str, layout: &ColumnsLayout) -> String {
    let columns = summarize(layout);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{title}: {} column(s), scale {:.2}, panel {:.0}x{:.0}, imbalance {:.0}",
        layout.column_count(),
        layout.scale,
        layout.size.width,
        layout.size.height,
        imbalance(&columns),
    );
    for c in &columns {
        let _ = writeln!(
            out,
            "  column {:>2}  x={:>7.1}  w={:>6.1}  items={:>3}  bottom={:>7.1}",
            c.column, c.left, c.width, c.items, c.bottom
        );
    }
    out
}

/// Tallest sketch, in lines. Taller layouts are squeezed vertically.
pub const MAX_SKETCH_ROWS: usize = 400;

/// Draw the arranged items as letter blocks on a character grid
/// `columns` characters wide. Each item gets `A`..`Z` by index, cycling.
pub fn render_sketch(layout: &ColumnsLayout, items: &[SampleItem], columns: usize) -> String {
    if columns == 0 || layout.size.width <= 0.0 || items.is_empty() {
        return String::new();
    }
    let px_per_char = layout.size.width / columns as f64;
    // Terminal cells are roughly twice as tall as they are wide.
    let px_per_row = (px_per_char * 2.0).max(layout.size.height / MAX_SKETCH_ROWS as f64);
    let rows = ((layout.size.height / px_per_row).ceil() as usize).clamp(1, MAX_SKETCH_ROWS);
    let mut grid = vec![vec![' '; columns]; rows];

    for (i, item) in items.iter().enumerate() {
        let Some(rect) = item.placed() else {
            continue;
        };
        let glyph = (b'A' + (i % 26) as u8) as char;
        let x0 = (rect.x / px_per_char).floor().max(0.0) as usize;
        let x1 = ((rect.right() / px_per_char).ceil() as usize).min(columns);
        let y0 = (rect.y / px_per_row).floor().max(0.0) as usize;
        let y1 = ((rect.bottom() / px_per_row).ceil() as usize).min(rows);
        for row in grid.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1).skip(x0) {
                *cell = glyph;
            }
        }
    }

    let mut out = String::with_capacity(rows * (columns + 1));
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use icicle_ui::{ColumnsPanel, PanelConfig, Size};

    fn laid_out(heights: &[f64]) -> (ColumnsLayout, Vec<SampleItem>) {
        let mut items: Vec<SampleItem> = heights
            .iter()
            .enumerate()
            .map(|(i, &h)| SampleItem::new(format!("Item {i}"), h, [0, 0, 0]))
            .collect();
        let mut panel = ColumnsPanel::new(
            PanelConfig::default()
                .with_column_width(100.0)
                .with_columns(1, 2),
        );
        let layout = panel.layout(&mut items, Size::new(200.0, 0.0));
        (layout, items)
    }

    #[test]
    fn summary_counts_items() {
        let (layout, _) = laid_out(&[50.0, 80.0, 30.0, 60.0, 40.0]);
        let columns = summarize(&layout);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].items, 3);
        assert_eq!(columns[1].items, 2);
        assert_eq!(columns[0].bottom, 140.0);
        assert_eq!(columns[1].bottom, 120.0);
        assert_eq!(columns[1].left, 100.0);
        assert_eq!(imbalance(&columns), 20.0);
    }

    #[test]
    fn imbalance_ignores_empty_columns() {
        let (layout, _) = laid_out(&[50.0]);
        assert_eq!(imbalance(&summarize(&layout)), 0.0);
    }

    #[test]
    fn summary_text() {
        let (layout, _) = laid_out(&[10.0, 10.0]);
        let text = render_summary("200px", &layout);
        assert!(text.starts_with("200px: 2 column(s), scale 1.00"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn sketch_draws_blocks() {
        let (layout, items) = laid_out(&[40.0, 40.0]);
        // 200px over 20 chars: 10px per char, 20px per row -> 2 rows.
        let sketch = render_sketch(&layout, &items, 20);
        assert_eq!(sketch, "AAAAAAAAAABBBBBBBBBB\nAAAAAAAAAABBBBBBBBBB\n");
    }

    #[test]
    fn sketch_rows_are_capped() {
        let mut items: Vec<SampleItem> = (0..100)
            .map(|i| SampleItem::new(format!("Item {i}"), 100.0, [0, 0, 0]))
            .collect();
        let mut panel = ColumnsPanel::new(
            PanelConfig::default()
                .with_column_width(1.0)
                .with_columns(1, 1),
        );
        let layout = panel.layout(&mut items, Size::new(1.0, 0.0));
        assert_eq!(layout.size.height, 10_000.0);

        let sketch = render_sketch(&layout, &items, 72);
        let rows = sketch.lines().count();
        assert!(rows > 0 && rows <= MAX_SKETCH_ROWS);
        // The last card still reaches the bottom line.
        assert!(sketch.lines().last().is_some_and(|l| l.contains('V')));
    }

    #[test]
    fn sketch_disabled() {
        let (layout, items) = laid_out(&[40.0]);
        assert!(render_sketch(&layout, &items, 0).is_empty());
    }
}
