//! ColumnsPanel: variable-height children flowed into columns.
//!
//! The panel picks a column count from the available width (or from a
//! column template), measures every child at its column's width and stacks
//! it on whichever column is currently the shortest. Layout follows the
//! usual two-pass protocol:
//!
//! 1. [`ColumnsPanel::measure`] asks each child for its natural size and
//!    reports the panel's desired size.
//! 2. [`ColumnsPanel::arrange`] replays the same column assignment for the
//!    final size and places every child.
//!
//! Both passes are pure functions of `(children, size, config)`; nothing is
//! cached between them.

pub mod packing;
pub mod sizing;
pub mod template;

use icicle_types::config::PanelConfig;
use icicle_types::geometry::{Rect, Size};
use icicle_types::input::NavigationDirection;

use crate::item::LayoutItem;
use crate::navigation::next_in_direction;
use crate::property::{ObserverId, PanelProperty, PropertyObservers};

pub use packing::{ColumnStack, assign_columns, index_of_min};
pub use sizing::{columns_extent, resolve_column_count, resolve_column_widths};
pub use template::{ColumnDef, ColumnTemplate};

/// Where one child ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the child in the input sequence.
    pub index: usize,
    /// Column the child was stacked on.
    pub column: usize,
    /// Final rectangle, relative to the panel.
    pub rect: Rect,
}

/// Result of an arrange pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnsLayout {
    /// Size the panel occupies.
    pub size: Size,
    /// Resolved width of each column, before scaling.
    pub column_widths: Vec<f64>,
    /// Left edge of each column.
    pub column_lefts: Vec<f64>,
    /// Uniform factor applied to columns and children.
    pub scale: f64,
    /// One entry per child, in input order.
    pub placements: Vec<Placement>,
}

impl ColumnsLayout {
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Column of every child, in input order.
    pub fn assignment(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.column).collect()
    }

    /// Number of children stacked on each column.
    pub fn items_per_column(&self) -> Vec<usize> {
        let mut counts = vec![0; self.column_count()];
        for p in &self.placements {
            if let Some(c) = counts.get_mut(p.column) {
                *c += 1;
            }
        }
        counts
    }
}

/// A panel that lays out its children into columns of variable-height items.
#[derive(Debug, Default)]
pub struct ColumnsPanel {
    config: PanelConfig,
    observers: PropertyObservers,
    measure_valid: bool,
}

impl ColumnsPanel {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            observers: PropertyObservers::new(),
            measure_valid: false,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    // -- Properties -------------------------------------------------------

    /// Subscribe to property changes.
    pub fn on_property_changed(
        &mut self,
        handler: impl FnMut(PanelProperty) + 'static,
    ) -> ObserverId {
        self.observers.subscribe(handler)
    }

    /// Drop a subscription made with [`on_property_changed`](Self::on_property_changed).
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Whether the panel must be measured again before it is arranged.
    pub fn needs_measure(&self) -> bool {
        !self.measure_valid
    }

    /// Force the next layout pass to measure.
    pub fn invalidate_measure(&mut self) {
        self.measure_valid = false;
    }

    fn changed(&mut self, property: PanelProperty) {
        log::debug!("ColumnsPanel property changed: {property:?}");
        self.measure_valid = false;
        self.observers.notify(property);
    }

    pub fn set_gap(&mut self, gap: f64) {
        if self.config.gap != gap {
            self.config.gap = gap;
            self.changed(PanelProperty::Gap);
        }
    }

    pub fn set_column_gap(&mut self, column_gap: f64) {
        if self.config.column_gap != column_gap {
            self.config.column_gap = column_gap;
            self.changed(PanelProperty::ColumnGap);
        }
    }

    pub fn set_column_width(&mut self, column_width: f64) {
        if self.config.column_width != column_width {
            self.config.column_width = column_width;
            self.changed(PanelProperty::ColumnWidth);
        }
    }

    pub fn set_min_columns(&mut self, min_columns: u32) {
        if self.config.min_columns != min_columns {
            self.config.min_columns = min_columns;
            self.changed(PanelProperty::MinColumns);
        }
    }

    pub fn set_max_columns(&mut self, max_columns: u32) {
        if self.config.max_columns != max_columns {
            self.config.max_columns = max_columns;
            self.changed(PanelProperty::MaxColumns);
        }
    }

    /// Set the column template. Tokens that do not parse are reported once
    /// here and collapse to zero width during layout.
    pub fn set_column_spec(&mut self, spec: impl Into<String>) {
        let spec = spec.into();
        if self.config.column_spec == spec {
            return;
        }
        let template = ColumnTemplate::parse(&spec);
        if template.invalid_count() > 0 {
            log::warn!(
                "Column template {spec:?} has {} unparseable token(s); they collapse to zero width",
                template.invalid_count()
            );
        }
        self.config.column_spec = spec;
        self.changed(PanelProperty::ColumnSpec);
    }

    pub fn set_width(&mut self, width: Option<f64>) {
        if self.config.width != width {
            self.config.width = width;
            self.changed(PanelProperty::Width);
        }
    }

    pub fn set_min_width(&mut self, min_width: f64) {
        if self.config.min_width != min_width {
            self.config.min_width = min_width;
            self.changed(PanelProperty::MinWidth);
        }
    }

    pub fn set_max_width(&mut self, max_width: f64) {
        if self.config.max_width != max_width {
            self.config.max_width = max_width;
            self.changed(PanelProperty::MaxWidth);
        }
    }

    /// Replace the whole configuration, notifying once per changed property.
    pub fn set_config(&mut self, config: PanelConfig) {
        self.set_gap(config.gap);
        self.set_column_gap(config.column_gap);
        self.set_column_width(config.column_width);
        self.set_min_columns(config.min_columns);
        self.set_max_columns(config.max_columns);
        self.set_column_spec(config.column_spec);
        self.set_width(config.width);
        self.set_min_width(config.min_width);
        self.set_max_width(config.max_width);
    }

    // -- Layout -----------------------------------------------------------

    /// Number of columns for a given width.
    pub fn column_count(&self, width: f64) -> usize {
        resolve_column_count(width, &self.config)
    }

    /// Resolved column widths for a given width.
    pub fn column_widths(&self, width: f64) -> Vec<f64> {
        resolve_column_widths(width, self.column_count(width), &self.config)
    }

    /// Measure pass.
    ///
    /// Measures every child at its column's width with unbounded height and
    /// returns the panel's desired size: the columns' extent (widths plus
    /// inner gaps) by the tallest column without its trailing gap.
    pub fn measure<I: LayoutItem>(&mut self, items: &mut [I], available: Size) -> Size {
        let width = self.config.constrain_width(available.width);
        let widths = self.column_widths(width);
        let mut stack = ColumnStack::new(widths.len(), self.config.gap);

        for item in items.iter_mut() {
            let column = stack.shortest();
            let column_width = widths.get(column).copied().unwrap_or(0.0);
            let desired = item.measure(Size::new(column_width, f64::INFINITY));
            stack.push_to(column, desired.height);
        }

        let desired = Size::new(
            columns_extent(&widths, self.config.column_gap),
            stack.content_height(),
        );
        log::debug!(
            "ColumnsPanel measured {} item(s) into {} column(s) at width {width}: {}x{}",
            items.len(),
            widths.len(),
            desired.width,
            desired.height,
        );
        self.measure_valid = true;
        desired
    }

    /// Uniform shrink factor for a final width.
    ///
    /// Applies when the panel sits at `min_columns` and each of those
    /// columns would be narrower than `column_width`. A template counts
    /// too: its column count is compared against `min_columns` the same way.
    pub fn scale_for(&self, final_width: f64, column_count: usize) -> f64 {
        let config = &self.config;
        let min_columns = f64::from(config.min_columns);
        if column_count != config.min_columns as usize || config.min_columns == 0 {
            return 1.0;
        }
        if final_width / min_columns < config.column_width {
            let footprint = min_columns * (config.column_width + config.column_gap);
            if footprint > 0.0 {
                return final_width / footprint;
            }
        }
        1.0
    }

    /// Arrange pass.
    ///
    /// Replays the measure pass's column assignment using each child's
    /// desired size, then places children top to bottom within their
    /// column, scaled by [`scale_for`](Self::scale_for). The reported height
    /// is never less than `final_size.height`.
    pub fn arrange<I: LayoutItem>(&self, items: &mut [I], final_size: Size) -> ColumnsLayout {
        let gap = self.config.gap;
        let column_widths = self.column_widths(final_size.width);
        let count = column_widths.len();
        let scale = self.scale_for(final_size.width, count);

        let mut column_lefts = Vec::with_capacity(count);
        let mut left = 0.0;
        for width in &column_widths {
            column_lefts.push(left);
            left += width * scale + self.config.column_gap;
        }

        // Assignment runs on unscaled heights, exactly as in measure; the
        // scaled stack only tracks where each child's top edge lands.
        let mut assign = ColumnStack::new(count, gap);
        let mut tops = ColumnStack::new(count, gap);
        let mut placements = Vec::with_capacity(items.len());

        for (index, item) in items.iter_mut().enumerate() {
            let desired = item.desired_size();
            let (column, _) = assign.push(desired.height);
            let size = desired.scale(scale);
            let y = tops.push_to(column, size.height);
            let x = column_lefts.get(column).copied().unwrap_or(0.0);
            let rect = Rect::from_origin_size(x, y, size);
            log::trace!("ColumnsPanel item {index} -> column {column} at {rect:?}");
            item.arrange(rect);
            placements.push(Placement {
                index,
                column,
                rect,
            });
        }

        let size = Size::new(
            final_size.width,
            tops.content_height().max(final_size.height),
        );
        log::debug!(
            "ColumnsPanel arranged {} item(s) into {count} column(s) at scale {scale}: {}x{}",
            items.len(),
            size.width,
            size.height,
        );

        ColumnsLayout {
            size,
            column_widths,
            column_lefts,
            scale,
            placements,
        }
    }

    /// Run measure then arrange for `available`.
    ///
    /// The arrange width is the constrained available width, or the desired
    /// width when the available width is unbounded; the arrange height is
    /// the desired height.
    pub fn layout<I: LayoutItem>(&mut self, items: &mut [I], available: Size) -> ColumnsLayout {
        let desired = self.measure(items, available);
        let width = self.config.constrain_width(available.width);
        let width = if width.is_finite() {
            width
        } else {
            desired.width
        };
        self.arrange(items, Size::new(width, desired.height))
    }

    // -- Navigation -------------------------------------------------------

    /// Child reached from `current` by moving in `direction`.
    pub fn control_in_direction(
        &self,
        count: usize,
        current: usize,
        direction: NavigationDirection,
    ) -> Option<usize> {
        next_in_direction(count, current, direction)
    }
}
