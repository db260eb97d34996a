//! icicle-ui: framework-agnostic controls.
//!
//! The centerpiece is [`ColumnsPanel`], a panel that flows variable-height
//! children into fixed or proportional width columns, always filling the
//! shortest column next. Hosts plug their own measurement and placement in
//! through the [`LayoutItem`] trait; nothing here renders.

pub mod columns;
pub mod item;
pub mod navigation;
pub mod property;

#[cfg(test)]
pub(crate) mod test_utils;

pub use columns::{ColumnsLayout, ColumnsPanel, Placement};
pub use icicle_types::config::PanelConfig;
pub use icicle_types::geometry::{Rect, Size};
pub use icicle_types::input::NavigationDirection;
pub use item::{FixedItem, LayoutItem};
pub use property::PanelProperty;
