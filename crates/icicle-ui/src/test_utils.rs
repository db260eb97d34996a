//! Shared test utilities for icicle-ui layout tests.
//!
//! Provides a [`RecordingItem`] that records every measure and arrange call
//! for assertion.

use icicle_types::geometry::{Rect, Size};

use crate::item::LayoutItem;

/// A recorded call made by a panel on one of its children.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Measure(Size),
    Arrange(Rect),
}

/// A child of fixed height that fills the width it is offered and records
/// all calls.
pub struct RecordingItem {
    pub height: f64,
    pub calls: Vec<RecordedCall>,
    desired: Size,
}

impl RecordingItem {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            calls: Vec::new(),
            desired: Size::ZERO,
        }
    }

    /// Count of `Measure` calls.
    pub fn measure_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Measure(_)))
            .count()
    }

    /// Count of `Arrange` calls.
    pub fn arrange_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Arrange(_)))
            .count()
    }

    /// Rectangle from the most recent arrange.
    pub fn last_rect(&self) -> Option<Rect> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::Arrange(r) => Some(*r),
            RecordedCall::Measure(_) => None,
        })
    }
}

impl LayoutItem for RecordingItem {
    fn measure(&mut self, available: Size) -> Size {
        self.calls.push(RecordedCall::Measure(available));
        self.desired = Size::new(available.width, self.height);
        self.desired
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.calls.push(RecordedCall::Arrange(rect));
    }
}
