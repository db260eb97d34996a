//! The host-side interface of a laid-out child.
//!
//! A panel never owns its children's content. It asks each child how big it
//! wants to be for a given constraint and later tells it where to go; both
//! directions go through [`LayoutItem`].

use icicle_types::geometry::{Rect, Size};

/// A child that can be measured and placed by a panel.
pub trait LayoutItem {
    /// Compute the natural size for the `available` constraint and remember
    /// it as the desired size. Either dimension may be infinite.
    fn measure(&mut self, available: Size) -> Size;

    /// The size produced by the most recent [`measure`](Self::measure).
    fn desired_size(&self) -> Size;

    /// Commit the final rectangle, relative to the panel's origin.
    fn arrange(&mut self, rect: Rect);
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn measure(&mut self, available: Size) -> Size {
        (**self).measure(available)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect);
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &mut T {
    fn measure(&mut self, available: Size) -> Size {
        (**self).measure(available)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect);
    }
}

/// A child with a fixed natural size.
///
/// With `stretch` set the item takes the full width it is offered, the way
/// a card bound to the column width behaves; otherwise its width is the
/// natural width capped at the offered width.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedItem {
    pub natural: Size,
    pub stretch: bool,
    desired: Size,
    placed: Option<Rect>,
}

impl FixedItem {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            natural: Size::new(width, height),
            stretch: false,
            desired: Size::ZERO,
            placed: None,
        }
    }

    /// An item of the given height that fills its column's width.
    pub fn stretched(height: f64) -> Self {
        Self {
            stretch: true,
            ..Self::new(0.0, height)
        }
    }

    /// Rectangle from the last arrange, if any.
    pub fn placed(&self) -> Option<Rect> {
        self.placed
    }
}

impl LayoutItem for FixedItem {
    fn measure(&mut self, available: Size) -> Size {
        let width = if self.stretch {
            available.width
        } else {
            self.natural.width.min(available.width)
        };
        self.desired = Size::new(width, self.natural.height);
        self.desired
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, rect: Rect) {
        self.placed = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_item_caps_width() {
        let mut item = FixedItem::new(250.0, 40.0);
        let size = item.measure(Size::new(200.0, f64::INFINITY));
        assert_eq!(size, Size::new(200.0, 40.0));
        assert_eq!(item.desired_size(), size);
    }

    #[test]
    fn fixed_item_keeps_narrow_width() {
        let mut item = FixedItem::new(120.0, 40.0);
        assert_eq!(
            item.measure(Size::new(200.0, f64::INFINITY)),
            Size::new(120.0, 40.0)
        );
    }

    #[test]
    fn stretched_item_fills_width() {
        let mut item = FixedItem::stretched(75.0);
        assert_eq!(
            item.measure(Size::new(180.0, f64::INFINITY)),
            Size::new(180.0, 75.0)
        );
    }

    #[test]
    fn unmeasured_item_has_zero_size() {
        let item = FixedItem::new(10.0, 10.0);
        assert_eq!(item.desired_size(), Size::ZERO);
        assert!(item.placed().is_none());
    }

    #[test]
    fn arrange_records_rect() {
        let mut item = FixedItem::new(10.0, 10.0);
        item.arrange(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(item.placed(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn boxed_items_delegate() {
        let mut items: Vec<Box<dyn LayoutItem>> = vec![Box::new(FixedItem::new(10.0, 20.0))];
        let size = items[0].measure(Size::new(100.0, 100.0));
        assert_eq!(size, Size::new(10.0, 20.0));
        assert_eq!(items[0].desired_size(), size);
    }
}
