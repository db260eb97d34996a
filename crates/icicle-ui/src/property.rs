//! Property change notification for panels.
//!
//! Every panel option affects measurement. Setting one to a new value
//! invalidates the panel's measure and tells each subscribed observer which
//! property changed, so a host can schedule a new layout pass.

use std::fmt;

/// A configurable panel property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelProperty {
    Gap,
    ColumnGap,
    ColumnWidth,
    MinColumns,
    MaxColumns,
    ColumnSpec,
    Width,
    MinWidth,
    MaxWidth,
}

/// Handler invoked with the property that changed.
pub type PropertyHandler = Box<dyn FnMut(PanelProperty)>;

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// Ordered list of property change handlers.
#[derive(Default)]
pub struct PropertyObservers {
    handlers: Vec<(usize, PropertyHandler)>,
    next_id: usize,
}

impl PropertyObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers run in subscription order.
    pub fn subscribe(&mut self, handler: impl FnMut(PanelProperty) + 'static) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        ObserverId(id)
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(hid, _)| *hid != id.0);
        self.handlers.len() != before
    }

    /// Invoke every handler with `property`.
    pub fn notify(&mut self, property: PanelProperty) {
        for (_, handler) in &mut self.handlers {
            handler(property);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for PropertyObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_reaches_all_handlers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = PropertyObservers::new();
        let a = Rc::clone(&log);
        observers.subscribe(move |p| a.borrow_mut().push(("a", p)));
        let b = Rc::clone(&log);
        observers.subscribe(move |p| b.borrow_mut().push(("b", p)));

        observers.notify(PanelProperty::Gap);
        assert_eq!(
            *log.borrow(),
            vec![("a", PanelProperty::Gap), ("b", PanelProperty::Gap)]
        );
    }

    #[test]
    fn unsubscribe_removes_handler() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = PropertyObservers::new();
        let c = Rc::clone(&count);
        let id = observers.subscribe(move |_| *c.borrow_mut() += 1);
        assert_eq!(observers.len(), 1);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());

        observers.notify(PanelProperty::MaxColumns);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut observers = PropertyObservers::new();
        let first = observers.subscribe(|_| {});
        observers.unsubscribe(first);
        let second = observers.subscribe(|_| {});
        assert_ne!(first, second);
    }

    #[test]
    fn debug_shows_handler_count() {
        let mut observers = PropertyObservers::new();
        observers.subscribe(|_| {});
        assert!(format!("{observers:?}").contains("handlers: 1"));
    }
}
