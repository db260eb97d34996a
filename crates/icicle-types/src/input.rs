//! Focus navigation directions.
//!
//! Hosts map their native key handling onto these values before asking a
//! panel which child should receive focus next.

use serde::{Deserialize, Serialize};

/// Direction of a focus move between the children of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationDirection {
    /// First child.
    First,
    /// Last child.
    Last,
    /// Next child in document order.
    Next,
    /// Previous child in document order.
    Previous,
    Left,
    Right,
    Up,
    Down,
}

impl NavigationDirection {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::First,
        Self::Last,
        Self::Next,
        Self::Previous,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_distinct() {
        use std::collections::HashSet;
        let set: HashSet<_> = NavigationDirection::ALL.iter().collect();
        assert_eq!(set.len(), NavigationDirection::ALL.len());
    }

    #[test]
    fn direction_debug_format() {
        assert_eq!(format!("{:?}", NavigationDirection::Previous), "Previous");
    }

    #[test]
    fn direction_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            dir: NavigationDirection,
        }
        let w: Wrapper = toml::from_str("dir = \"Down\"").unwrap();
        assert_eq!(w.dir, NavigationDirection::Down);
    }
}
