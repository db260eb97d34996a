//! Focus navigation between a panel's children.
//!
//! Movement is by child index only. `Up` and `Down` step to the previous
//! and next child rather than to the neighbour in the same column, and
//! `Left`/`Right` have no target.

use icicle_types::input::NavigationDirection;

/// Index of the child reached from `current` by moving in `direction`, or
/// `None` when the move leaves the range `0..count` or is unsupported.
pub fn next_in_direction(
    count: usize,
    current: usize,
    direction: NavigationDirection,
) -> Option<usize> {
    let target = match direction {
        NavigationDirection::First => Some(0),
        NavigationDirection::Last => count.checked_sub(1),
        NavigationDirection::Next | NavigationDirection::Down => current.checked_add(1),
        NavigationDirection::Previous | NavigationDirection::Up => current.checked_sub(1),
        NavigationDirection::Left | NavigationDirection::Right => None,
    };
    target.filter(|&i| i < count)
}
