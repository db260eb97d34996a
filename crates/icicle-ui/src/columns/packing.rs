//! Shortest-column-first packing.
//!
//! Each item goes to the column whose stack is currently the shortest, the
//! first such column winning ties. This is a greedy heuristic, not an
//! optimal partition, and the result depends on item order.

/// Index of the first minimum in `values`; `0` when empty.
///
/// Uses a strict `<` so equal values keep the earlier index. `NaN` entries
/// never win.
pub fn index_of_min(values: &[f64]) -> usize {
    let mut min_index = 0;
    let mut min = match values.first() {
        Some(v) => *v,
        None => return 0,
    };
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < min || min.is_nan() {
            min = v;
            min_index = i;
        }
    }
    min_index
}

/// Running height of every column during one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStack {
    heights: Vec<f64>,
    gap: f64,
    placed: usize,
}

impl ColumnStack {
    /// `count` empty columns with `gap` pixels between stacked items.
    pub fn new(count: usize, gap: f64) -> Self {
        Self {
            heights: vec![0.0; count],
            gap,
            placed: 0,
        }
    }

    /// Column the next item would go to.
    pub fn shortest(&self) -> usize {
        index_of_min(&self.heights)
    }

    /// Stack an item of `height` on the shortest column.
    ///
    /// Returns the chosen column and the item's top edge. With no columns
    /// this returns `(0, 0.0)` and records nothing.
    pub fn push(&mut self, height: f64) -> (usize, f64) {
        let column = self.shortest();
        let top = self.push_to(column, height);
        (column, top)
    }

    /// Stack an item of `height` on a given column, returning its top edge.
    pub fn push_to(&mut self, column: usize, height: f64) -> f64 {
        let Some(slot) = self.heights.get_mut(column) else {
            return 0.0;
        };
        let top = *slot;
        *slot += height + self.gap;
        self.placed += 1;
        top
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Number of items stacked so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Height of the tallest column without the trailing gap.
    pub fn content_height(&self) -> f64 {
        if self.placed == 0 {
            return 0.0;
        }
        let tallest = self
            .heights
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        tallest - self.gap
    }
}

/// Assign each height to a column, shortest column first.
///
/// This is the assignment both layout passes share; the result has one
/// entry per input height.
pub fn assign_columns<I>(heights: I, count: usize, gap: f64) -> Vec<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut stack = ColumnStack::new(count, gap);
    heights.into_iter().map(|h| stack.push(h).0).collect()
}
