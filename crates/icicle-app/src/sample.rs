//! Sample cards: fixed-height items that fill their column.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use icicle_ui::{FixedItem, LayoutItem, Rect, Size};

/// A labelled, colored card.
#[derive(Debug, Clone)]
pub struct SampleItem {
    pub text: String,
    pub color: [u8; 3],
    card: FixedItem,
}

impl SampleItem {
    pub fn new(text: impl Into<String>, height: f64, color: [u8; 3]) -> Self {
        Self {
            text: text.into(),
            color,
            card: FixedItem::stretched(height),
        }
    }

    pub fn height(&self) -> f64 {
        self.card.natural.height
    }

    pub fn placed(&self) -> Option<Rect> {
        self.card.placed()
    }
}

impl LayoutItem for SampleItem {
    fn measure(&mut self, available: Size) -> Size {
        self.card.measure(available)
    }

    fn desired_size(&self) -> Size {
        self.card.desired_size()
    }

    fn arrange(&mut self, rect: Rect) {
        self.card.arrange(rect);
    }
}

/// Generate `count` cards labelled `Item 1..=count`, each
/// `min_height + [0, spread)` tall, from a seeded RNG.
pub fn generate(count: usize, seed: u64, min_height: f64, spread: f64) -> Vec<SampleItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|i| {
            let extra = if spread > 0.0 {
                rng.gen_range(0.0..spread).floor()
            } else {
                0.0
            };
            let color = [rng.r#gen(), rng.r#gen(), rng.r#gen()];
            SampleItem::new(format!("Item {i}"), min_height + extra, color)
        })
        .collect()
}
