//! Icicle controls demo.
//!
//! Generates a deck of sample cards and flows them through a ColumnsPanel
//! at each configured width, then again under each column template,
//! printing a per-column summary and an ASCII sketch of the result.
//! Pass a TOML config path as the first argument or in ICICLE_DEMO_CONFIG.

mod demo_config;
mod report;
mod sample;

use anyhow::Result;

use demo_config::DemoConfig;
use icicle_ui::{ColumnsPanel, Size};
use sample::SampleItem;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::resolve(std::env::args().nth(1))?;
    let demo = &config.demo;
    log::info!(
        "Laying out {} card(s) at {} width(s) and {} template(s)",
        demo.item_count,
        demo.widths.len(),
        demo.templates.len(),
    );

    let mut items = sample::generate(
        demo.item_count,
        demo.seed,
        demo.min_height,
        demo.height_spread,
    );

    let mut panel = ColumnsPanel::new(config.panel.clone());
    panel.on_property_changed(|property| log::info!("Panel property changed: {property:?}"));

    for &width in &demo.widths {
        print_layout(&mut panel, &mut items, width, &format!("{width}px"), demo.sketch_columns);
    }

    let Some(&width) = demo.widths.last() else {
        return Ok(());
    };
    for template in &demo.templates {
        panel.set_column_spec(template.as_str());
        print_layout(
            &mut panel,
            &mut items,
            width,
            &format!("{width}px \"{template}\""),
            demo.sketch_columns,
        );
    }

    Ok(())
}

fn print_layout(
    panel: &mut ColumnsPanel,
    items: &mut [SampleItem],
    width: f64,
    title: &str,
    sketch_columns: usize,
) {
    let layout = panel.layout(items, Size::new(width, 0.0));
    print!("{}", report::render_summary(title, &layout));
    let sketch = report::render_sketch(&layout, items, sketch_columns);
    if !sketch.is_empty() {
        println!();
        print!("{sketch}");
    }
    println!();
}
