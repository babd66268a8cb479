use scroll_window::{ScrollWindowOptions, ViewportGeometry};
use scroll_window_adapter::{ElementAttrs, ManualRegion, VirtualScrollContainer};

fn main() -> Result<(), scroll_window::OptionsError> {
    // Simulate a host: the region stands in for the real scroll container, and every
    // `set_scroll_top` is a scroll event delivered to the tracker.
    let region = ManualRegion::new();
    let rows: Vec<String> = (0..10_000).map(|i| format!("row {i}")).collect();

    let mut list = VirtualScrollContainer::new(rows, ScrollWindowOptions::new(24.0)?)?
        .with_get_child_props(|_, i| ElementAttrs::new().with_attr("key", i.to_string()))
        .with_container_props(ElementAttrs::new().with_style("height", "480px"))
        .with_on_window_change(|w| println!("window -> {:?}", w.range()))
        .with_on_children_rendered(|slice: &[String]| {
            println!("rendered {} rows", slice.len());
        });

    // Not laid out yet: attaching defers the first computation.
    list.attach(region.clone());
    println!("pending={}", list.tracker().is_pending());

    region.set_geometry(ViewportGeometry::new(0.0, 480.0));
    let mut scroll_top = 0.0;
    while scroll_top < 2_000.0 {
        scroll_top += 7.5;
        region.set_scroll_top(scroll_top);
        let plan = list.render();
        if let (Some(first), Some(last)) = (plan.items.first(), plan.items.last()) {
            if scroll_top % 240.0 == 0.0 {
                println!(
                    "t={scroll_top} first={} last={} transform={:?}",
                    first.item,
                    last.item,
                    first.attrs.style("transform")
                );
            }
        }
    }

    list.detach();
    println!("listeners after detach={}", region.listener_count());
    Ok(())
}
