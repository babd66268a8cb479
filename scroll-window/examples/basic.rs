// Example: compute windows for a long list while scrolling through it.
use scroll_window::{ScrollWindowOptions, ViewportGeometry};

fn main() -> Result<(), scroll_window::OptionsError> {
    let options = ScrollWindowOptions::new(50.0)?.with_container_buffer_size(1.5);
    let item_count = 1_000;
    println!("total_height={}", options.total_height(item_count));

    for scroll_top in [0.0, 1_000.0, 2_000.0, 49_500.0] {
        let window = options.window_for(ViewportGeometry::new(scroll_top, 500.0), item_count);
        println!(
            "scroll_top={scroll_top} range={:?} offset={}",
            window.range(),
            window.element_offset_height
        );
    }
    Ok(())
}
