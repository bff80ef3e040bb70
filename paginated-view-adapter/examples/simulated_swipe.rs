// Example: drive a pager through a simulated scroll surface.
use paginated_view::{PaginatedView, PaginatedViewOptions};
use paginated_view_adapter::{Controller, Easing, SimulatedSurface};

fn main() {
    let view = PaginatedView::new(
        (0..6).collect::<Vec<u32>>(),
        PaginatedViewOptions::new().with_cached_page_count(1),
        400,
    );
    let mut c = Controller::new(view, SimulatedSurface::new(250, Easing::EaseOutCubic));

    let cmd = c.handle().goto(4, None);
    println!("goto(4) -> {cmd:?}");

    for now_ms in (0..=300).step_by(50) {
        c.tick(now_ms);
        println!(
            "t={now_ms:>3}ms offset={:>4} scrolling={} selected={}",
            c.surface().offset(),
            c.view().is_scrolling(),
            c.view().selected_index()
        );
    }

    let mut rendered = Vec::new();
    c.render_pages(|slot, _| rendered.push((slot.index, slot.content)));
    println!("pages={rendered:?}");
}
