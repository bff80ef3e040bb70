// Example: render window, settle-to-index and goto.
use paginated_view::{PageContent, PaginatedView, PaginatedViewOptions};

fn main() {
    let options = PaginatedViewOptions::new()
        .with_cached_page_count(1)
        .with_on_index_change(Some(|i: usize| println!("index changed: {i}")));
    let mut v = PaginatedView::new(
        (1..=8).map(|n| format!("page {n}")).collect::<Vec<_>>(),
        options,
        320,
    );

    print_pass(&mut v);

    // The host reports a fling that came to rest a little past page 2.
    v.on_scroll_begin();
    v.on_scroll_end(645.0);
    print_pass(&mut v);

    println!("goto(6) -> {:?}", v.goto(6, Some(false)));
    println!("goto(8) -> {:?}", v.goto(8, None));
    println!("surface={:?}", v.surface_props());
}

fn print_pass(v: &mut PaginatedView<String>) {
    let mut line = Vec::new();
    v.render_pages(|slot, page| match (slot.content, page) {
        (PageContent::Full, Some(page)) => line.push(page.clone()),
        _ => line.push("…".to_string()),
    });
    println!("selected={} [{}]", v.selected_index(), line.join(", "));
}
