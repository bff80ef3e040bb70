use paginated_view::{PageSlot, PaginatedView, ScrollTo, SurfaceProps};

use crate::{ScrollSurface, SimulatedSurface, SurfaceEvent};

/// A framework-neutral controller that wires a `paginated_view::PaginatedView` to a host scroll
/// surface.
///
/// Adapters drive it by calling:
/// - `on_layout` / `on_window_resize` when geometry changes
/// - `on_momentum_scroll_begin` / `on_momentum_scroll_end` when the surface reports momentum
/// - `handle().goto(..)` for programmatic navigation
#[derive(Clone, Debug)]
pub struct Controller<T, S> {
    view: PaginatedView<T>,
    surface: S,
}

impl<T, S: ScrollSurface> Controller<T, S> {
    pub fn new(view: PaginatedView<T>, surface: S) -> Self {
        Self { view, surface }
    }

    pub fn view(&self) -> &PaginatedView<T> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PaginatedView<T> {
        &mut self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (PaginatedView<T>, S) {
        (self.view, self.surface)
    }

    pub fn surface_props(&self) -> SurfaceProps {
        self.view.surface_props()
    }

    /// Runs a render pass; see `PaginatedView::render_pages`.
    pub fn render_pages(&mut self, f: impl FnMut(PageSlot, Option<&T>)) {
        self.view.render_pages(f);
    }

    pub fn on_layout(&mut self, width: u32) {
        self.view.on_layout(width);
    }

    pub fn on_window_resize(&mut self, width: u32) {
        self.view.set_window_width(width);
    }

    pub fn on_momentum_scroll_begin(&mut self) {
        self.view.on_scroll_begin();
    }

    /// Returns the page the view settled on.
    pub fn on_momentum_scroll_end(&mut self, offset_x: f64) -> usize {
        self.view.on_scroll_end(offset_x)
    }

    pub fn dispatch(&mut self, event: SurfaceEvent) {
        apply_event(&mut self.view, event);
    }

    /// The imperative navigation handle for callers that don't own the controller's events.
    pub fn handle(&mut self) -> PagerHandle<'_, T, S> {
        PagerHandle {
            view: &self.view,
            surface: &mut self.surface,
        }
    }
}

impl<T> Controller<T, SimulatedSurface> {
    /// Advances the simulated surface and feeds its momentum events into the view.
    pub fn tick(&mut self, now_ms: u64) {
        let view = &mut self.view;
        self.surface.tick(now_ms, |event| {
            atrace!(?event, now_ms, "Controller::tick");
            apply_event(view, event);
        });
    }
}

fn apply_event<T>(view: &mut PaginatedView<T>, event: SurfaceEvent) {
    match event {
        SurfaceEvent::MomentumBegin => view.on_scroll_begin(),
        SurfaceEvent::MomentumEnd { x } => {
            view.on_scroll_end(x);
        }
    }
}

/// Imperative navigation handle: `goto` is its only operation.
pub struct PagerHandle<'a, T, S> {
    view: &'a PaginatedView<T>,
    surface: &'a mut S,
}

impl<T, S: ScrollSurface> PagerHandle<'_, T, S> {
    /// Scrolls the surface to page `index`.
    ///
    /// Does nothing while a scroll is in progress or when `index` is past the last page.
    /// `animate` defaults to the view's `animated` option. The selected page changes once the
    /// surface reports the settle.
    pub fn goto(&mut self, index: usize, animate: Option<bool>) -> Option<ScrollTo> {
        let cmd = self.view.goto(index, animate)?;
        adebug!(index, x = cmd.x, animated = cmd.animated, "PagerHandle::goto");
        self.surface.scroll_to(cmd.x, cmd.animated);
        Some(cmd)
    }
}
