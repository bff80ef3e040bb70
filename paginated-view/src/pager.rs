use alloc::vec::Vec;
use core::cell::Cell;

use crate::rendered::RenderedSet;
use crate::{
    Children, PageContent, PageSlot, PageWindow, PagerState, PaginatedViewOptions, ScrollPhase,
    ScrollTo, SurfaceProps,
};

/// A headless, horizontally paged view over a fixed sequence of pages.
///
/// This type holds no UI objects. The host drives it:
/// - window size / layout measurements (`set_window_width`, `on_layout`)
/// - momentum scroll events (`on_scroll_begin`, `on_scroll_end`)
/// - a render pass (`render_pages`) that decides, per page, between real content and a
///   placeholder
///
/// Programmatic navigation goes through [`PaginatedView::goto`], which returns the scroll command
/// for the host's scroll surface. The selected index only changes when that scroll settles.
#[derive(Clone, Debug)]
pub struct PaginatedView<T> {
    options: PaginatedViewOptions,
    pages: Vec<T>,
    selected_index: usize,
    phase: ScrollPhase,
    window_width: u32,
    measured_width: Option<u32>,
    rendered: RenderedSet,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> PaginatedView<T> {
    /// Creates a view over `children`.
    ///
    /// `window_width` is the display width used when no explicit or measured width is available.
    pub fn new(
        children: impl Into<Children<T>>,
        options: PaginatedViewOptions,
        window_width: u32,
    ) -> Self {
        let pages = children.into().into_pages();
        pdebug!(
            count = pages.len(),
            cached_page_count = options.cached_page_count,
            keep_already_rendered = options.keep_already_rendered,
            window_width,
            "PaginatedView::new"
        );
        Self {
            options,
            pages,
            selected_index: 0,
            phase: ScrollPhase::Idle,
            window_width,
            measured_width: None,
            rendered: RenderedSet::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PaginatedViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PaginatedViewOptions) {
        self.options = options;
        ptrace!(
            cached_page_count = self.options.cached_page_count,
            dynamic_width = self.options.dynamic_width,
            "PaginatedView::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PaginatedViewOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self.state());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&T> {
        self.pages.get(index)
    }

    /// Replaces the page sequence.
    ///
    /// The selected index is clamped into the new range. The rendered-page set is kept as is.
    pub fn set_pages(&mut self, children: impl Into<Children<T>>) {
        self.pages = children.into().into_pages();
        let max = self.pages.len().saturating_sub(1);
        if self.selected_index > max {
            pwarn!(
                selected_index = self.selected_index,
                count = self.pages.len(),
                "set_pages: clamping selected index"
            );
            self.selected_index = max;
        }
        self.notify();
    }

    pub fn item_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase == ScrollPhase::Scrolling
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn measured_width(&self) -> Option<u32> {
        self.measured_width
    }

    /// The width of one page slot.
    ///
    /// Resolution order: the measured layout width (only with `dynamic_width`), then a non-zero
    /// `container_width`, then the window width.
    pub fn viewport_width(&self) -> u32 {
        if self.options.dynamic_width {
            if let Some(w) = self.measured_width {
                return w;
            }
        }
        self.options.explicit_width().unwrap_or(self.window_width)
    }

    pub fn total_width(&self) -> u64 {
        (self.pages.len() as u64).saturating_mul(self.viewport_width() as u64)
    }

    /// Updates the display width (e.g. after a rotation or window resize).
    pub fn set_window_width(&mut self, width: u32) {
        if self.window_width == width {
            return;
        }
        let prev = self.viewport_width();
        self.window_width = width;
        ptrace!(width, "set_window_width");
        if self.viewport_width() != prev {
            self.notify();
        }
    }

    /// Applies a layout measurement from the host.
    ///
    /// Ignored unless `dynamic_width` is enabled.
    pub fn on_layout(&mut self, width: u32) {
        if !self.options.dynamic_width {
            return;
        }
        if self.measured_width == Some(width) {
            return;
        }
        let prev = self.viewport_width();
        self.measured_width = Some(width);
        ptrace!(width, "on_layout");
        if self.viewport_width() != prev {
            self.notify();
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.selected_index, self.options.cached_page_count)
    }

    /// Whether page `index` should be mounted in full right now.
    ///
    /// True inside the render window, or when `keep_already_rendered` is set and the page was
    /// mounted in full before.
    pub fn should_render_page(&self, index: usize) -> bool {
        self.window().contains(index)
            || (self.options.keep_already_rendered && self.rendered.contains(index))
    }

    pub fn was_rendered(&self, index: usize) -> bool {
        self.rendered.contains(index)
    }

    /// Indexes of every page mounted in full so far, ascending.
    pub fn rendered_indexes(&self) -> Vec<usize> {
        self.rendered.sorted()
    }

    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// Returns the slot for `index` without recording it as rendered.
    pub fn page_slot(&self, index: usize) -> Option<PageSlot> {
        if index >= self.pages.len() {
            return None;
        }
        let content = if self.should_render_page(index) {
            PageContent::Full
        } else {
            PageContent::Placeholder
        };
        Some(slot(index, self.viewport_width(), content))
    }

    /// Runs a render pass over every page, in order.
    ///
    /// `f` receives the slot and, for pages mounted in full, the page itself. Pages mounted in
    /// full are recorded in the rendered-page set.
    pub fn render_pages(&mut self, mut f: impl FnMut(PageSlot, Option<&T>)) {
        let width = self.viewport_width();
        let window = self.window();
        let keep = self.options.keep_already_rendered;

        for (index, page) in self.pages.iter().enumerate() {
            let full = window.contains(index) || (keep && self.rendered.contains(index));
            if full {
                if self.rendered.insert(index) {
                    ptrace!(index, "render_pages: first full render");
                }
                f(slot(index, width, PageContent::Full), Some(page));
            } else {
                f(slot(index, width, PageContent::Placeholder), None);
            }
        }
    }

    /// Collects the slots of a render pass into `out` (clears `out` first).
    pub fn collect_pages(&mut self, out: &mut Vec<PageSlot>) {
        out.clear();
        out.reserve(self.pages.len());
        self.render_pages(|slot, _| out.push(slot));
    }

    pub fn surface_props(&self) -> SurfaceProps {
        SurfaceProps {
            style: self.options.style,
            horizontal: true,
            paging_enabled: true,
            bounces: false,
            scroll_enabled: self.options.gesture_scroll_enabled(),
            shows_horizontal_scroll_indicator: self.options.shows_horizontal_scroll_indicator,
            content_width: self.total_width(),
            page_width: self.viewport_width(),
            wants_layout: self.options.dynamic_width,
        }
    }

    pub fn offset_for_index(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.viewport_width() as u64)
    }

    /// Maps a horizontal offset to the nearest page (half-way rounds up).
    ///
    /// Negative or NaN offsets map to page `0`, as does a zero viewport width. The result is
    /// clamped to the last page.
    pub fn index_for_offset(&self, offset_x: f64) -> usize {
        let width = self.viewport_width();
        if width == 0 {
            return 0;
        }
        let index = round_half_up(offset_x / width as f64);
        let max = self.pages.len().saturating_sub(1);
        usize::try_from(index).unwrap_or(usize::MAX).min(max)
    }

    /// Computes the scroll command that brings page `index` into view.
    ///
    /// Returns `None` while a scroll is in progress, or when `index` is past the last page. The
    /// selected index is not touched: it follows once the host reports the settle.
    ///
    /// `animate` defaults to the `animated` option.
    pub fn goto(&self, index: usize, animate: Option<bool>) -> Option<ScrollTo> {
        if self.is_scrolling() {
            ptrace!(index, "goto: dropped while scrolling");
            return None;
        }
        if index >= self.pages.len() {
            ptrace!(index, count = self.pages.len(), "goto: index out of range");
            return None;
        }
        let cmd = ScrollTo {
            x: self.offset_for_index(index),
            animated: animate.unwrap_or(self.options.animated),
        };
        pdebug!(index, x = cmd.x, animated = cmd.animated, "goto");
        Some(cmd)
    }

    /// Momentum scroll started: Idle -> Scrolling.
    pub fn on_scroll_begin(&mut self) {
        if self.phase == ScrollPhase::Scrolling {
            return;
        }
        ptrace!("on_scroll_begin");
        self.phase = ScrollPhase::Scrolling;
        self.notify();
    }

    /// Momentum scroll settled at `offset_x`: Scrolling -> Idle.
    ///
    /// Selects the page nearest to `offset_x`, invokes `on_index_change` once with it, and
    /// returns it.
    pub fn on_scroll_end(&mut self, offset_x: f64) -> usize {
        let final_index = self.index_for_offset(offset_x);
        pdebug!(
            offset_x,
            final_index,
            previous = self.selected_index,
            "on_scroll_end"
        );
        self.batch_update(|v| {
            if v.phase != ScrollPhase::Idle {
                v.phase = ScrollPhase::Idle;
                v.notify();
            }
            if v.selected_index != final_index {
                v.selected_index = final_index;
                v.notify();
            }
        });
        if let Some(cb) = &self.options.on_index_change {
            cb(final_index);
        }
        final_index
    }

    pub fn state(&self) -> PagerState {
        PagerState {
            selected_index: self.selected_index,
            is_scrolling: self.is_scrolling(),
            viewport_width: self.viewport_width(),
        }
    }

    /// Restores the selected index (clamped) and scroll phase from a snapshot.
    pub fn restore_state(&mut self, state: PagerState) {
        let max = self.pages.len().saturating_sub(1);
        self.selected_index = state.selected_index.min(max);
        self.phase = if state.is_scrolling {
            ScrollPhase::Scrolling
        } else {
            ScrollPhase::Idle
        };
        self.notify();
    }
}

fn slot(index: usize, width: u32, content: PageContent) -> PageSlot {
    PageSlot {
        index,
        start: (index as u64).saturating_mul(width as u64),
        width,
        content,
    }
}

fn round_half_up(v: f64) -> u64 {
    // `!(v > 0.0)` also catches NaN.
    if !(v > 0.0) {
        return 0;
    }
    (v + 0.5) as u64
}
