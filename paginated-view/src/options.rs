use alloc::sync::Arc;

use crate::PagerState;

/// A callback fired with the new page index after each scroll settle.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired when render-relevant state changes (selected index, viewport width, scroll
/// phase, options).
///
/// Adapters typically use it to schedule a re-render. Growth of the rendered-page set does not
/// fire it.
pub type OnChangeCallback = Arc<dyn Fn(PagerState) + Send + Sync>;

/// Outer container sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerStyle {
    /// Fill the space offered by the parent.
    #[default]
    Fill,
    Fixed {
        width: u32,
        height: u32,
    },
}

/// Configuration for [`crate::PaginatedView`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct PaginatedViewOptions {
    pub style: ContainerStyle,

    /// Allows gesture scrolling. Only effective while `animated` is also set.
    pub scroll_enabled: bool,

    /// Enables paging animation. Also the default `animate` flag of `goto`.
    ///
    /// When `false`, the surface stays non-interactive and pages change only via `goto`.
    pub animated: bool,

    pub shows_horizontal_scroll_indicator: bool,

    pub on_index_change: Option<OnIndexChangeCallback>,

    /// Keep pages that were mounted in full once, even after they leave the render window.
    pub keep_already_rendered: bool,

    /// Render window radius around the selected page. `0` renders only the selected page.
    pub cached_page_count: usize,

    /// Explicit page width. `Some(0)` is treated as unset.
    pub container_width: Option<u32>,

    /// Use the measured layout width (see `PaginatedView::on_layout`) instead of
    /// `container_width` / the window width.
    pub dynamic_width: bool,

    pub on_change: Option<OnChangeCallback>,
}

impl Default for PaginatedViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginatedViewOptions {
    pub fn new() -> Self {
        Self {
            style: ContainerStyle::Fill,
            scroll_enabled: true,
            animated: true,
            shows_horizontal_scroll_indicator: false,
            on_index_change: None,
            keep_already_rendered: true,
            cached_page_count: 3,
            container_width: None,
            dynamic_width: false,
            on_change: None,
        }
    }

    pub fn with_style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_scroll_enabled(mut self, scroll_enabled: bool) -> Self {
        self.scroll_enabled = scroll_enabled;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_shows_horizontal_scroll_indicator(mut self, shows: bool) -> Self {
        self.shows_horizontal_scroll_indicator = shows;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_keep_already_rendered(mut self, keep: bool) -> Self {
        self.keep_already_rendered = keep;
        self
    }

    pub fn with_cached_page_count(mut self, cached_page_count: usize) -> Self {
        self.cached_page_count = cached_page_count;
        self
    }

    pub fn with_container_width(mut self, container_width: Option<u32>) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_dynamic_width(mut self, dynamic_width: bool) -> Self {
        self.dynamic_width = dynamic_width;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(PagerState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Whether the surface accepts scroll gestures.
    pub fn gesture_scroll_enabled(&self) -> bool {
        self.scroll_enabled && self.animated
    }

    pub(crate) fn explicit_width(&self) -> Option<u32> {
        self.container_width.filter(|w| *w > 0)
    }
}

impl core::fmt::Debug for PaginatedViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaginatedViewOptions")
            .field("style", &self.style)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("animated", &self.animated)
            .field(
                "shows_horizontal_scroll_indicator",
                &self.shows_horizontal_scroll_indicator,
            )
            .field("keep_already_rendered", &self.keep_already_rendered)
            .field("cached_page_count", &self.cached_page_count)
            .field("container_width", &self.container_width)
            .field("dynamic_width", &self.dynamic_width)
            .finish_non_exhaustive()
    }
}
