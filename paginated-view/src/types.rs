use crate::ContainerStyle;

/// The two states of the scroll event interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
}

/// What the host should mount inside a page slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageContent {
    /// Mount the real page content.
    Full,
    /// Mount a lightweight loading indicator instead.
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSlot {
    pub index: usize,
    /// Start offset on the horizontal axis (`index * width`).
    pub start: u64,
    pub width: u32,
    pub content: PageContent,
}

impl PageSlot {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.width as u64)
    }

    pub fn is_full(&self) -> bool {
        self.content == PageContent::Full
    }
}

/// A scroll command for the host's scroll surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTo {
    pub x: u64,
    pub animated: bool,
}

/// Props the host should apply to its horizontal scroll surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceProps {
    pub style: ContainerStyle,
    pub horizontal: bool,
    pub paging_enabled: bool,
    pub bounces: bool,
    /// Gesture scrolling; requires both `scroll_enabled` and `animated`.
    pub scroll_enabled: bool,
    pub shows_horizontal_scroll_indicator: bool,
    /// Total scrollable width (`item_count * page_width`).
    pub content_width: u64,
    pub page_width: u32,
    /// Whether the host should report layout measurements via `on_layout`.
    pub wants_layout: bool,
}
