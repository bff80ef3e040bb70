/// A lightweight, serializable snapshot of a pager's render-relevant state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub selected_index: usize,
    pub is_scrolling: bool,
    /// Resolved page width at capture time. Informational on restore.
    pub viewport_width: u32,
}
