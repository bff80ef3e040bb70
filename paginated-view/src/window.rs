use core::ops::Range;

/// The render window: `radius` pages on each side of `selected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow {
    pub selected: usize,
    pub radius: usize,
}

impl PageWindow {
    pub fn new(selected: usize, radius: usize) -> Self {
        Self { selected, radius }
    }

    /// `selected - radius <= index <= selected + radius`, without overflow at either edge.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.selected.saturating_sub(self.radius)
            && index <= self.selected.saturating_add(self.radius)
    }

    /// The window clamped to `0..count` as a half-open range.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = self.selected.saturating_sub(self.radius).min(count);
        let end = self
            .selected
            .saturating_add(self.radius)
            .saturating_add(1)
            .min(count);
        start..end.max(start)
    }
}
