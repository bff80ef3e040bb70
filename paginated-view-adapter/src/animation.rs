/// An animated page scroll on a [`crate::SimulatedSurface`].
///
/// A scroll requested through `ScrollSurface::scroll_to` has no clock, so it starts out pending
/// and is anchored to the first tick that observes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: u64,
    pub to: u64,
    /// `None` until the first tick after the request.
    pub started_at_ms: Option<u64>,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollAnimation {
    /// A pending animation from `from` to `to`.
    pub fn new(from: u64, to: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at_ms: None,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn starting_at(mut self, now_ms: u64) -> Self {
        self.started_at_ms = Some(now_ms);
        self
    }

    pub fn is_pending(&self) -> bool {
        self.started_at_ms.is_none()
    }

    /// Anchors a pending animation at `now_ms`. No-op once started.
    pub fn anchor(&mut self, now_ms: u64) {
        self.started_at_ms.get_or_insert(now_ms);
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        match self.started_at_ms {
            Some(start) => now_ms.saturating_sub(start) >= self.duration_ms,
            None => false,
        }
    }

    /// Offset at `now_ms`: `from` while pending, exactly `to` once done.
    pub fn offset_at(&self, now_ms: u64) -> u64 {
        let Some(start) = self.started_at_ms else {
            return self.from;
        };
        if self.is_done(now_ms) {
            return self.to;
        }
        let progress = now_ms.saturating_sub(start) as f64 / self.duration_ms as f64;
        let eased = self.easing.sample(progress.clamp(0.0, 1.0));
        let v = self.from as f64 + (self.to as f64 - self.from as f64) * eased;
        if v > 0.0 { v as u64 } else { 0 }
    }

    /// Redirects the animation to `to`, continuing from the offset reached at `now_ms`.
    ///
    /// The redirected animation is pending again.
    pub fn retarget(&mut self, now_ms: u64, to: u64) {
        self.from = self.offset_at(now_ms);
        self.to = to;
        self.started_at_ms = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Fast start, slow settle; the usual feel of a paging snap.
    #[default]
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
