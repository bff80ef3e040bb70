use alloc::collections::VecDeque;

use crate::{Easing, ScrollAnimation};

/// The host's horizontal scroll container.
///
/// Implementations execute scroll commands produced by `PaginatedView::goto`. They are expected
/// to report momentum begin/settle back through `Controller::on_momentum_scroll_begin` /
/// `Controller::on_momentum_scroll_end` (or `Controller::dispatch`).
pub trait ScrollSurface {
    fn scroll_to(&mut self, x: u64, animated: bool);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_to(&mut self, x: u64, animated: bool) {
        (**self).scroll_to(x, animated);
    }
}

/// A momentum event reported by a scroll surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceEvent {
    MomentumBegin,
    /// The surface came to rest at `x`.
    MomentumEnd { x: f64 },
}

/// A headless scroll surface for hosts without a native scroll container (TUIs, tests).
///
/// Animated scrolls run a [`ScrollAnimation`] advanced by [`SimulatedSurface::tick`]. A scroll
/// requested between ticks starts on the next tick, so it always animates from its current
/// offset no matter how long the host idled. Instant scrolls jump to the target. Both report a
/// momentum begin, then a settle at the target offset.
#[derive(Clone, Debug)]
pub struct SimulatedSurface {
    offset: u64,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
    animation: Option<ScrollAnimation>,
    pending: VecDeque<SurfaceEvent>,
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new(300, Easing::default())
    }
}

impl SimulatedSurface {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            offset: 0,
            now_ms: 0,
            duration_ms,
            easing,
            animation: None,
            pending: VecDeque::new(),
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    /// Simulates a user fling, starting at `now_ms`, that comes to rest at `x` after
    /// `duration_ms`.
    ///
    /// A running animation is redirected without reporting its settle.
    pub fn fling_to(&mut self, x: u64, now_ms: u64, duration_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        self.animate_to(x, duration_ms);
        if let Some(animation) = &mut self.animation {
            animation.anchor(now_ms);
        }
    }

    fn animate_to(&mut self, x: u64, duration_ms: u64) {
        match &mut self.animation {
            Some(animation) => {
                animation.retarget(self.now_ms, x);
                animation.duration_ms = duration_ms.max(1);
            }
            None => {
                self.pending.push_back(SurfaceEvent::MomentumBegin);
                self.animation = Some(ScrollAnimation::new(
                    self.offset,
                    x,
                    duration_ms,
                    self.easing,
                ));
            }
        }
    }

    /// Advances the simulation to `now_ms` and emits queued momentum events, in order.
    pub fn tick(&mut self, now_ms: u64, mut f: impl FnMut(SurfaceEvent)) {
        self.now_ms = self.now_ms.max(now_ms);

        if let Some(animation) = &mut self.animation {
            animation.anchor(self.now_ms);
            self.offset = animation.offset_at(self.now_ms);
            if animation.is_done(self.now_ms) {
                self.animation = None;
                self.pending.push_back(SurfaceEvent::MomentumEnd {
                    x: self.offset as f64,
                });
            }
        }

        while let Some(event) = self.pending.pop_front() {
            f(event);
        }
    }
}

impl ScrollSurface for SimulatedSurface {
    fn scroll_to(&mut self, x: u64, animated: bool) {
        atrace!(x, animated, "SimulatedSurface::scroll_to");
        if animated {
            self.animate_to(x, self.duration_ms);
            return;
        }
        let was_animating = self.animation.take().is_some();
        self.offset = x;
        if !was_animating {
            self.pending.push_back(SurfaceEvent::MomentumBegin);
        }
        self.pending
            .push_back(SurfaceEvent::MomentumEnd { x: x as f64 });
    }
}
