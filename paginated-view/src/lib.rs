//! A headless, horizontally paged view.
//!
//! For adapter-level utilities (scroll surface seam, imperative handle, simulated surface), see
//! the `paginated-view-adapter` crate.
//!
//! This crate holds the logic behind a swipeable pager that mounts only a window of pages
//! around the visible one: the render window and rendered-page bookkeeping, offset → page
//! mapping on scroll settle, and page → offset scroll commands for programmatic navigation.
//!
//! It is UI-agnostic. A mobile/TUI/GUI layer is expected to provide:
//! - the window width and, optionally, layout measurements
//! - momentum scroll begin/end events with the settled offset
//! - a scroll surface that executes the returned [`ScrollTo`] commands
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod children;
mod options;
mod pager;
mod rendered;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use children::Children;
pub use options::{ContainerStyle, OnChangeCallback, OnIndexChangeCallback, PaginatedViewOptions};
pub use pager::PaginatedView;
pub use state::PagerState;
pub use types::{PageContent, PageSlot, ScrollPhase, ScrollTo, SurfaceProps};
pub use window::PageWindow;
