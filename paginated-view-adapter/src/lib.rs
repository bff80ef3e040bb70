//! Adapter utilities for the `paginated-view` crate.
//!
//! The `paginated-view` crate is UI-agnostic and focuses on the paging logic and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`ScrollSurface`] seam for the host's scroll container
//! - A [`Controller`] that forwards host events and exposes the imperative [`PagerHandle`]
//! - A [`SimulatedSurface`] with tween-driven animated scrolling for hosts without native
//!   momentum scrolling
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod surface;
mod animation;


pub use controller::{Controller, PagerHandle};
pub use surface::{ScrollSurface, SimulatedSurface, SurfaceEvent};
pub use animation::{Easing, ScrollAnimation};
