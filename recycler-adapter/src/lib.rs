//! Host-side helpers for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic: it consumes a viewport size and scroll offsets and emits
//! show/hide/position calls against opaque views. This crate provides small, framework-neutral
//! helpers hosts commonly need on top of it:
//!
//! - [`ScrollDriver`]: turns raw drag/wheel deltas and millisecond frame timestamps into list
//!   calls
//! - Scroll anchoring (e.g. prepend in chat/timelines without visual jumps)
//! - [`PageIndicator`]: a [`recycler::ListHooks`] implementation tracking the current page
//!
//! This crate holds no UI objects and has no framework bindings.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod anchor;
mod driver;
mod page;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use driver::ScrollDriver;
pub use page::{PageCallback, PageIndicator};
