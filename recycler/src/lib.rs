//! A headless recycling list engine.
//!
//! Given an arbitrarily large, ordered collection of heterogeneous items, this crate keeps only
//! the items inside a fixed-size viewport materialized, recycling a small set of view instances
//! ("pills") through per-type pools instead of creating one view per item.
//!
//! The engine is split into four parts, orchestrated by [`ListController`]:
//! - a layout model ([`build_layout`] / [`PositionTable`]) computing every item's position once
//!   per `setup`
//! - a [`ViewPool`] owning per-type stacks of inactive views
//! - a [`WindowTracker`] keeping active views equal to the visible window (plus look-ahead)
//! - a [`FocusController`] scrolling an item to a viewport anchor with a damped approach
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport size
//! - scroll offset changes from its scroll container
//! - a per-frame tick while focus animations run
//! - a view type implementing [`PillView`] and [`BindData`]
//!
//! For host-side helpers (drag/wheel driving, anchoring, page tracking), see the
//! `recycler-adapter` crate.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod focus;
mod layout;
mod list;
mod options;
mod pool;
mod state;
mod types;
mod view;
mod window;

#[cfg(test)]
mod tests;

pub use error::SetupError;
pub use focus::{DampStep, FocusController, FocusProgress, FocusState, SmoothDamp};
pub use layout::{PositionTable, build_layout};
pub use list::ListController;
pub use options::ListOptions;
pub use pool::{PoolStats, ViewPool};
pub use state::ScrollState;
pub use types::{
    Align, Axis, Item, ItemType, Padding, Position, ScrollDirection, Size, ViewFactory,
    VisibleWindow,
};
pub use view::{BindData, ListHooks, PillView};
pub use window::{Viewport, WindowTracker};
