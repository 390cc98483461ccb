use crate::{FocusState, ScrollDirection};

/// A lightweight snapshot of the list's scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
    pub previous_offset: f32,
    pub focus: Option<FocusState>,
}

impl ScrollState {
    /// Direction of the last offset change, if it moved at all.
    pub fn direction(&self) -> Option<ScrollDirection> {
        if self.offset > self.previous_offset {
            Some(ScrollDirection::Forward)
        } else if self.offset < self.previous_offset {
            Some(ScrollDirection::Backward)
        } else {
            None
        }
    }

    pub fn delta(&self) -> f32 {
        self.offset - self.previous_offset
    }
}
