use crate::{Align, Axis, Padding};

/// Configuration for [`crate::ListController`].
///
/// All fields are public; the `with_*` builders are shorthand for struct updates. Changing
/// `axis`, `padding` or `spacing` through `ListController::set_options` re-derives the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListOptions {
    pub axis: Axis,

    /// Space before the first item and after the last one.
    pub padding: Padding,

    /// Space added after every item.
    pub spacing: f32,

    /// Where `focus_on` places the focused item inside the viewport.
    pub focus_align: Align,

    /// Look-ahead margin, as a multiple of the upcoming item's size.
    ///
    /// An item stays active while its leading edge is closer than
    /// `viewport_extent + look_ahead * item_size` to the viewport's near edge. `1.0` keeps one
    /// not-yet-entered item ready; `0.0` keeps strictly visible items only.
    pub look_ahead: f32,

    /// Offset changes larger than `jump_threshold * viewport_extent` in a single signal are
    /// treated as jumps: the next reconciliation starts from a binary-searched index instead of
    /// the last known first visible index.
    pub jump_threshold: f32,

    /// Nominal time (seconds) for an animated focus to settle.
    pub focus_smooth_time: f32,

    /// Upper bound on the auto-scroll speed (units per second).
    pub focus_max_speed: f32,

    /// An animated focus completes once its residual speed drops below this value.
    pub focus_settle_velocity: f32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            padding: Padding::default(),
            spacing: 0.0,
            focus_align: Align::Start,
            look_ahead: 1.0,
            jump_threshold: 1.0,
            focus_smooth_time: 0.15,
            focus_max_speed: 20_000.0,
            focus_settle_velocity: 1.0,
        }
    }
}

impl ListOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_padding(mut self, leading: f32, trailing: f32) -> Self {
        self.padding = Padding::new(leading, trailing);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_focus_align(mut self, align: Align) -> Self {
        self.focus_align = align;
        self
    }

    pub fn with_look_ahead(mut self, look_ahead: f32) -> Self {
        self.look_ahead = look_ahead.max(0.0);
        self
    }

    pub fn with_jump_threshold(mut self, jump_threshold: f32) -> Self {
        self.jump_threshold = jump_threshold;
        self
    }

    pub fn with_focus_smooth_time(mut self, seconds: f32) -> Self {
        self.focus_smooth_time = seconds;
        self
    }

    pub fn with_focus_max_speed(mut self, max_speed: f32) -> Self {
        self.focus_max_speed = max_speed;
        self
    }

    pub fn with_focus_settle_velocity(mut self, velocity: f32) -> Self {
        self.focus_settle_velocity = velocity;
        self
    }

    pub(crate) fn layout_changed(&self, other: &Self) -> bool {
        self.axis != other.axis || self.padding != other.padding || self.spacing != other.spacing
    }
}
