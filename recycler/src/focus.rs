use crate::{Align, PositionTable};

/// A critically damped approach toward a target, bounded by a maximum speed.
///
/// This is the classic "SmoothDamp" integrator: it behaves like a spring with damping ratio 1
/// whose natural frequency is derived from `smooth_time`, using a cubic approximation of
/// `exp(-x)` so it needs no transcendental functions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothDamp {
    /// Approximate time (seconds) to reach the target.
    pub smooth_time: f32,
    /// Maximum speed (units per second).
    pub max_speed: f32,
}

/// The result of one [`SmoothDamp::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampStep {
    pub position: f32,
    pub velocity: f32,
}

impl SmoothDamp {
    pub fn new(smooth_time: f32, max_speed: f32) -> Self {
        Self {
            smooth_time,
            max_speed,
        }
    }

    /// Advances `current` toward `target` by `dt` seconds, starting at `velocity`.
    pub fn step(&self, current: f32, target: f32, velocity: f32, dt: f32) -> DampStep {
        if dt <= 0.0 {
            return DampStep {
                position: current,
                velocity,
            };
        }

        let smooth_time = self.smooth_time.max(0.0001);
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let max_change = self.max_speed * smooth_time;
        let change = (current - target).clamp(-max_change, max_change);
        let limited_target = current - change;

        let temp = (velocity + omega * change) * dt;
        let next_velocity = (velocity - omega * temp) * decay;
        let next = limited_target + (change + temp) * decay;

        // Never overshoot the real target.
        if (target - current > 0.0) == (next > target) {
            return DampStep {
                position: target,
                velocity: 0.0,
            };
        }

        DampStep {
            position: next,
            velocity: next_velocity,
        }
    }
}

/// A pending or in-flight focus request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusState {
    /// Clamped item index being focused.
    pub index: usize,
    /// Clamped scroll offset that places the item at the configured anchor.
    pub target_offset: f32,
    pub animating: bool,
    /// Residual velocity of the damped approach (units per second).
    pub velocity: f32,
}

/// What a focus step did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocusProgress {
    /// No focus animation is running.
    Idle,
    /// The offset moved; the animation continues.
    Moving { offset: f32 },
    /// The animation reached its target and ended.
    Settled { index: usize, offset: f32 },
}

/// Drives animated focus requests.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusController {
    damp: SmoothDamp,
    settle_velocity: f32,
    state: Option<FocusState>,
}

impl FocusController {
    pub fn new(damp: SmoothDamp, settle_velocity: f32) -> Self {
        Self {
            damp,
            settle_velocity,
            state: None,
        }
    }

    pub fn set_damping(&mut self, damp: SmoothDamp, settle_velocity: f32) {
        self.damp = damp;
        self.settle_velocity = settle_velocity;
    }

    pub fn state(&self) -> Option<FocusState> {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_some_and(|s| s.animating)
    }

    /// Scroll offset that aligns item `index` with `align` inside a viewport of
    /// `viewport_extent`, clamped so the content never over-scrolls.
    ///
    /// `index` is clamped into the table. Returns `None` for an empty table.
    pub fn target_offset(
        table: &PositionTable,
        index: usize,
        viewport_extent: f32,
        align: Align,
    ) -> Option<f32> {
        if table.is_empty() {
            return None;
        }
        let index = index.min(table.len() - 1);
        let f = align.factor();
        let anchor_in_item = table.leading(index) + table.size(index) * f;
        let target = anchor_in_item - viewport_extent * f;
        Some(table.clamp_scroll_offset(target, viewport_extent))
    }

    /// Starts (or retargets) an animated focus. A running animation keeps its velocity.
    pub fn begin(&mut self, index: usize, target_offset: f32) {
        let velocity = self
            .state
            .filter(|s| s.animating)
            .map_or(0.0, |s| s.velocity);
        self.state = Some(FocusState {
            index,
            target_offset,
            animating: true,
            velocity,
        });
    }

    /// Drops any running animation. Returns `true` if one was in flight.
    pub fn cancel(&mut self) -> bool {
        self.state.take().is_some_and(|s| s.animating)
    }

    /// Advances the animation by `dt` seconds from `current`.
    pub fn step(&mut self, current: f32, dt: f32) -> FocusProgress {
        let Some(state) = self.state.filter(|s| s.animating) else {
            return FocusProgress::Idle;
        };
        if dt <= 0.0 {
            return FocusProgress::Moving { offset: current };
        }

        let step = self
            .damp
            .step(current, state.target_offset, state.velocity, dt);
        if step.velocity.abs() < self.settle_velocity {
            self.state = None;
            return FocusProgress::Settled {
                index: state.index,
                offset: state.target_offset,
            };
        }

        self.state = Some(FocusState {
            velocity: step.velocity,
            ..state
        });
        FocusProgress::Moving {
            offset: step.position,
        }
    }
}
