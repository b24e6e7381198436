//! Time-based transitions
//!
//! Transitions are declarative: a start value, an end value, a duration and
//! an easing curve. They never advance on their own; callers sample them with
//! the current [`Instant`], which keeps every animation deterministic under
//! test and lets the event loop decide when to redraw.

use crate::config::AnimationConfig;
use crate::task::TaskId;
use std::f64::consts::PI;
use std::time::{Duration, Instant};

/// Interpolation curve applied to linear progress in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing
    #[default]
    EaseOut,
    /// Damped oscillation that overshoots the target slightly before settling
    Spring,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::Spring => 1.0 - (-5.0 * t).exp() * (2.4 * PI * t).cos(),
        }
    }
}

/// A single interpolation between two values
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
    started_at: Instant,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: now,
        }
    }

    /// A transition that is already resting at `value`
    pub fn settled(value: f64, now: Instant) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear, now)
    }

    /// Linear progress in `0.0..=1.0`; zero-length transitions are always complete
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.apply(progress)
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Head for a new target, starting from wherever the transition is now
    pub fn retarget(&mut self, to: f64, duration: Duration, easing: Easing, now: Instant) {
        let current = self.value_at(now);
        *self = Self::new(current, to, duration, easing, now);
    }
}

/// What a per-task animation is driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Shrink and fade before the task leaves the list
    Removal,
}

/// Per-task animation state, created lazily and dropped with its task
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    kind: HandleKind,
    transition: Transition,
    reported: bool,
}

impl AnimationHandle {
    pub fn removal(duration: Duration, now: Instant) -> Self {
        Self {
            kind: HandleKind::Removal,
            transition: Transition::new(1.0, 0.0, duration, Easing::Linear, now),
            reported: false,
        }
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    /// Current opacity/scale factor in `0.0..=1.0`
    pub fn value_at(&self, now: Instant) -> f64 {
        self.transition.value_at(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.transition.is_finished(now)
    }

    /// Report completion exactly once
    pub(crate) fn take_completion(&mut self, now: Instant) -> bool {
        if !self.reported && self.is_finished(now) {
            self.reported = true;
            true
        } else {
            false
        }
    }
}

/// Completion callbacks raised by finished transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The removal transition of a task has played out; the delete can be committed
    Removal(TaskId),
    /// The popup finished sliding out and no longer needs to be drawn
    PopupHidden,
}

/// How an item is drawn at a given moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub opacity: f64,
    pub scale: f64,
}

impl Default for ItemVisual {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// Durations of every transition the controller starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    pub fade_in: Duration,
    pub popup_slide: Duration,
    pub keyboard_follow: Duration,
    pub delete: Duration,
}

impl AnimationTimings {
    /// Every transition completes on the next tick
    pub fn disabled() -> Self {
        Self {
            fade_in: Duration::ZERO,
            popup_slide: Duration::ZERO,
            keyboard_follow: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }
        Self {
            fade_in: Duration::from_millis(config.fade_in_ms),
            popup_slide: Duration::from_millis(config.popup_slide_ms),
            keyboard_follow: Duration::from_millis(config.keyboard_follow_ms),
            delete: Duration::from_millis(config.delete_ms),
        }
    }
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// Map `value` from `[input_start, input_end]` onto `[output_start, output_end]`, clamped
pub fn interpolate_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if (in_end - in_start).abs() < f64::EPSILON {
        return out_end;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}
