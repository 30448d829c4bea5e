use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SnapDecision {
    /// Let the browser scroll natively.
    Passthrough,
    /// Swallow the wheel event while a snap animation is running.
    Swallow,
    /// Cancel the native scroll and smooth-scroll to this offset.
    ScrollTo(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Pixels around a section top still treated as "at" that section.
    pub tolerance: f64,
    /// Wheel deltas smaller than this are trackpad noise.
    pub min_delta: f64,
    /// How long a snap animation blocks further snapping, in milliseconds.
    pub lock_ms: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            tolerance: 4.0,
            min_delta: 4.0,
            lock_ms: 800.0,
        }
    }
}

/// Wheel-driven snapping between two stacked full-screen sections.
#[derive(Clone, Debug)]
pub struct ScrollSnap {
    first_top: f64,
    second_top: f64,
    settings: SnapSettings,
    locked_until: Option<f64>,
}

impl ScrollSnap {
    pub fn new(first_top: f64, second_top: f64) -> Self {
        Self::with_settings(first_top, second_top, SnapSettings::default())
    }

    pub fn with_settings(first_top: f64, second_top: f64, settings: SnapSettings) -> Self {
        let (first_top, second_top) = if first_top <= second_top {
            (first_top, second_top)
        } else {
            (second_top, first_top)
        };
        Self {
            first_top,
            second_top,
            settings,
            locked_until: None,
        }
    }

    /// Section offsets change on resize.
    pub fn set_sections(&mut self, first_top: f64, second_top: f64) {
        *self = Self {
            locked_until: self.locked_until,
            ..Self::with_settings(first_top, second_top, self.settings)
        };
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    pub fn on_wheel(&mut self, delta_y: f64, scroll_y: f64, now_ms: f64) -> SnapDecision {
        if self.is_locked(now_ms) {
            return SnapDecision::Swallow;
        }
        self.locked_until = None;

        if !delta_y.is_finite() || !scroll_y.is_finite() || delta_y.abs() < self.settings.min_delta {
            return SnapDecision::Passthrough;
        }

        let tolerance = self.settings.tolerance;
        let target = if delta_y > 0.0 {
            let in_first = scroll_y >= self.first_top - tolerance
                && scroll_y < self.second_top - tolerance;
            in_first.then_some(self.second_top)
        } else {
            let below_second_top = scroll_y > self.first_top + tolerance
                && scroll_y <= self.second_top + tolerance;
            below_second_top.then_some(self.first_top)
        };

        match target {
            Some(offset) => {
                self.locked_until = Some(now_ms + self.settings.lock_ms);
                SnapDecision::ScrollTo(offset)
            }
            None => SnapDecision::Passthrough,
        }
    }
}
