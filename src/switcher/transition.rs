//! Eased animation of the light half's width fraction.

use super::{ExpansionState, Side};

pub const DEFAULT_DURATION_MS: u64 = 500;

/// Animates the light half's share of the widget width between targets.
///
/// Times are in seconds, as reported by the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTransition {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl WidthTransition {
    pub fn new(state: ExpansionState, duration: f64) -> Self {
        let fraction = state.width_fraction(Side::Light);
        Self {
            from: fraction,
            to: fraction,
            started_at: 0.0,
            duration: duration.max(f64::EPSILON),
        }
    }

    /// Retargets the animation. A change mid-flight starts from the value
    /// currently displayed.
    pub fn retarget(&mut self, state: ExpansionState, now: f64) {
        let target = state.width_fraction(Side::Light);
        if target == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.started_at = now;
    }

    /// Light half fraction at `now`. The dark half gets the rest.
    pub fn value(&self, now: f64) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    fn progress(&self, now: f64) -> f32 {
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }
}

/// Cubic-bezier(0.4, 0, 0.2, 1), the usual "ease-in-out" of CSS frameworks.
fn ease_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let (x1, y1, x2, y2) = (0.4_f32, 0.0_f32, 0.2_f32, 1.0_f32);
    let bezier = |p1: f32, p2: f32, s: f32| {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    };

    // Solve x(s) = t by bisection; x is monotonic on [0, 1].
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if bezier(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(y1, y2, (lo + hi) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_settled() {
        let transition = WidthTransition::new(ExpansionState::None, 0.5);
        assert_eq!(transition.value(0.0), 0.5);
        assert!(!transition.is_running(0.0));
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut transition = WidthTransition::new(ExpansionState::None, 0.5);
        transition.retarget(ExpansionState::Light, 1.0);
        assert_eq!(transition.value(1.0), 0.5);
        assert!(transition.is_running(1.2));
        let mid = transition.value(1.25);
        assert!(mid > 0.5 && mid < 1.0);
        assert_eq!(transition.value(1.5), 1.0);
        assert!(!transition.is_running(1.5));
    }

    #[test]
    fn retarget_mid_flight_has_no_jump() {
        let mut transition = WidthTransition::new(ExpansionState::None, 0.5);
        transition.retarget(ExpansionState::Dark, 0.0);
        let shown = transition.value(0.2);
        transition.retarget(ExpansionState::Light, 0.2);
        assert_eq!(transition.value(0.2), shown);
        assert_eq!(transition.value(0.7), 1.0);
    }

    #[test]
    fn same_target_keeps_running_animation() {
        let mut transition = WidthTransition::new(ExpansionState::None, 0.5);
        transition.retarget(ExpansionState::Dark, 0.0);
        let before = transition.value(0.1);
        transition.retarget(ExpansionState::Dark, 0.1);
        assert_eq!(transition.value(0.1), before);
        assert_eq!(transition.value(0.5), 0.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= last - 1e-4);
            last = v;
        }
        assert_eq!(ease_in_out(1.0), 1.0);
    }
}
