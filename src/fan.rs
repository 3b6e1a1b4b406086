//! Continuous fan-icon rotation animation.
//!
//! The telemetry feed delivers fan RPMs roughly once a second; the rotation
//! has to advance every frame to look continuous. [`FanAnimator`] bridges the
//! two cadences: `set_target` is called per poll with a possibly-missing RPM,
//! `frame` is called once per main-loop iteration and advances every running
//! icon by wall-clock elapsed time.
//!
//! Raw RPMs (thousands) would be a blur, so the visual rate is scaled down by
//! a constant divisor before converting to degrees per second.

use std::collections::HashMap;
use std::time::Instant;

/// Default divisor mapping real fan RPM to a perceptible rotation rate.
pub const DEFAULT_SCALE_FACTOR: f64 = 50.0;

/// Presentation seam the animator draws through.
///
/// In the TUI this is the set of fan tiles on screen; in tests it is a plain
/// map. An icon id the surface doesn't know about is not an error: the view
/// simply may not show that fan, and the animator skips it.
pub trait RotationSurface {
    /// Whether the surface has a visual element for this icon id.
    fn contains(&self, icon: &str) -> bool;

    /// Apply a rotation, in degrees, to the icon's visual element.
    fn set_rotation(&mut self, icon: &str, degrees: f64);
}

/// Animation state for one running fan icon.
///
/// An icon with no entry in the animator's map is idle; creating the entry is
/// what "starts" the animation, removing it is what stops it. That makes a
/// duplicate frame registration for the same icon unrepresentable.
#[derive(Debug, Clone)]
struct FanState {
    /// Current rotation in degrees, always in [0, 360).
    angle: f64,
    /// Target speed in RPM, always positive.
    target_rpm: f64,
    /// Wall-clock time of the previous frame. None until the first frame,
    /// which then advances by zero elapsed time.
    last_frame: Option<Instant>,
}

/// Per-icon rotation animator.
///
/// Owns all animation state; multiple independent animators can coexist
/// (there is no global table).
#[derive(Debug)]
pub struct FanAnimator {
    states: HashMap<String, FanState>,
    scale_factor: f64,
}

impl Default for FanAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_FACTOR)
    }
}

impl FanAnimator {
    /// Create an animator with the given RPM scale-down factor.
    ///
    /// A non-positive or non-finite factor falls back to the default.
    pub fn new(scale_factor: f64) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            DEFAULT_SCALE_FACTOR
        };
        Self {
            states: HashMap::new(),
            scale_factor,
        }
    }

    /// Update the target speed for an icon.
    ///
    /// A missing, NaN, or non-positive RPM is the "fan stopped" signal, not
    /// an error: the icon's animation state is discarded and its rotation
    /// reset to 0 degrees. Calling again with an invalid value is a no-op.
    ///
    /// A valid RPM either updates a running icon in place (the next frame
    /// picks up the new speed, the current angle is untouched) or starts the
    /// icon from angle 0. Starting is skipped silently when the surface has
    /// no element for the icon.
    pub fn set_target<S: RotationSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        icon: &str,
        rpm: Option<f64>,
    ) {
        let rpm = rpm.filter(|r| r.is_finite() && *r > 0.0);

        let Some(rpm) = rpm else {
            if self.states.remove(icon).is_some() {
                surface.set_rotation(icon, 0.0);
            }
            return;
        };

        if let Some(state) = self.states.get_mut(icon) {
            state.target_rpm = rpm;
            return;
        }

        if !surface.contains(icon) {
            return;
        }

        self.states.insert(
            icon.to_string(),
            FanState {
                angle: 0.0,
                target_rpm: rpm,
                last_frame: None,
            },
        );
    }

    /// Advance every running icon by one frame and apply the new angles.
    ///
    /// `now` is the frame timestamp; the first frame for an icon advances by
    /// zero elapsed time so a late start never produces a jump.
    pub fn frame<S: RotationSurface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        for (icon, state) in &mut self.states {
            let elapsed = match state.last_frame {
                Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
                None => 0.0,
            };
            state.last_frame = Some(now);

            let degrees_per_second = (state.target_rpm / self.scale_factor / 60.0) * 360.0;
            state.angle = (state.angle + degrees_per_second * elapsed).rem_euclid(360.0);

            surface.set_rotation(icon, state.angle);
        }
    }

    /// Current angle for an icon, if it is running.
    pub fn angle(&self, icon: &str) -> Option<f64> {
        self.states.get(icon).map(|s| s.angle)
    }

    /// Whether the icon currently has a running animation.
    pub fn is_running(&self, icon: &str) -> bool {
        self.states.contains_key(icon)
    }

    /// Number of running animations.
    pub fn running_count(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::time::Duration;

    /// Surface that records applied rotations for a fixed set of icons.
    #[derive(Debug, Default)]
    struct FakeSurface {
        rotations: BTreeMap<String, f64>,
    }

    impl FakeSurface {
        fn with_icons(icons: &[&str]) -> Self {
            Self {
                rotations: icons.iter().map(|i| (i.to_string(), 0.0)).collect(),
            }
        }
    }

    impl RotationSurface for FakeSurface {
        fn contains(&self, icon: &str) -> bool {
            self.rotations.contains_key(icon)
        }

        fn set_rotation(&mut self, icon: &str, degrees: f64) {
            if let Some(slot) = self.rotations.get_mut(icon) {
                *slot = degrees;
            }
        }
    }

    #[test]
    fn test_valid_target_starts_single_state() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::default();

        animator.set_target(&mut surface, "noctua-fan", Some(1500.0));
        assert!(animator.is_running("noctua-fan"));
        assert_eq!(animator.running_count(), 1);

        // Repeated valid calls update in place, never duplicate
        animator.set_target(&mut surface, "noctua-fan", Some(1800.0));
        animator.set_target(&mut surface, "noctua-fan", Some(2100.0));
        assert_eq!(animator.running_count(), 1);
    }

    #[test]
    fn test_invalid_target_stops_and_resets() {
        let mut surface = FakeSurface::with_icons(&["system-fan"]);
        let mut animator = FanAnimator::default();
        let t0 = Instant::now();

        animator.set_target(&mut surface, "system-fan", Some(3000.0));
        animator.frame(t0, &mut surface);
        animator.frame(t0 + Duration::from_millis(500), &mut surface);
        assert!(surface.rotations["system-fan"] > 0.0);

        animator.set_target(&mut surface, "system-fan", Some(0.0));
        assert!(!animator.is_running("system-fan"));
        assert_eq!(surface.rotations["system-fan"], 0.0);

        // Idempotent once stopped
        animator.set_target(&mut surface, "system-fan", None);
        animator.set_target(&mut surface, "system-fan", Some(-1.0));
        animator.set_target(&mut surface, "system-fan", Some(f64::NAN));
        assert!(!animator.is_running("system-fan"));
    }

    #[test]
    fn test_restart_after_stop_begins_at_zero() {
        let mut surface = FakeSurface::with_icons(&["system-fan"]);
        let mut animator = FanAnimator::default();
        let t0 = Instant::now();

        animator.set_target(&mut surface, "system-fan", Some(3000.0));
        animator.frame(t0, &mut surface);
        animator.frame(t0 + Duration::from_secs(1), &mut surface);

        animator.set_target(&mut surface, "system-fan", None);
        animator.set_target(&mut surface, "system-fan", Some(1200.0));
        assert_eq!(animator.angle("system-fan"), Some(0.0));
    }

    #[test]
    fn test_angle_always_in_range() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::default();
        let t0 = Instant::now();

        animator.set_target(&mut surface, "noctua-fan", Some(9000.0));
        animator.frame(t0, &mut surface);
        for i in 1..200 {
            // Uneven frame spacing, including long stalls
            let at = t0 + Duration::from_millis(i * 137);
            animator.frame(at, &mut surface);
            let angle = animator.angle("noctua-fan").unwrap();
            assert!((0.0..360.0).contains(&angle), "angle out of range: {angle}");
        }
    }

    #[test]
    fn test_speed_change_keeps_angle_continuous() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::default();
        let t0 = Instant::now();

        animator.set_target(&mut surface, "noctua-fan", Some(1500.0));
        animator.frame(t0, &mut surface);
        animator.frame(t0 + Duration::from_millis(400), &mut surface);
        let before = animator.angle("noctua-fan").unwrap();
        assert!(before > 0.0);

        animator.set_target(&mut surface, "noctua-fan", Some(4500.0));
        assert_eq!(animator.angle("noctua-fan"), Some(before));
        assert_eq!(animator.running_count(), 1);

        // Next frame advances at the new rate from the same angle
        animator.frame(t0 + Duration::from_millis(500), &mut surface);
        let after = animator.angle("noctua-fan").unwrap();
        let expected = (before + (4500.0 / 50.0 / 60.0) * 360.0 * 0.1).rem_euclid(360.0);
        assert!((after - expected).abs() < 1e-6);
    }

    #[test]
    fn test_first_frame_advances_by_zero() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::default();

        animator.set_target(&mut surface, "noctua-fan", Some(3000.0));
        // However late the first frame comes, it must not jump
        animator.frame(Instant::now() + Duration::from_secs(5), &mut surface);
        assert_eq!(animator.angle("noctua-fan"), Some(0.0));
    }

    #[test]
    fn test_rate_matches_scale_factor() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::new(50.0);
        let t0 = Instant::now();

        // 3000 RPM / 50 = 60 visual RPM = one revolution per second
        animator.set_target(&mut surface, "noctua-fan", Some(3000.0));
        animator.frame(t0, &mut surface);
        animator.frame(t0 + Duration::from_millis(250), &mut surface);
        let angle = animator.angle("noctua-fan").unwrap();
        assert!((angle - 90.0).abs() < 1e-6, "expected 90 degrees, got {angle}");
    }

    #[test]
    fn test_unknown_icon_is_silent_noop() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan"]);
        let mut animator = FanAnimator::default();

        animator.set_target(&mut surface, "does-not-exist", Some(2000.0));
        assert!(!animator.is_running("does-not-exist"));
        assert_eq!(animator.running_count(), 0);
    }

    #[test]
    fn test_independent_icons() {
        let mut surface = FakeSurface::with_icons(&["noctua-fan", "system-fan"]);
        let mut animator = FanAnimator::default();
        let t0 = Instant::now();

        animator.set_target(&mut surface, "noctua-fan", Some(1500.0));
        animator.set_target(&mut surface, "system-fan", Some(3000.0));
        animator.frame(t0, &mut surface);
        animator.frame(t0 + Duration::from_millis(100), &mut surface);

        let slow = animator.angle("noctua-fan").unwrap();
        let fast = animator.angle("system-fan").unwrap();
        assert!((fast - slow * 2.0).abs() < 1e-6);

        // Stopping one leaves the other running
        animator.set_target(&mut surface, "noctua-fan", Some(0.0));
        assert!(!animator.is_running("noctua-fan"));
        assert!(animator.is_running("system-fan"));
    }

    #[test]
    fn test_independent_animator_instances() {
        let mut surface_a = FakeSurface::with_icons(&["noctua-fan"]);
        let mut surface_b = FakeSurface::with_icons(&["noctua-fan"]);
        let mut a = FanAnimator::default();
        let mut b = FanAnimator::default();

        a.set_target(&mut surface_a, "noctua-fan", Some(1500.0));
        assert!(a.is_running("noctua-fan"));
        assert!(!b.is_running("noctua-fan"));

        b.set_target(&mut surface_b, "noctua-fan", Some(1500.0));
        a.set_target(&mut surface_a, "noctua-fan", None);
        assert!(b.is_running("noctua-fan"));
    }
}
