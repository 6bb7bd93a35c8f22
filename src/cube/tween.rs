//! Fixed-duration eased timing for a layer rotation

use std::time::Duration;

/// Progress of one animated quarter turn
///
/// Advanced by the frame delta; `eased()` drives the pivot angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTween {
    elapsed: Duration,
    duration: Duration,
}

impl RotationTween {
    /// A tween at its start that runs for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Move forward by a frame delta, stopping at the end
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// Linear progress in `[0, 1]`. A zero duration finishes immediately.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Progress shaped by `ease_out_cubic`
    pub fn eased(&self) -> f32 {
        ease_out_cubic(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Fast start, gentle stop: `1 - (1 - t)^3`
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_out() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn finishes_after_duration() {
        let mut tween = RotationTween::new(Duration::from_millis(500));
        tween.advance(Duration::from_millis(250));
        assert!(!tween.is_finished());
        assert!((tween.progress() - 0.5).abs() < 1e-6);
        tween.advance(Duration::from_millis(400));
        assert!(tween.is_finished());
        assert_eq!(tween.eased(), 1.0);
    }

    #[test]
    fn zero_duration_is_already_done() {
        assert!(RotationTween::new(Duration::ZERO).is_finished());
    }
}
