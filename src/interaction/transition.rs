use std::time::Duration;

/// Linear radius animation for the hover marker.
///
/// Purely cosmetic: it never affects which sample is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerTransition {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl MarkerTransition {
    /// A transition already resting at `radius`.
    #[must_use]
    pub fn settled(radius: f64, duration: Duration) -> Self {
        Self {
            from: radius,
            to: radius,
            duration,
            elapsed: duration,
        }
    }

    /// Restarts the animation from the current radius towards `target`.
    pub fn retarget(&mut self, target: f64) {
        if target == self.to {
            return;
        }
        self.from = self.radius();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advances the clock and reports whether the animation is still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.is_running()
    }

    /// Jumps straight to the target radius.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * progress
    }
}
