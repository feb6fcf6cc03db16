//! Jitter filter for the tracked averages
//!
//! One Euro low-pass: heavy smoothing while the body is still so a value
//! parked near a threshold does not flicker, light smoothing while it moves
//! so a real jump is not delayed. Off unless `GestureConfig::smoothing` is set.

use std::f32::consts::PI;
use super::config::SmoothingConfig;

/// Derivative cutoff (Hz); fixed, only the value cutoff adapts
const DERIVATIVE_CUTOFF: f32 = 1.0;

/// Previous filter output
#[derive(Clone, Copy, Debug)]
struct Estimate {
    t: f64,
    value: f32,
    speed: f32,
}

/// Exponential smoothing weight for a first-order low-pass at `cutoff` Hz
fn alpha(cutoff: f32, dt: f32) -> f32 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / dt)
}

fn lerp(from: f32, to: f32, weight: f32) -> f32 {
    from + weight * (to - from)
}

/// Adaptive low-pass over one scalar; the cutoff rises with speed
#[derive(Clone, Debug)]
pub struct OneEuroFilter {
    config: SmoothingConfig,
    last: Option<Estimate>,
}

impl OneEuroFilter {
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config, last: None }
    }

    /// Filter one value at timestamp `t` (seconds)
    pub fn filter(&mut self, t: f64, x: f32) -> f32 {
        let Some(last) = self.last else {
            self.last = Some(Estimate { t, value: x, speed: 0.0 });
            return x;
        };

        let dt = (t - last.t) as f32;
        if dt.is_nan() || dt <= 0.0 {
            return last.value;
        }

        let raw_speed = (x - last.value) / dt;
        let speed = lerp(last.speed, raw_speed, alpha(DERIVATIVE_CUTOFF, dt));

        let cutoff = self.config.min_cutoff + self.config.beta * speed.abs();
        let value = lerp(last.value, x, alpha(cutoff, dt));

        self.last = Some(Estimate { t, value, speed });
        value
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Filters for the two signals the classifier thresholds
#[derive(Clone, Debug)]
pub struct PoseSmoother {
    shoulder_x: OneEuroFilter,
    hip_y: OneEuroFilter,
}

impl PoseSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            shoulder_x: OneEuroFilter::new(config),
            hip_y: OneEuroFilter::new(config),
        }
    }

    /// Returns (avg_shoulder_x, avg_hip_y) filtered
    pub fn filter(&mut self, t: f64, avg_shoulder_x: f32, avg_hip_y: f32) -> (f32, f32) {
        (
            self.shoulder_x.filter(t, avg_shoulder_x),
            self.hip_y.filter(t, avg_hip_y),
        )
    }

    pub fn reset(&mut self) {
        self.shoulder_x.reset();
        self.hip_y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_passes_through() {
        let mut filter = OneEuroFilter::new(SmoothingConfig::default());
        assert_eq!(filter.filter(0.0, 0.42), 0.42);
    }

    #[test]
    fn test_damps_single_frame_spike() {
        let mut filter = OneEuroFilter::new(SmoothingConfig::default());
        filter.filter(0.0, 0.5);
        let spiked = filter.filter(1.0 / 30.0, 0.7);
        assert!(spiked > 0.5 && spiked < 0.7);
    }

    #[test]
    fn test_converges_on_steady_input() {
        let mut filter = OneEuroFilter::new(SmoothingConfig::default());
        filter.filter(0.0, 0.0);
        let mut out = 0.0;
        for i in 1..300 {
            out = filter.filter(i as f64 / 30.0, 1.0);
        }
        assert!((out - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_non_increasing_time_holds_value() {
        let mut filter = OneEuroFilter::new(SmoothingConfig::default());
        filter.filter(1.0, 0.3);
        assert_eq!(filter.filter(1.0, 0.9), 0.3);
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(alpha(1.0, 1.0 / 30.0) > 0.0);
        assert!(alpha(1.0, 1.0 / 30.0) < alpha(10.0, 1.0 / 30.0));
        assert!(alpha(1.0, 10.0) < 1.0);
    }

    #[test]
    fn test_reset() {
        let mut smoother = PoseSmoother::new(SmoothingConfig::default());
        smoother.filter(0.0, 0.5, 0.5);
        smoother.reset();
        assert_eq!(smoother.filter(0.1, 0.2, 0.8), (0.2, 0.8));
    }
}
