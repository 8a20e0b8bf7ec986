use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use curl_kernel::CurlProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Transition duration must be positive, got {0:?}")]
    NonPositiveDuration(Duration),

    #[error("Target curl amount must be positive, got {0}")]
    NonPositiveTarget(f64),
}

/// Parameters of one transition invocation. Created fresh per transition and
/// discarded once the curl completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Wall-clock duration of the full animation.
    pub duration: Duration,
    /// Curl amount the animation ends at. 1.0 rolls the page exactly to the
    /// opposite corner; values up to ~1.5 add a post-curl settle where the
    /// page keeps moving off after the roll.
    pub target_amount: f64,
    /// Curl radius handed to the fragment path each frame.
    pub radius: f64,
    /// Vertex-path evaluator profile.
    pub profile: CurlProfile,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            target_amount: 1.0,
            radius: 0.2,
            profile: CurlProfile::Cylindrical,
        }
    }
}

impl TransitionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::NonPositiveDuration(self.duration));
        }
        if self.target_amount <= 0.0 {
            return Err(ConfigError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }
}

/// Outcome of one stepping call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    InProgress,
    Done,
}

/// Per-frame values the GPU-path collaborator uploads as shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameUniforms {
    pub amount: f64,
    pub radius: f64,
}

/// Owned animation state for one running transition.
///
/// The state advances monotonically with elapsed time and latches once the
/// target amount is reached; further stepping is a no-op. Nothing here is
/// global — callers own the state and hand the current amount to the
/// evaluators each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionState {
    config: TransitionConfig,
    elapsed: Duration,
    amount: f64,
    done: bool,
}

impl TransitionState {
    #[instrument]
    pub fn new(config: TransitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            elapsed: Duration::ZERO,
            amount: 0.0,
            done: false,
        })
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Current curl amount in [0, target_amount].
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Values for the fragment path this frame.
    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            amount: self.amount,
            radius: self.config.radius,
        }
    }

    /// Advance the clock by one discrete step.
    ///
    /// `amount` is recomputed as `min(elapsed/duration, 1) * target_amount`,
    /// so progress is monotone no matter how irregular the step sizes are.
    /// Once the target is reached the state latches to [`StepStatus::Done`]
    /// and further calls change nothing.
    pub fn advance(&mut self, dt: Duration) -> StepStatus {
        if self.done {
            return StepStatus::Done;
        }

        self.elapsed += dt;
        let progress =
            (self.elapsed.as_secs_f64() / self.config.duration.as_secs_f64()).min(1.0);
        self.amount = progress * self.config.target_amount;

        if progress >= 1.0 {
            debug!(amount = self.amount, "transition complete");
            self.done = true;
            StepStatus::Done
        } else {
            StepStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(duration_ms: u64) -> TransitionState {
        TransitionState::new(TransitionConfig {
            duration: Duration::from_millis(duration_ms),
            ..TransitionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = TransitionState::new(TransitionConfig {
            duration: Duration::ZERO,
            ..TransitionConfig::default()
        });
        assert!(matches!(err, Err(ConfigError::NonPositiveDuration(_))));
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let err = TransitionState::new(TransitionConfig {
            target_amount: 0.0,
            ..TransitionConfig::default()
        });
        assert!(matches!(err, Err(ConfigError::NonPositiveTarget(_))));
    }

    #[test]
    fn test_starts_flat() {
        let s = state(1000);
        assert_eq!(s.amount(), 0.0);
        assert!(!s.is_done());
    }

    #[test]
    fn test_amount_tracks_elapsed_fraction() {
        let mut s = state(1000);
        assert_eq!(s.advance(Duration::from_millis(250)), StepStatus::InProgress);
        assert!((s.amount() - 0.25).abs() < 1e-12);
        assert_eq!(s.advance(Duration::from_millis(250)), StepStatus::InProgress);
        assert!((s.amount() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_completes_exactly_at_duration() {
        let mut s = state(1000);
        assert_eq!(s.advance(Duration::from_millis(1000)), StepStatus::Done);
        assert!(s.is_done());
        assert!((s.amount() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_amount_clamps_at_target_on_overshoot() {
        let mut s = state(100);
        assert_eq!(s.advance(Duration::from_millis(1500)), StepStatus::Done);
        assert_eq!(s.amount(), 1.0);
    }

    #[test]
    fn test_done_state_latches() {
        let mut s = state(100);
        s.advance(Duration::from_millis(200));
        let amount = s.amount();
        assert_eq!(s.advance(Duration::from_millis(50)), StepStatus::Done);
        assert_eq!(s.amount(), amount);
    }

    #[test]
    fn test_amount_is_monotone_under_irregular_steps() {
        let mut s = state(1000);
        let mut prev = s.amount();
        for &ms in &[16, 3, 40, 16, 200, 1, 16, 500, 16] {
            s.advance(Duration::from_millis(ms));
            assert!(s.amount() >= prev);
            prev = s.amount();
        }
    }

    #[test]
    fn test_settle_target_scales_amount() {
        let mut s = TransitionState::new(TransitionConfig {
            duration: Duration::from_millis(1000),
            target_amount: 1.5,
            ..TransitionConfig::default()
        })
        .unwrap();
        s.advance(Duration::from_millis(500));
        assert!((s.amount() - 0.75).abs() < 1e-12);
        s.advance(Duration::from_millis(500));
        assert!((s.amount() - 1.5).abs() < 1e-12);
        assert!(s.is_done());
    }

    #[test]
    fn test_frame_uniforms_mirror_state() {
        let mut s = state(1000);
        s.advance(Duration::from_millis(400));
        let u = s.frame_uniforms();
        assert_eq!(u.amount, s.amount());
        assert_eq!(u.radius, s.config().radius);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = TransitionConfig {
            duration: Duration::from_millis(750),
            target_amount: 1.1,
            radius: 0.3,
            profile: CurlProfile::elliptical(0.125),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TransitionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
