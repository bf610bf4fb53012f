//! Simulated inference latency.
//!
//! The AI endpoints pause before answering to mimic model run time. The
//! pause is an async sleep, so it only holds the request's own task.

use std::time::Duration;

/// Pause before a crowd prediction is returned.
pub const CROWD_PREDICTION: Duration = Duration::from_millis(1_000);

/// Pause before an image restoration is returned.
pub const IMAGE_RESTORATION: Duration = Duration::from_millis(2_000);

/// Pause before an authenticity check is returned.
pub const AUTHENTICITY_CHECK: Duration = Duration::from_millis(1_500);

/// Whether handlers actually wait out their simulated inference time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    #[default]
    Simulated,
    /// Skip all pauses (tests, load checks).
    Disabled,
}

impl Latency {
    pub fn from_flag(simulate: bool) -> Self {
        if simulate {
            Self::Simulated
        } else {
            Self::Disabled
        }
    }

    pub async fn pause(self, duration: Duration) {
        if self == Self::Simulated {
            tokio::time::sleep(duration).await;
        }
    }
}
