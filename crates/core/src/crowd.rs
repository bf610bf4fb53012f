//! Simulated crowd forecasting.
//!
//! A prediction picks a crowd level uniformly, then draws a confidence and a
//! visitor estimate from the level's bucket. The hourly forecast covers
//! 06:00 through 20:00 with a midday peak.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::random::uniform_2dp;

/// Confidence percentage attached to every prediction.
pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 75.0..=95.0;

/// Hours covered by the hourly forecast.
pub const FORECAST_HOURS: RangeInclusive<u8> = 6..=20;

const PEAK_HOURS: RangeInclusive<u8> = 10..=14;
const PEAK_PERCENTAGE: RangeInclusive<u8> = 60..=90;
const SHOULDER_PERCENTAGE: RangeInclusive<u8> = 40..=70;
const QUIET_PERCENTAGE: RangeInclusive<u8> = 10..=40;

/// Categorical crowd (and risk) level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Pick a level uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Inclusive range of estimated visitors for this level.
    pub fn visitor_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Low => 500..=2_000,
            Self::Medium => 2_000..=5_000,
            Self::High => 5_000..=10_000,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Low => "Ideal time to visit! Enjoy peaceful exploration.",
            Self::Medium => "Moderate crowds expected. Book tickets in advance.",
            Self::High => {
                "Heavy crowds predicted. Consider visiting early morning or late evening."
            }
        }
    }
}

/// The `prediction` block of a crowd forecast.
#[derive(Debug, Clone, Serialize)]
pub struct CrowdPrediction {
    pub crowd_level: CrowdLevel,
    pub confidence: f64,
    pub estimated_visitors: u32,
    pub recommendation: &'static str,
}

/// One entry of the hourly forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCrowd {
    /// Zero-padded `HH:00`.
    pub hour: String,
    pub crowd_percentage: u8,
}

/// Generate a crowd prediction.
pub fn predict<R: Rng + ?Sized>(rng: &mut R) -> CrowdPrediction {
    let crowd_level = CrowdLevel::random(rng);
    let confidence = uniform_2dp(rng, CONFIDENCE_RANGE);
    let estimated_visitors = rng.random_range(crowd_level.visitor_range());

    CrowdPrediction {
        crowd_level,
        confidence,
        estimated_visitors,
        recommendation: crowd_level.recommendation(),
    }
}

/// Crowd percentage bucket for a given hour of day.
///
/// Peak hours take precedence, so 10:00 and 14:00 are peak rather than
/// shoulder.
pub fn hour_band(hour: u8) -> RangeInclusive<u8> {
    if PEAK_HOURS.contains(&hour) {
        PEAK_PERCENTAGE
    } else if (8..=10).contains(&hour) || (14..=17).contains(&hour) {
        SHOULDER_PERCENTAGE
    } else {
        QUIET_PERCENTAGE
    }
}

/// Generate the 15-entry hourly forecast in ascending hour order.
pub fn hourly_forecast<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyCrowd> {
    FORECAST_HOURS
        .map(|hour| HourlyCrowd {
            hour: format!("{hour:02}:00"),
            crowd_percentage: rng.random_range(hour_band(hour)),
        })
        .collect()
}
