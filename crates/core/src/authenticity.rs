//! Simulated cultural-authenticity scoring.
//!
//! A single score drives everything else: the level and its status colour,
//! whether red flags may appear (only below [`RED_FLAG_THRESHOLD`]), and which
//! recommendation list is returned.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::random::uniform_2dp;
use crate::types::Echoed;

pub const DEFAULT_CONTENT: &str = "Sample heritage description";
pub const DEFAULT_CATEGORY: &str = "product";

pub const SCORE_RANGE: RangeInclusive<f64> = 65.0..=95.0;

/// Scores at or above this are "Highly Authentic".
pub const HIGHLY_AUTHENTIC_THRESHOLD: f64 = 85.0;
/// Scores at or above this (and below the high threshold) are "Moderately Authentic".
pub const MODERATELY_AUTHENTIC_THRESHOLD: f64 = 70.0;
/// Red flags are only raised for scores strictly below this.
pub const RED_FLAG_THRESHOLD: f64 = 80.0;
pub const MAX_RED_FLAGS: usize = 3;

pub const RED_FLAG_POOL: [&str; 5] = [
    "Generic cultural references detected",
    "Historical inaccuracies found",
    "Commercial bias in description",
    "Missing cultural context",
    "Stereotypical language used",
];

/// Authenticity tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthenticityLevel {
    #[serde(rename = "Highly Authentic")]
    HighlyAuthentic,
    #[serde(rename = "Moderately Authentic")]
    ModeratelyAuthentic,
    Questionable,
}

impl AuthenticityLevel {
    /// Classify a score. Lower bounds are inclusive.
    pub fn classify(score: f64) -> Self {
        if score >= HIGHLY_AUTHENTIC_THRESHOLD {
            Self::HighlyAuthentic
        } else if score >= MODERATELY_AUTHENTIC_THRESHOLD {
            Self::ModeratelyAuthentic
        } else {
            Self::Questionable
        }
    }

    pub fn status_color(self) -> &'static str {
        match self {
            Self::HighlyAuthentic => "green",
            Self::ModeratelyAuthentic => "yellow",
            Self::Questionable => "red",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::HighlyAuthentic => &[
                "Content meets high authenticity standards",
                "Suitable for educational purposes",
            ],
            Self::ModeratelyAuthentic => &[
                "Review cultural references",
                "Consult with local experts",
                "Add historical context",
            ],
            Self::Questionable => &[
                "Major revision needed",
                "Verify all cultural claims",
                "Remove stereotypical language",
            ],
        }
    }
}

/// The `analysis` block.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticityAnalysis {
    pub authenticity_score: f64,
    pub authenticity_level: AuthenticityLevel,
    pub status_color: &'static str,
    /// Echo of the requested category.
    pub category: Echoed,
    /// Character count of the submitted content.
    pub content_length: usize,
}

/// The `nlp_metrics` block.
#[derive(Debug, Clone, Serialize)]
pub struct NlpMetrics {
    pub cultural_accuracy: f64,
    pub historical_correctness: f64,
    pub language_appropriateness: f64,
    pub commercial_bias_score: f64,
}

impl NlpMetrics {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cultural_accuracy: uniform_2dp(rng, 70.0..=95.0),
            historical_correctness: uniform_2dp(rng, 75.0..=98.0),
            language_appropriateness: uniform_2dp(rng, 80.0..=95.0),
            commercial_bias_score: uniform_2dp(rng, 5.0..=30.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthenticityReport {
    pub analysis: AuthenticityAnalysis,
    pub nlp_metrics: NlpMetrics,
    pub red_flags: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

/// Draw 0..=3 distinct red flags for a score below the red-flag threshold,
/// none otherwise.
pub fn red_flags<R: Rng + ?Sized>(rng: &mut R, score: f64) -> Vec<&'static str> {
    if score >= RED_FLAG_THRESHOLD {
        return Vec::new();
    }
    let count = rng.random_range(0..=MAX_RED_FLAGS);
    RED_FLAG_POOL.choose_multiple(rng, count).copied().collect()
}

/// Score a piece of content.
pub fn check<R: Rng + ?Sized>(
    rng: &mut R,
    content: &str,
    category: &Echoed,
) -> AuthenticityReport {
    let score = uniform_2dp(rng, SCORE_RANGE);
    let level = AuthenticityLevel::classify(score);

    let analysis = AuthenticityAnalysis {
        authenticity_score: score,
        authenticity_level: level,
        status_color: level.status_color(),
        category: category.clone(),
        content_length: content.chars().count(),
    };
    let nlp_metrics = NlpMetrics::generate(rng);
    let red_flags = red_flags(rng, score);

    AuthenticityReport {
        analysis,
        nlp_metrics,
        red_flags,
        recommendations: level.recommendations().to_vec(),
    }
}
