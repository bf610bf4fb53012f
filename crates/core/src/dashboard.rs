//! Aggregated dashboard snapshot.
//!
//! Everything except the site catalog is regenerated on each call.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{HeritageSite, SiteCatalog};
use crate::crowd::CrowdLevel;
use crate::random::uniform_2dp;
use crate::types::Timestamp;

pub const MAX_SITES_AT_RISK: usize = 2;
pub const WEEKLY_VISITOR_RANGE: RangeInclusive<u32> = 5_000..=15_000;
pub const TODAY_VISITOR_RANGE: RangeInclusive<u32> = 3_000..=8_000;
pub const DAYS_PER_WEEK: usize = 7;
pub const MIN_ALERTS: usize = 1;
pub const MAX_ALERTS: usize = 3;

/// Format of `overview.last_updated`.
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Success,
    Info,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: &'static str,
    pub priority: AlertPriority,
}

pub const ALERT_POOL: [Alert; 4] = [
    Alert {
        kind: AlertKind::Warning,
        message: "High crowd expected at Taj Mahal this weekend",
        priority: AlertPriority::Medium,
    },
    Alert {
        kind: AlertKind::Success,
        message: "Image restoration completed for 10 artifacts",
        priority: AlertPriority::Low,
    },
    Alert {
        kind: AlertKind::Info,
        message: "New authenticity check algorithm deployed",
        priority: AlertPriority::Low,
    },
    Alert {
        kind: AlertKind::Danger,
        message: "Environmental risk increased at Machu Picchu",
        priority: AlertPriority::High,
    },
];

/// Sample 1..=3 distinct alerts from [`ALERT_POOL`].
pub fn alerts<R: Rng + ?Sized>(rng: &mut R) -> Vec<Alert> {
    let count = rng.random_range(MIN_ALERTS..=MAX_ALERTS);
    ALERT_POOL.choose_multiple(rng, count).copied().collect()
}

// ---------------------------------------------------------------------------
// Summary blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_sites_monitored: usize,
    pub sites_optimal: usize,
    pub sites_at_risk: usize,
    pub last_updated: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    Increasing,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrowdStatus {
    pub current_level: CrowdLevel,
    pub today_visitors: u32,
    pub weekly_trend: WeeklyTrend,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalRisk {
    pub level: CrowdLevel,
    pub factors: &'static [&'static str],
    pub monitoring_active: bool,
}

/// Fixed factor list for an environmental risk level.
pub fn risk_factors(level: CrowdLevel) -> &'static [&'static str] {
    match level {
        CrowdLevel::Low => &["All parameters normal", "No immediate threats"],
        CrowdLevel::Medium => &["Increased foot traffic", "Weather monitoring needed"],
        CrowdLevel::High => &[
            "Urgent: Excessive wear detected",
            "Immediate conservation required",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrowdPredictionStats {
    pub accuracy: f64,
    pub total_predictions: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageRestorationStats {
    pub completed: u32,
    pub average_quality: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticityCheckStats {
    pub performed: u32,
    pub flagged_content: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiPerformance {
    pub crowd_predictions: CrowdPredictionStats,
    pub image_restorations: ImageRestorationStats,
    pub authenticity_checks: AuthenticityCheckStats,
}

impl AiPerformance {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            crowd_predictions: CrowdPredictionStats {
                accuracy: uniform_2dp(rng, 85.0..=95.0),
                total_predictions: rng.random_range(500..=1_000),
            },
            image_restorations: ImageRestorationStats {
                completed: rng.random_range(50..=150),
                average_quality: uniform_2dp(rng, 88.0..=95.0),
            },
            authenticity_checks: AuthenticityCheckStats {
                performed: rng.random_range(200..=500),
                flagged_content: rng.random_range(10..=50),
            },
        }
    }
}

/// Full dashboard snapshot, borrowing the shared catalog.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary<'a> {
    pub overview: Overview,
    pub crowd_status: CrowdStatus,
    pub environmental_risk: EnvironmentalRisk,
    pub ai_performance: AiPerformance,
    pub weekly_visitors: Vec<u32>,
    pub alerts: Vec<Alert>,
    pub heritage_sites: &'a [HeritageSite],
}

/// Build a dashboard snapshot as of `now`.
pub fn summarize<'a, R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &'a SiteCatalog,
    now: Timestamp,
) -> DashboardSummary<'a> {
    let total_sites = catalog.len();
    let sites_at_risk = rng.random_range(0..=MAX_SITES_AT_RISK.min(total_sites));

    let weekly_visitors = (0..DAYS_PER_WEEK)
        .map(|_| rng.random_range(WEEKLY_VISITOR_RANGE))
        .collect();

    let risk_level = CrowdLevel::random(rng);
    let ai_performance = AiPerformance::generate(rng);

    let crowd_status = CrowdStatus {
        current_level: CrowdLevel::random(rng),
        today_visitors: rng.random_range(TODAY_VISITOR_RANGE),
        weekly_trend: if rng.random_bool(0.5) {
            WeeklyTrend::Increasing
        } else {
            WeeklyTrend::Stable
        },
    };

    DashboardSummary {
        overview: Overview {
            total_sites_monitored: total_sites,
            sites_optimal: total_sites - sites_at_risk,
            sites_at_risk,
            last_updated: now.format(LAST_UPDATED_FORMAT).to_string(),
        },
        crowd_status,
        environmental_risk: EnvironmentalRisk {
            level: risk_level,
            factors: risk_factors(risk_level),
            monitoring_active: true,
        },
        ai_performance,
        weekly_visitors,
        alerts: alerts(rng),
        heritage_sites: catalog.list_sites(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn fixed_now() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 5).unwrap()
    }

    #[test]
    fn ai_performance_counters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(20);
        for _ in 0..500 {
            let p = AiPerformance::generate(&mut rng);
            assert!((85.0..=95.0).contains(&p.crowd_predictions.accuracy));
            assert!((500..=1_000).contains(&p.crowd_predictions.total_predictions));
            assert!((50..=150).contains(&p.image_restorations.completed));
            assert!((88.0..=95.0).contains(&p.image_restorations.average_quality));
            assert!((200..=500).contains(&p.authenticity_checks.performed));
            assert!((10..=50).contains(&p.authenticity_checks.flagged_content));
        }
    }

    #[test]
    fn site_split_always_adds_up() {
        let catalog = SiteCatalog::default();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let summary = summarize(&mut rng, &catalog, fixed_now());
            let o = &summary.overview;
            assert_eq!(o.total_sites_monitored, 4);
            assert!(o.sites_at_risk <= MAX_SITES_AT_RISK);
            assert_eq!(o.sites_optimal + o.sites_at_risk, o.total_sites_monitored);
        }
    }

    #[test]
    fn weekly_visitors_has_seven_days_in_range() {
        let catalog = SiteCatalog::default();
        let mut rng = StdRng::seed_from_u64(22);
        let summary = summarize(&mut rng, &catalog, fixed_now());
        assert_eq!(summary.weekly_visitors.len(), DAYS_PER_WEEK);
        assert!(summary
            .weekly_visitors
            .iter()
            .all(|v| WEEKLY_VISITOR_RANGE.contains(v)));
    }

    #[test]
    fn alerts_are_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..300 {
            let alerts = alerts(&mut rng);
            assert!((MIN_ALERTS..=MAX_ALERTS).contains(&alerts.len()));
            let unique: HashSet<_> = alerts.iter().collect();
            assert_eq!(unique.len(), alerts.len());
            assert!(alerts.iter().all(|a| ALERT_POOL.contains(a)));
        }
    }

    #[test]
    fn risk_factors_match_level() {
        let catalog = SiteCatalog::default();
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..100 {
            let risk = summarize(&mut rng, &catalog, fixed_now()).environmental_risk;
            assert_eq!(risk.factors, risk_factors(risk.level));
            assert!(risk.monitoring_active);
        }
    }

    #[test]
    fn last_updated_uses_plain_datetime_format() {
        let catalog = SiteCatalog::default();
        let mut rng = StdRng::seed_from_u64(25);
        let summary = summarize(&mut rng, &catalog, fixed_now());
        assert_eq!(summary.overview.last_updated, "2026-10-15 09:30:05");
    }

    #[test]
    fn summary_carries_full_catalog() {
        let catalog = SiteCatalog::default();
        let mut rng = StdRng::seed_from_u64(26);
        let summary = summarize(&mut rng, &catalog, fixed_now());
        assert_eq!(summary.heritage_sites, catalog.list_sites());
    }

    #[test]
    fn alert_serializes_type_key() {
        let json = serde_json::to_value(ALERT_POOL[3]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "danger",
                "message": "Environmental risk increased at Machu Picchu",
                "priority": "high",
            })
        );
    }
}
