//! Integration tests for `POST /api/check-authenticity`.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{body_json, keys, post_json, sorted};
use serde_json::json;

const RED_FLAG_POOL: [&str; 5] = [
    "Generic cultural references detected",
    "Historical inaccuracies found",
    "Commercial bias in description",
    "Missing cultural context",
    "Stereotypical language used",
];

fn expected_tier(score: f64) -> (&'static str, &'static str, usize) {
    if score >= 85.0 {
        ("Highly Authentic", "green", 2)
    } else if score >= 70.0 {
        ("Moderately Authentic", "yellow", 3)
    } else {
        ("Questionable", "red", 3)
    }
}

#[tokio::test]
async fn analysis_has_expected_shape() {
    let response = post_json(
        common::build_test_app(),
        "/api/check-authenticity",
        json!({"content": "Hand-painted Madhubani scroll", "category": "artwork"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        keys(&json),
        sorted(&[
            "success",
            "analysis",
            "nlp_metrics",
            "red_flags",
            "recommendations",
            "timestamp",
        ])
    );
    assert_eq!(json["success"], true);
    assert_eq!(json["analysis"]["category"], "artwork");
    assert_eq!(json["analysis"]["content_length"], 29);
    assert_eq!(
        keys(&json["nlp_metrics"]),
        sorted(&[
            "cultural_accuracy",
            "historical_correctness",
            "language_appropriateness",
            "commercial_bias_score",
        ])
    );
}

#[tokio::test]
async fn defaults_apply_for_missing_fields() {
    let json = body_json(
        post_json(common::build_test_app(), "/api/check-authenticity", json!({})).await,
    )
    .await;

    assert_eq!(json["analysis"]["category"], "product");
    assert_eq!(
        json["analysis"]["content_length"],
        "Sample heritage description".len()
    );
}

#[tokio::test]
async fn tiers_and_red_flags_follow_the_score() {
    let app = common::build_test_app();

    for _ in 0..100 {
        let json = body_json(
            post_json(app.clone(), "/api/check-authenticity", json!({"content": "x"})).await,
        )
        .await;

        let analysis = &json["analysis"];
        let score = analysis["authenticity_score"].as_f64().unwrap();
        assert!((65.0..=95.0).contains(&score));

        let (level, color, recommendation_count) = expected_tier(score);
        assert_eq!(analysis["authenticity_level"], level, "score {score}");
        assert_eq!(analysis["status_color"], color, "score {score}");
        assert_eq!(
            json["recommendations"].as_array().unwrap().len(),
            recommendation_count
        );

        let flags: Vec<&str> = json["red_flags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f.as_str().unwrap())
            .collect();
        if score >= 80.0 {
            assert!(flags.is_empty(), "score {score} must not raise flags");
        } else {
            assert!(flags.len() <= 3);
            let unique: HashSet<_> = flags.iter().collect();
            assert_eq!(unique.len(), flags.len());
            assert!(flags.iter().all(|f| RED_FLAG_POOL.contains(f)));
        }

        let metrics = &json["nlp_metrics"];
        for (name, range) in [
            ("cultural_accuracy", 70.0..=95.0),
            ("historical_correctness", 75.0..=98.0),
            ("language_appropriateness", 80.0..=95.0),
            ("commercial_bias_score", 5.0..=30.0),
        ] {
            let value = metrics[name].as_f64().unwrap();
            assert!(range.contains(&value), "{name} = {value}");
        }
    }
}

#[tokio::test]
async fn non_string_category_is_echoed() {
    let app = common::build_test_app();

    for category in [json!(2), json!(null), json!(true)] {
        let response = post_json(
            app.clone(),
            "/api/check-authenticity",
            json!({ "content": "Terracotta figurine", "category": category }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{category}");
        assert_eq!(body_json(response).await["analysis"]["category"], category);
    }
}
