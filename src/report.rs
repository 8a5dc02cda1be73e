//! Plain-text assessment report and share summary.
//!
//! The report is generated entirely client-side from the last prediction and
//! downloaded as a `.txt` file. The template is byte-stable except for the
//! generated-at stamp, so tests pin it as a fixture.

use chrono::{DateTime, Local};

use crate::model::PredictionResult;

/// Render the downloadable assessment report.
pub fn build_report(result: &PredictionResult, generated: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("DIABETES RISK ASSESSMENT REPORT\n");
    out.push_str("================================\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Prediction: {}\n", result.prediction_label));
    out.push_str(&format!(
        "Risk level: {}\n\n",
        result.risk_level.label().to_uppercase()
    ));
    out.push_str("Confidence\n----------\n");
    out.push_str(&format!("Diabetic:     {:.1}%\n", result.confidence.diabetic));
    out.push_str(&format!(
        "Non-diabetic: {:.1}%\n\n",
        result.confidence.non_diabetic
    ));
    out.push_str("Health advice\n-------------\n");
    for (i, advice) in result.health_advice.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, advice));
    }
    out.push_str("\nThis report is informational and is not a medical diagnosis.\n");

    out
}

/// One-line summary for the share sheet / clipboard.
pub fn share_summary(result: &PredictionResult) -> String {
    format!(
        "Diabetes risk assessment: {} ({}, {:.1}% diabetic confidence)",
        result.prediction_label,
        result.risk_level.label(),
        result.confidence.diabetic
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Confidence, RiskLevel};
    use chrono::TimeZone;

    fn sample_result() -> PredictionResult {
        PredictionResult {
            status: "success".to_string(),
            prediction: 1,
            prediction_label: "Diabetic".to_string(),
            risk_level: RiskLevel::High,
            confidence: Confidence {
                diabetic: 78.25,
                non_diabetic: 21.75,
            },
            health_advice: vec![
                "Consult a healthcare provider promptly.".to_string(),
                "Monitor blood glucose regularly.".to_string(),
            ],
            timestamp: Some("2024-05-01T10:30:00".to_string()),
        }
    }

    #[test]
    fn report_matches_fixture() {
        let generated = Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let report = build_report(&sample_result(), generated);

        let expected = "\
DIABETES RISK ASSESSMENT REPORT
================================

Generated: 2024-05-01 10:30:00

Prediction: Diabetic
Risk level: HIGH RISK

Confidence
----------
Diabetic:     78.2%
Non-diabetic: 21.8%

Health advice
-------------
1. Consult a healthcare provider promptly.
2. Monitor blood glucose regularly.

This report is informational and is not a medical diagnosis.
";
        assert_eq!(report, expected);
    }

    #[test]
    fn report_with_no_advice_has_empty_section() {
        let mut result = sample_result();
        result.health_advice.clear();
        let generated = Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let report = build_report(&result, generated);
        assert!(report.contains("Health advice\n-------------\n\nThis report"));
    }

    #[test]
    fn share_summary_is_one_line() {
        let summary = share_summary(&sample_result());
        assert_eq!(
            summary,
            "Diabetes risk assessment: Diabetic (High Risk, 78.2% diabetic confidence)"
        );
        assert!(!summary.contains('\n'));
    }
}
