//! Client-side dashboard exports.
//!
//! Two formats, both produced from the current snapshot without another
//! round-trip: the full snapshot as pretty JSON, and a flat CSV of the
//! headline numbers. PDF/Excel are out of scope client-side.

use crate::model::DashboardSnapshot;

/// Pretty-printed JSON of the whole snapshot.
pub fn to_pretty_json(snapshot: &DashboardSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Flat CSV: `section,metric,value`, overview rows then risk distribution.
pub fn to_csv(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::from("section,metric,value\n");

    let o = &snapshot.overview;
    out.push_str(&format!("overview,total_predictions,{}\n", o.total_predictions));
    out.push_str(&format!("overview,recent_predictions,{}\n", o.recent_predictions));
    out.push_str(&format!("overview,model_accuracy,{}\n", o.model_accuracy));
    out.push_str(&format!("overview,avg_response_time,{}\n", o.avg_response_time));

    let r = &snapshot.risk_distribution;
    out.push_str(&format!("risk_distribution,low,{}\n", r.low));
    out.push_str(&format!("risk_distribution,medium,{}\n", r.medium));
    out.push_str(&format!("risk_distribution,high,{}\n", r.high));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Overview, RiskDistribution};

    fn sample_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            overview: Overview {
                total_predictions: 128,
                recent_predictions: 12,
                model_accuracy: 94.2,
                avg_response_time: 0.3,
            },
            risk_distribution: RiskDistribution {
                low: 70,
                medium: 38,
                high: 20,
            },
            ..DashboardSnapshot::placeholder()
        }
    }

    #[test]
    fn csv_matches_fixture() {
        let expected = "\
section,metric,value
overview,total_predictions,128
overview,recent_predictions,12
overview,model_accuracy,94.2
overview,avg_response_time,0.3
risk_distribution,low,70
risk_distribution,medium,38
risk_distribution,high,20
";
        assert_eq!(to_csv(&sample_snapshot()), expected);
    }

    #[test]
    fn json_round_trips_through_the_model() {
        let snapshot = sample_snapshot();
        let json = to_pretty_json(&snapshot).unwrap();
        assert!(json.contains("\"total_predictions\": 128"));

        let back: DashboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.risk_distribution, snapshot.risk_distribution);
        assert_eq!(back.overview.total_predictions, 128);
    }
}
