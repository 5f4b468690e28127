use chrono::Utc;
use serde::Serialize;

use super::Explanation;
use crate::catalog::MetricDefinition;
use crate::engine::{BatchReport, ScoreOutcome};

pub fn to_json(outcome: &ScoreOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

/// Batch output carries the tool version and timestamp so saved result
/// files stay traceable.
#[derive(Debug, Serialize)]
struct BatchEnvelope<'a> {
    version: String,
    generated_at: String,
    #[serde(flatten)]
    report: &'a BatchReport,
}

pub fn batch_to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    let envelope = BatchEnvelope {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        report,
    };
    serde_json::to_string_pretty(&envelope)
}

pub fn catalog_to_json(metrics: &[&MetricDefinition]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&metrics)
}

pub fn explanation_to_json(explanation: &Explanation<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(explanation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::BandTable;
    use crate::catalog::MetricCatalog;
    use crate::engine::{score, ScoreRequest};

    fn outcome(metric: &str, value: f64) -> ScoreOutcome {
        let catalog = MetricCatalog::standard();
        let bands = BandTable::standard();
        let request = ScoreRequest {
            metric,
            value,
            profile: None,
            thresholds: None,
        };
        score(&catalog, &bands, &request).expect("metric should score")
    }

    #[test]
    fn outcome_json_carries_score_and_rating() {
        let rendered = to_json(&outcome("Knee Lift Height", 45.0)).expect("json should serialize");
        assert!(rendered.contains("\"score\": 100.0"));
        assert!(rendered.contains("\"rating\": \"ELITE\""));
        assert!(rendered.contains("\"metric\": \"Knee Lift Height\""));
        assert!(rendered.contains("\"description\""));
        assert!(rendered.contains("\"parameters_used\""));
        assert!(rendered.contains("\"optimal_min\": 45.0"));
    }

    #[test]
    fn batch_json_is_versioned() {
        let catalog = MetricCatalog::standard();
        let bands = BandTable::standard();
        let report = crate::engine::score_batch(&catalog, &bands, &[], None);
        let rendered = batch_to_json(&report).expect("json should serialize");
        assert!(rendered.contains(&format!("\"version\": \"{}\"", env!("CARGO_PKG_VERSION"))));
        assert!(rendered.contains("\"generated_at\""));
        assert!(rendered.contains("\"rows\": []"));
    }

    #[test]
    fn catalog_json_lists_definitions() {
        let catalog = MetricCatalog::standard();
        let metrics: Vec<_> = catalog.iter().take(3).collect();
        let rendered = catalog_to_json(&metrics).expect("json should serialize");
        assert!(rendered.starts_with('['));
        assert!(rendered.contains("\"unit\""));
    }

    #[test]
    fn explanation_json_carries_bands_and_comparison() {
        use crate::types::profile::{AgeGroup, Profile, SkillLevel};

        let catalog = MetricCatalog::standard();
        let bands = BandTable::standard();
        let metric = catalog
            .lookup("Knee Lift Height Adaptive")
            .expect("metric exists");
        let profile = Profile::new(AgeGroup::Adult, SkillLevel::Elite);
        let explanation = Explanation::build(metric, Some(profile), &bands);
        let rendered = explanation_to_json(&explanation).expect("json should serialize");
        assert!(rendered.contains("\"bands\""));
        assert!(rendered.contains("\"comparison\""));
        assert!(rendered.contains("\"selected\": true"));
    }
}
