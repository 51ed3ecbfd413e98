//! Decision - maps a prediction to what the operator sees

use serde::{Deserialize, Serialize};

use super::inference::PredictionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionLevel {
    /// Affirmative, no action
    Success,
    /// Maintenance warning
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub needs_maintenance: bool,
    pub level: DecisionLevel,
    pub headline: String,
    /// Confidence in the predicted label
    pub probability: f32,
    /// e.g. `"97.25%"`
    pub probability_text: String,
}

pub const NO_MAINTENANCE_HEADLINE: &str = "No Maintenance Required";
pub const MAINTENANCE_HEADLINE: &str = "Maintenance Needed";

impl Decision {
    pub fn from_prediction(prediction: &PredictionResult) -> Self {
        let (needs_maintenance, level, headline, probability) = if prediction.label == 0 {
            (
                false,
                DecisionLevel::Success,
                NO_MAINTENANCE_HEADLINE,
                prediction.probabilities[0],
            )
        } else {
            (
                true,
                DecisionLevel::Warning,
                MAINTENANCE_HEADLINE,
                prediction.probabilities[1],
            )
        };

        Self {
            needs_maintenance,
            level,
            headline: headline.to_string(),
            probability,
            probability_text: format_percent(probability),
        }
    }
}

/// Percentage with two decimals
pub fn format_percent(probability: f32) -> String {
    format!("{:.2}%", probability as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: u8, probabilities: [f32; 2]) -> PredictionResult {
        PredictionResult {
            label,
            probability: probabilities[label as usize],
            probabilities,
            inference_time_us: 0,
        }
    }

    #[test]
    fn test_label_zero_is_affirmative_with_p0() {
        let decision = Decision::from_prediction(&prediction(0, [0.9725, 0.0275]));
        assert!(!decision.needs_maintenance);
        assert_eq!(decision.level, DecisionLevel::Success);
        assert_eq!(decision.headline, NO_MAINTENANCE_HEADLINE);
        assert_eq!(decision.probability, 0.9725);
        assert_eq!(decision.probability_text, "97.25%");
    }

    #[test]
    fn test_label_one_is_warning_with_p1() {
        let decision = Decision::from_prediction(&prediction(1, [0.35, 0.65]));
        assert!(decision.needs_maintenance);
        assert_eq!(decision.level, DecisionLevel::Warning);
        assert_eq!(decision.headline, MAINTENANCE_HEADLINE);
        assert_eq!(decision.probability, 0.65);
        assert_eq!(decision.probability_text, "65.00%");
    }

    #[test]
    fn test_low_confidence_is_still_the_predicted_label() {
        // Probability follows the label, never "always P(failure)"
        let decision = Decision::from_prediction(&prediction(1, [0.45, 0.55]));
        assert_eq!(decision.probability_text, "55.00%");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.5), "50.00%");
    }
}
