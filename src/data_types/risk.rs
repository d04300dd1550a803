
use serde::{Deserialize, Serialize};

/// Ordinal severity attached to a risk label, least to most severe
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[strum(to_string = "low")]
    Low,
    #[strum(to_string = "moderate")]
    Moderate,
    #[strum(to_string = "high")]
    High,
    #[strum(to_string = "critical")]
    Critical
}

/// The drug-level outcome of the risk engine
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Label drawn from the drug's rule table
    risk_label: String,
    /// Ordinal severity of the rule
    severity: Severity,
    /// Confidence in [0, 1]; penalized for missing coverage or unknown zygosity
    confidence_score: f64
}

impl RiskAssessment {
    /// Basic constructor; the score is clamped into [0, 1] so no rule/penalty
    /// combination can produce an out-of-range confidence.
    pub fn new(risk_label: String, severity: Severity, confidence_score: f64) -> RiskAssessment {
        RiskAssessment {
            risk_label,
            severity,
            confidence_score: confidence_score.clamp(0.0, 1.0)
        }
    }

    pub fn risk_label(&self) -> &str {
        &self.risk_label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }
}
