//! Decision and report types

use super::flags::RiskStrengthFlags;
use super::snapshot::FinancialSnapshot;
use serde::{Deserialize, Serialize};

/// Binary loan outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Classifier label 1
    Approved,
    /// Classifier label 0
    Rejected,
}

impl Verdict {
    /// Map a classifier label (1 = approve, anything else = reject)
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Verdict::Approved
        } else {
            Verdict::Rejected
        }
    }

    /// Classifier label for this verdict
    pub fn label(self) -> u8 {
        match self {
            Verdict::Approved => 1,
            Verdict::Rejected => 0,
        }
    }

    /// Headline shown on the decision panel
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Approved => "Loan Approved",
            Verdict::Rejected => "Loan Rejected",
        }
    }
}

/// One model decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Approve or reject
    pub verdict: Verdict,

    /// Probability of approval as estimated by the model (0.5 if unsupported)
    pub approval_probability: f64,

    /// Probability mass on the predicted class (0.0-1.0)
    pub confidence: f64,

    /// False when the classifier cannot estimate probabilities
    pub probability_estimated: bool,
}

/// Everything rendered for one submission
#[derive(Debug, Clone, Serialize)]
pub struct DecisionReport {
    /// Model decision
    pub decision: Decision,
    /// Income, DTI and savings metrics
    pub snapshot: FinancialSnapshot,
    /// Qualitative risk and strength factors
    pub flags: RiskStrengthFlags,
}
