//! Confidence derivation
//!
//! Turns a raw classifier output (label + optional positive-class
//! probability) into a [`Decision`]:
//!
//! - No probability estimate → the approval probability defaults to 0.5
//! - Confidence is the probability of the *predicted* class: `p` when
//!   approved, `1 - p` when rejected
//!
//! # Example
//!
//! ```
//! use creditwise::analysis::confidence::decide;
//! use creditwise::analysis::result::Verdict;
//!
//! let decision = decide(0, Some(0.3));
//! assert_eq!(decision.verdict, Verdict::Rejected);
//! assert!((decision.confidence - 0.7).abs() < 1e-12);
//! ```

use super::result::{Decision, Verdict};

/// Probability used when the classifier cannot estimate one
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Build a decision from a classifier label and positive-class probability
pub fn decide(label: u8, probability: Option<f64>) -> Decision {
    let verdict = Verdict::from_label(label);

    // A NaN or infinite estimate counts as no estimate
    let finite = probability.filter(|p| p.is_finite());
    let estimated = finite.is_some();

    // Clamp guards against a model emitting 1.0000000002
    let p = finite.unwrap_or(DEFAULT_PROBABILITY).clamp(0.0, 1.0);

    let confidence = match verdict {
        Verdict::Approved => p,
        Verdict::Rejected => 1.0 - p,
    };

    log::debug!(
        "Decision: {:?} (p={:.4}, confidence={:.4}, estimated={})",
        verdict,
        p,
        confidence,
        estimated
    );

    Decision {
        verdict,
        approval_probability: p,
        confidence,
        probability_estimated: estimated,
    }
}

impl Decision {
    /// Confidence as a percentage (0-100)
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Check if confidence is high (>= 0.7)
    pub fn is_high_confidence(&self) -> bool {
        self.confidence >= 0.7
    }

    /// Check if confidence is low (< 0.5)
    ///
    /// Only reachable when the model's label and probability disagree, e.g.
    /// a custom threshold.
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < 0.5
    }

    /// "High", "Medium" or "Low"
    pub fn confidence_level(&self) -> &'static str {
        if self.is_high_confidence() {
            "High"
        } else if self.is_low_confidence() {
            "Low"
        } else {
            "Medium"
        }
    }
}
