//! # CreditWise
//!
//! Loan eligibility scoring with explainable risk and strength factors.
//!
//! ## Features
//!
//! - **Feature encoding**: applicant form → fixed-width model row, with one-hot
//!   categoricals (baseline levels have no column) and a derived DTI ratio
//! - **Inference**: fitted scaler + binary classifier loaded from JSON artifacts
//!   (logistic regression, linear SVM, decision tree, random forest)
//! - **Explanation**: confidence, financial snapshot, four risk and four
//!   strength factors
//! - **Web form**: server-rendered page with SVG charts and a JSON API
//!   (`server` feature)
//!
//! ## Quick Start
//!
//! ```no_run
//! use creditwise::{ApplicantInput, Artifacts, Config, Predictor};
//!
//! let artifacts = Artifacts::load(&Config::default())?;
//! let predictor = Predictor::new(artifacts);
//!
//! let report = predictor.assess(&ApplicantInput::default())?;
//! println!(
//!     "{} (confidence: {:.2}%)",
//!     report.decision.verdict.headline(),
//!     report.decision.confidence_percent()
//! );
//! # Ok::<(), creditwise::CreditError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Form Input → Validation → Feature Encoding → Scaling → Classifier → Analysis → Page / JSON
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod ml;
pub mod render;

#[cfg(feature = "server")]
pub mod server;

// Re-export main types
pub use analysis::flags::{Factor, FactorKind, RiskStrengthFlags};
pub use analysis::result::{Decision, DecisionReport, Verdict};
pub use analysis::snapshot::FinancialSnapshot;
pub use config::Config;
pub use error::CreditError;
pub use features::{encode, ApplicantInput, FeatureSchema, FeatureVector};
pub use ml::{Artifacts, Predictor};

/// Score one applicant against loaded artifacts
///
/// Convenience wrapper around [`Predictor::assess`] for one-off use.
///
/// # Errors
///
/// - `CreditError::InvalidInput` if a field is outside its form bounds
/// - `CreditError::SchemaMismatch` if the artifacts disagree on row width
///
/// # Example
///
/// ```
/// use creditwise::ml::{Classifier, Scaler};
/// use creditwise::{assess, ApplicantInput, Artifacts, FeatureSchema, Verdict};
///
/// let schema = FeatureSchema::new(vec!["Credit_Score".to_string()])?;
/// let classifier = Classifier::LogisticRegression { coef: vec![0.01], intercept: -6.0 };
/// let artifacts = Artifacts::new(schema, Scaler::Identity, Box::new(classifier));
///
/// // 650 * 0.01 - 6.0 = 0.5 > 0
/// let report = assess(&artifacts, &ApplicantInput::default())?;
/// assert_eq!(report.decision.verdict, Verdict::Approved);
/// # Ok::<(), creditwise::CreditError>(())
/// ```
pub fn assess(artifacts: &Artifacts, input: &ApplicantInput) -> Result<DecisionReport, CreditError> {
    let start_time = std::time::Instant::now();

    log::debug!("Assessing applicant against {} columns", artifacts.schema.len());

    input.validate()?;
    let vector = encode(input, &artifacts.schema);

    let report = DecisionReport {
        decision: ml::predictor::infer(artifacts, &vector)?,
        snapshot: FinancialSnapshot::from_input(input),
        flags: RiskStrengthFlags::from_input(input),
    };

    log::debug!(
        "Assessment finished in {:.3} ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(report)
}
