//! Inference over loaded artifacts

use super::artifacts::Artifacts;
use crate::analysis::confidence::decide;
use crate::analysis::result::{Decision, DecisionReport};
use crate::error::CreditError;
use crate::features::{ApplicantInput, FeatureSchema, FeatureVector};

/// Scale an encoded vector and run the classifier
///
/// # Arguments
///
/// * `artifacts` - Loaded schema, scaler and classifier
/// * `vector` - Applicant row encoded against `artifacts.schema`
///
/// # Returns
///
/// `Decision` with the verdict, the confidence in that verdict, and whether
/// the classifier produced a probability at all
///
/// # Errors
///
/// `CreditError::SchemaMismatch` if the vector was built against a different
/// schema, or if scaler or classifier were fitted on a different width.
///
/// # Example
///
/// ```no_run
/// use creditwise::ml::predictor::infer;
/// use creditwise::{encode, ApplicantInput, Artifacts, Config};
///
/// let artifacts = Artifacts::load(&Config::from_env()?)?;
/// let vector = encode(&ApplicantInput::default(), &artifacts.schema);
/// let decision = infer(&artifacts, &vector)?;
/// println!("{:?} at {:.1}%", decision.verdict, decision.confidence_percent());
/// # Ok::<(), creditwise::CreditError>(())
/// ```
pub fn infer(artifacts: &Artifacts, vector: &FeatureVector<'_>) -> Result<Decision, CreditError> {
    let schema = &artifacts.schema;
    if vector.schema().names() != schema.names() {
        return Err(CreditError::SchemaMismatch {
            stage: "feature schema",
            expected: schema.len(),
            actual: vector.len(),
        });
    }

    let scaled = artifacts.scaler.transform(vector.as_row())?;

    let label = artifacts.classifier.predict(&scaled)?;
    let probability = artifacts.classifier.predict_proba(&scaled)?;

    Ok(decide(label, probability))
}

/// Read-only scoring handle
///
/// Holds the artifacts for the process lifetime. Share it behind an `Arc`;
/// nothing in it is mutated after construction.
#[derive(Debug)]
pub struct Predictor {
    artifacts: Artifacts,
}

impl Predictor {
    /// Wrap loaded artifacts
    pub fn new(artifacts: Artifacts) -> Self {
        Self { artifacts }
    }

    /// Feature schema the model expects
    pub fn schema(&self) -> &FeatureSchema {
        &self.artifacts.schema
    }

    /// Scale an encoded vector and run the classifier
    pub fn predict(&self, vector: &FeatureVector<'_>) -> Result<Decision, CreditError> {
        infer(&self.artifacts, vector)
    }

    /// Full pipeline for one applicant: validate, encode, predict, analyze
    pub fn assess(&self, input: &ApplicantInput) -> Result<DecisionReport, CreditError> {
        crate::assess(&self.artifacts, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Verdict;
    use crate::features::encode;
    use crate::ml::classifier::{BinaryClassifier, Classifier};
    use crate::ml::scaler::Scaler;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            ["Credit_Score", "DTI_Ratio", "Gender_Male"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    fn predictor(scaler: Scaler, classifier: Classifier) -> Predictor {
        Predictor::new(Artifacts::new(schema(), scaler, Box::new(classifier)))
    }

    /// Approves whenever the scaled credit score is positive, no probabilities
    #[derive(Debug)]
    struct CreditOnly;

    impl BinaryClassifier for CreditOnly {
        fn n_features(&self) -> usize {
            3
        }
        fn predict(&self, row: &[f64]) -> Result<u8, CreditError> {
            Ok(u8::from(row[0] > 0.0))
        }
        fn predict_proba(&self, _row: &[f64]) -> Result<Option<f64>, CreditError> {
            Ok(None)
        }
    }

    #[test]
    fn test_assess_scales_before_classifying() {
        // Standardized credit (650 - 600) / 50 = 1.0 → z = 2.0 - 0.5 = 1.5
        let p = predictor(
            Scaler::Standard {
                mean: vec![600.0, 0.0, 0.0],
                scale: vec![50.0, 1.0, 1.0],
            },
            Classifier::LogisticRegression {
                coef: vec![2.0, 0.0, 0.0],
                intercept: -0.5,
            },
        );

        let report = p.assess(&ApplicantInput::default()).unwrap();
        assert_eq!(report.decision.verdict, Verdict::Approved);
        let expected = 1.0 / (1.0 + (-1.5f64).exp());
        assert!((report.decision.confidence - expected).abs() < 1e-12);
        assert_eq!(report.snapshot.dti_ratio, 20.0);
    }

    #[test]
    fn test_custom_classifier_without_probabilities() {
        let p = Predictor::new(Artifacts::new(
            schema(),
            Scaler::Standard {
                mean: vec![700.0, 0.0, 0.0],
                scale: vec![1.0, 1.0, 1.0],
            },
            Box::new(CreditOnly),
        ));

        let report = p.assess(&ApplicantInput::default()).unwrap();
        assert_eq!(report.decision.verdict, Verdict::Rejected);
        assert_eq!(report.decision.confidence, 0.5);
        assert!(!report.decision.probability_estimated);
    }

    #[test]
    fn test_scaler_width_mismatch() {
        let p = predictor(
            Scaler::Standard {
                mean: vec![0.0; 4],
                scale: vec![1.0; 4],
            },
            Classifier::LinearSvm {
                coef: vec![1.0; 3],
                intercept: 0.0,
            },
        );
        let err = p.assess(&ApplicantInput::default()).unwrap_err();
        assert_eq!(
            err,
            CreditError::SchemaMismatch {
                stage: "scaler",
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_classifier_width_mismatch() {
        let p = predictor(
            Scaler::Identity,
            Classifier::LinearSvm {
                coef: vec![1.0; 5],
                intercept: 0.0,
            },
        );
        let err = p.assess(&ApplicantInput::default()).unwrap_err();
        assert!(matches!(
            err,
            CreditError::SchemaMismatch {
                stage: "classifier",
                ..
            }
        ));
    }

    #[test]
    fn test_foreign_vector_rejected() {
        let p = predictor(
            Scaler::Identity,
            Classifier::LinearSvm {
                coef: vec![1.0; 3],
                intercept: 0.0,
            },
        );
        let other = FeatureSchema::new(vec!["Age".to_string()]).unwrap();
        let vector = encode(&ApplicantInput::default(), &other);
        assert!(p.predict(&vector).is_err());
    }

    #[test]
    fn test_invalid_input_rejected_before_encoding() {
        let p = predictor(
            Scaler::Identity,
            Classifier::LinearSvm {
                coef: vec![1.0; 3],
                intercept: 0.0,
            },
        );
        let input = ApplicantInput {
            credit_score: 1200,
            ..Default::default()
        };
        assert!(matches!(p.assess(&input), Err(CreditError::InvalidInput(_))));
    }
}
