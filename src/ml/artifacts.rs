//! Artifact loading
//!
//! The classifier, the fitted scaler and the ordered feature-name list are
//! read once at process start. Any failure here is fatal: the service has
//! nothing to score with.

use super::classifier::{BinaryClassifier, Classifier};
use super::scaler::Scaler;
use crate::config::Config;
use crate::error::CreditError;
use crate::features::FeatureSchema;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The three read-only model artifacts
#[derive(Debug)]
pub struct Artifacts {
    /// Ordered feature columns
    pub schema: FeatureSchema,
    /// Fitted scaler
    pub scaler: Scaler,
    /// Fitted classifier
    pub classifier: Box<dyn BinaryClassifier>,
}

impl Artifacts {
    /// Assemble artifacts from already-built parts
    pub fn new(
        schema: FeatureSchema,
        scaler: Scaler,
        classifier: Box<dyn BinaryClassifier>,
    ) -> Self {
        Self {
            schema,
            scaler,
            classifier,
        }
    }

    /// Load all three artifacts from the paths named by `config`
    ///
    /// # Arguments
    ///
    /// * `config` - Runtime configuration; only the artifact paths are read
    ///
    /// # Returns
    ///
    /// `Artifacts` holding the feature schema, the fitted scaler and the classifier
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Artifact` if a file is missing or cannot be parsed.
    /// The service treats this as fatal at startup.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use creditwise::{Artifacts, Config};
    ///
    /// let artifacts = Artifacts::load(&Config::from_env()?)?;
    /// println!("model expects {} features", artifacts.schema.len());
    /// # Ok::<(), creditwise::CreditError>(())
    /// ```
    pub fn load(config: &Config) -> Result<Self, CreditError> {
        Self::load_from_paths(
            &config.model_path(),
            &config.scaler_path(),
            &config.feature_names_path(),
        )
    }

    /// Load all three artifacts from explicit paths
    ///
    /// Only checks what deserialization itself implies (well-formed JSON,
    /// internally consistent arrays). Widths are not cross-checked between
    /// artifacts; a disagreement surfaces per request as
    /// `CreditError::SchemaMismatch`.
    pub fn load_from_paths(
        model_path: &Path,
        scaler_path: &Path,
        feature_names_path: &Path,
    ) -> Result<Self, CreditError> {
        let classifier: Classifier = read_json(model_path)?;
        classifier.validate()?;

        let scaler: Scaler = read_json(scaler_path)?;
        scaler.validate()?;

        let names: Vec<String> = read_json(feature_names_path)?;
        let schema = FeatureSchema::new(names)?;

        log::info!(
            "Loaded artifacts: {} feature columns, scaler width {:?}, classifier width {}",
            schema.len(),
            scaler.n_features(),
            classifier.n_features()
        );

        if scaler.n_features().is_some_and(|w| w != schema.len())
            || classifier.n_features() != schema.len()
        {
            log::warn!("Artifact widths disagree with the feature list; predictions will fail");
        }

        Ok(Self::new(schema, scaler, Box::new(classifier)))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CreditError> {
    log::debug!("Reading artifact {}", path.display());

    let file = File::open(path)
        .map_err(|e| CreditError::Artifact(format!("cannot open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| CreditError::Artifact(format!("cannot parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_artifacts() {
        let dir = tempdir().unwrap();
        let model = write(
            &dir,
            "loan_model.json",
            r#"{"kind": "logistic_regression", "coef": [0.1, 0.2], "intercept": 0.0}"#,
        );
        let scaler = write(
            &dir,
            "scaler.json",
            r#"{"kind": "standard", "mean": [0.0, 0.0], "scale": [1.0, 1.0]}"#,
        );
        let names = write(&dir, "feature_names.json", r#"["Credit_Score", "DTI_Ratio"]"#);

        let artifacts = Artifacts::load_from_paths(&model, &scaler, &names).unwrap();
        assert_eq!(artifacts.schema.len(), 2);
        assert_eq!(artifacts.classifier.n_features(), 2);
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let dir = tempdir().unwrap();
        let names = write(&dir, "feature_names.json", r#"["Age"]"#);
        let missing = dir.path().join("nope.json");

        let err = Artifacts::load_from_paths(&missing, &missing, &names).unwrap_err();
        assert!(matches!(err, CreditError::Artifact(msg) if msg.contains("cannot open")));
    }

    #[test]
    fn test_garbage_is_artifact_error() {
        let dir = tempdir().unwrap();
        let model = write(&dir, "loan_model.json", "\u{80}\u{3}pickle");
        let scaler = write(&dir, "scaler.json", r#"{"kind": "identity"}"#);
        let names = write(&dir, "feature_names.json", r#"["Age"]"#);

        let err = Artifacts::load_from_paths(&model, &scaler, &names).unwrap_err();
        assert!(matches!(err, CreditError::Artifact(msg) if msg.contains("cannot parse")));
    }

    #[test]
    fn test_width_disagreement_still_loads() {
        let dir = tempdir().unwrap();
        let model = write(
            &dir,
            "loan_model.json",
            r#"{"kind": "linear_svm", "coef": [1.0, 1.0, 1.0], "intercept": 0.0}"#,
        );
        let scaler = write(&dir, "scaler.json", r#"{"kind": "identity"}"#);
        let names = write(&dir, "feature_names.json", r#"["Age", "Savings"]"#);

        assert!(Artifacts::load_from_paths(&model, &scaler, &names).is_ok());
    }
}
