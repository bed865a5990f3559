//! Runtime configuration

use crate::error::CreditError;
use std::net::IpAddr;
use std::path::PathBuf;

/// Default file name of the serialized classifier
pub const MODEL_FILE: &str = "loan_model.json";

/// Default file name of the fitted scaler
pub const SCALER_FILE: &str = "scaler.json";

/// Default file name of the ordered feature-column list
pub const FEATURE_NAMES_FILE: &str = "feature_names.json";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the three model artifacts (default: working directory)
    pub artifact_dir: PathBuf,

    /// Classifier file name inside `artifact_dir`
    pub model_file: String,

    /// Scaler file name inside `artifact_dir`
    pub scaler_file: String,

    /// Feature-name list file name inside `artifact_dir`
    pub feature_names_file: String,

    /// Address the HTTP server binds to (default: 0.0.0.0)
    pub bind: IpAddr,

    /// Port the HTTP server listens on (default: 8501)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("."),
            model_file: MODEL_FILE.to_string(),
            scaler_file: SCALER_FILE.to_string(),
            feature_names_file: FEATURE_NAMES_FILE.to_string(),
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8501,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment
    ///
    /// Reads `CREDITWISE_ARTIFACT_DIR`, `CREDITWISE_BIND` and `PORT`; unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, CreditError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CreditError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("CREDITWISE_ARTIFACT_DIR") {
            if dir.trim().is_empty() {
                return Err(CreditError::Config(
                    "CREDITWISE_ARTIFACT_DIR is empty".to_string(),
                ));
            }
            config.artifact_dir = PathBuf::from(dir);
        }

        if let Some(bind) = lookup("CREDITWISE_BIND") {
            config.bind = bind.parse().map_err(|_| {
                CreditError::Config(format!("CREDITWISE_BIND is not an IP address: {bind}"))
            })?;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| CreditError::Config(format!("PORT is not a valid port: {port}")))?;
        }

        Ok(config)
    }

    /// Full path of the classifier artifact
    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.model_file)
    }

    /// Full path of the scaler artifact
    pub fn scaler_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.scaler_file)
    }

    /// Full path of the feature-name artifact
    pub fn feature_names_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.feature_names_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8501);
        assert_eq!(config.artifact_dir, PathBuf::from("."));
        assert_eq!(config.model_path(), PathBuf::from("./loan_model.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CREDITWISE_ARTIFACT_DIR", "/srv/models"),
            ("CREDITWISE_BIND", "127.0.0.1"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.bind, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.scaler_path(), PathBuf::from("/srv/models/scaler.json"));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, CreditError::Config(_)));
    }

    #[test]
    fn test_invalid_bind() {
        let result = Config::from_lookup(lookup_from(&[("CREDITWISE_BIND", "localhost:80")]));
        assert!(result.is_err());
    }
}
