//! Fitted feature scalers
//!
//! A scaler is fitted once at training time and only ever applied here. The
//! statistics come from the `scaler.json` artifact:
//!
//! ```json
//! { "kind": "standard", "mean": [5200.0, 0.4], "scale": [1800.0, 0.2] }
//! ```

use crate::error::CreditError;
use serde::{Deserialize, Serialize};

fn unit_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// Column-wise transform applied to the encoded row before classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard {
        /// Per-column training mean
        mean: Vec<f64>,
        /// Per-column standard deviation (0 is treated as 1)
        scale: Vec<f64>,
    },
    /// `(x - data_min) / data_range * (hi - lo) + lo`
    MinMax {
        /// Per-column training minimum
        data_min: Vec<f64>,
        /// Per-column training range (0 is treated as 1)
        data_range: Vec<f64>,
        /// Output range `(lo, hi)`, default `(0, 1)`
        #[serde(default = "unit_range")]
        feature_range: (f64, f64),
    },
    /// Pass the row through unchanged
    Identity,
}

impl Scaler {
    /// Number of columns the scaler was fitted on (`None` for `Identity`)
    pub fn n_features(&self) -> Option<usize> {
        match self {
            Scaler::Standard { mean, .. } => Some(mean.len()),
            Scaler::MinMax { data_min, .. } => Some(data_min.len()),
            Scaler::Identity => None,
        }
    }

    /// Check internal consistency after deserialization
    pub fn validate(&self) -> Result<(), CreditError> {
        let (a, b, what) = match self {
            Scaler::Standard { mean, scale } => (mean.len(), scale.len(), "mean/scale"),
            Scaler::MinMax {
                data_min,
                data_range,
                ..
            } => (data_min.len(), data_range.len(), "data_min/data_range"),
            Scaler::Identity => return Ok(()),
        };

        if a != b {
            return Err(CreditError::Artifact(format!(
                "scaler {} lengths differ ({} vs {})",
                what, a, b
            )));
        }
        if a == 0 {
            return Err(CreditError::Artifact("scaler has no columns".to_string()));
        }
        Ok(())
    }

    /// Scale one row
    ///
    /// # Errors
    ///
    /// `CreditError::SchemaMismatch` if the row width differs from the fitted width.
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, CreditError> {
        if let Some(expected) = self.n_features() {
            if row.len() != expected {
                return Err(CreditError::SchemaMismatch {
                    stage: "scaler",
                    expected,
                    actual: row.len(),
                });
            }
        }

        let scaled = match self {
            Scaler::Standard { mean, scale } => row
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(&x, (&m, &s))| (x - m) / non_zero(s))
                .collect(),
            Scaler::MinMax {
                data_min,
                data_range,
                feature_range: (lo, hi),
            } => row
                .iter()
                .zip(data_min.iter().zip(data_range.iter()))
                .map(|(&x, (&min, &range))| (x - min) / non_zero(range) * (hi - lo) + lo)
                .collect(),
            Scaler::Identity => row.to_vec(),
        };

        Ok(scaled)
    }
}

/// Constant columns keep a unit divisor, as scikit-learn does
fn non_zero(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_transform() {
        let scaler = Scaler::Standard {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 0.0],
        };
        assert_eq!(scaler.transform(&[14.0, 3.0]).unwrap(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = Scaler::MinMax {
            data_min: vec![0.0, 300.0],
            data_range: vec![100.0, 600.0],
            feature_range: (0.0, 1.0),
        };
        let out = scaler.transform(&[50.0, 900.0]).unwrap();
        assert!((out[0] - 0.5).abs() < 1e-12);
        assert!((out[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = Scaler::Standard {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        assert_eq!(
            scaler.transform(&[1.0, 2.0]).unwrap_err(),
            CreditError::SchemaMismatch {
                stage: "scaler",
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_identity_passthrough() {
        assert_eq!(Scaler::Identity.transform(&[1.5, -2.0]).unwrap(), vec![1.5, -2.0]);
        assert_eq!(Scaler::Identity.n_features(), None);
    }

    #[test]
    fn test_deserialize_and_validate() {
        let scaler: Scaler =
            serde_json::from_str(r#"{"kind": "min_max", "data_min": [0.0], "data_range": [2.0]}"#)
                .unwrap();
        assert!(scaler.validate().is_ok());
        assert_eq!(scaler.transform(&[1.0]).unwrap(), vec![0.5]);

        let broken: Scaler =
            serde_json::from_str(r#"{"kind": "standard", "mean": [0.0, 1.0], "scale": [1.0]}"#)
                .unwrap();
        assert!(matches!(broken.validate(), Err(CreditError::Artifact(_))));
    }
}
