//! Binary classifiers loaded from the model artifact
//!
//! Every classifier exposes a label prediction; probability estimates are
//! optional. Models without them (a linear SVM, for instance) return `None`
//! and the caller falls back to a neutral 0.5.
//!
//! Artifact layout (`loan_model.json`), tagged by `kind`:
//!
//! ```json
//! { "kind": "logistic_regression", "coef": [0.8, -1.2], "intercept": 0.1 }
//! ```

use crate::error::CreditError;
use serde::{Deserialize, Serialize};

/// Inference contract of a fitted binary classifier
pub trait BinaryClassifier: Send + Sync + std::fmt::Debug {
    /// Width of the rows the model was fitted on
    fn n_features(&self) -> usize;

    /// Predicted class (0 = reject, 1 = approve)
    fn predict(&self, row: &[f64]) -> Result<u8, CreditError>;

    /// Probability of class 1, if the model can estimate one
    fn predict_proba(&self, row: &[f64]) -> Result<Option<f64>, CreditError>;
}

/// A single fitted tree in flattened (scikit-learn `tree_`) layout
///
/// Node `i` splits on `feature[i] <= threshold[i]` (left) vs `>` (right);
/// `children_left[i] == -1` marks a leaf whose positive-class probability
/// is `value[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Row width the tree was grown on
    pub n_features: usize,
    /// Left child per node, -1 for leaves
    pub children_left: Vec<i64>,
    /// Right child per node, -1 for leaves
    pub children_right: Vec<i64>,
    /// Split column per node (ignored on leaves)
    pub feature: Vec<i64>,
    /// Split threshold per node (ignored on leaves)
    pub threshold: Vec<f64>,
    /// Positive-class probability per node
    pub value: Vec<f64>,
}

impl DecisionTree {
    fn validate(&self) -> Result<(), CreditError> {
        let n = self.children_left.len();
        if n == 0 {
            return Err(CreditError::Artifact("decision tree has no nodes".to_string()));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(CreditError::Artifact(
                "decision tree node arrays differ in length".to_string(),
            ));
        }

        for i in 0..n {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == -1 {
                if !(0.0..=1.0).contains(&self.value[i]) {
                    return Err(CreditError::Artifact(format!(
                        "leaf {} probability {} outside [0, 1]",
                        i, self.value[i]
                    )));
                }
                continue;
            }
            // Children always come after their parent in the flattened layout
            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(CreditError::Artifact(format!(
                        "node {} has invalid child {}",
                        i, child
                    )));
                }
            }
            let feature = self.feature[i];
            if feature < 0 || feature as usize >= self.n_features {
                return Err(CreditError::Artifact(format!(
                    "node {} splits on column {} of {}",
                    i, feature, self.n_features
                )));
            }
        }
        Ok(())
    }

    fn leaf_probability(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != -1 {
            let column = self.feature[node] as usize;
            node = if row[column] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }
}

/// Classifiers the model artifact can describe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// Logistic regression: sigmoid of `coef · x + intercept`
    LogisticRegression {
        /// Weight per column
        coef: Vec<f64>,
        /// Bias term
        intercept: f64,
    },
    /// Linear SVM: sign of `coef · x + intercept`, no probabilities
    LinearSvm {
        /// Weight per column
        coef: Vec<f64>,
        /// Bias term
        intercept: f64,
    },
    /// Single decision tree
    DecisionTree(DecisionTree),
    /// Bagged trees; probability is the mean over trees
    RandomForest {
        /// Fitted trees
        trees: Vec<DecisionTree>,
    },
}

impl Classifier {
    /// Check internal consistency after deserialization
    pub fn validate(&self) -> Result<(), CreditError> {
        match self {
            Classifier::LogisticRegression { coef, .. } | Classifier::LinearSvm { coef, .. } => {
                if coef.is_empty() {
                    return Err(CreditError::Artifact(
                        "linear model has no coefficients".to_string(),
                    ));
                }
                Ok(())
            }
            Classifier::DecisionTree(tree) => tree.validate(),
            Classifier::RandomForest { trees } => {
                let first = trees.first().ok_or_else(|| {
                    CreditError::Artifact("random forest has no trees".to_string())
                })?;
                for tree in trees {
                    if tree.n_features != first.n_features {
                        return Err(CreditError::Artifact(
                            "random forest trees disagree on feature count".to_string(),
                        ));
                    }
                    tree.validate()?;
                }
                Ok(())
            }
        }
    }

    fn check_width(&self, row: &[f64]) -> Result<(), CreditError> {
        let expected = self.n_features();
        if row.len() != expected {
            return Err(CreditError::SchemaMismatch {
                stage: "classifier",
                expected,
                actual: row.len(),
            });
        }
        Ok(())
    }

    fn decision_function(coef: &[f64], intercept: f64, row: &[f64]) -> f64 {
        coef.iter().zip(row).map(|(w, x)| w * x).sum::<f64>() + intercept
    }

    fn forest_probability(trees: &[DecisionTree], row: &[f64]) -> f64 {
        trees.iter().map(|t| t.leaf_probability(row)).sum::<f64>() / trees.len() as f64
    }
}

/// Logistic function, split by sign to stay finite for large |z|
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl BinaryClassifier for Classifier {
    fn n_features(&self) -> usize {
        match self {
            Classifier::LogisticRegression { coef, .. } | Classifier::LinearSvm { coef, .. } => {
                coef.len()
            }
            Classifier::DecisionTree(tree) => tree.n_features,
            Classifier::RandomForest { trees } => trees.first().map_or(0, |t| t.n_features),
        }
    }

    fn predict(&self, row: &[f64]) -> Result<u8, CreditError> {
        self.check_width(row)?;
        let positive = match self {
            Classifier::LogisticRegression { coef, intercept }
            | Classifier::LinearSvm { coef, intercept } => {
                Self::decision_function(coef, *intercept, row) > 0.0
            }
            // Ties go to class 0, matching argmax over [p0, p1]
            Classifier::DecisionTree(tree) => tree.leaf_probability(row) > 0.5,
            Classifier::RandomForest { trees } => Self::forest_probability(trees, row) > 0.5,
        };
        Ok(u8::from(positive))
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Option<f64>, CreditError> {
        self.check_width(row)?;
        let p = match self {
            Classifier::LogisticRegression { coef, intercept } => {
                Some(sigmoid(Self::decision_function(coef, *intercept, row)))
            }
            Classifier::LinearSvm { .. } => None,
            Classifier::DecisionTree(tree) => Some(tree.leaf_probability(row)),
            Classifier::RandomForest { trees } => Some(Self::forest_probability(trees, row)),
        };
        Ok(p)
    }
}
