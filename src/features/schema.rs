//! Feature schema and the fixed-width vector built against it

use crate::error::CreditError;
use std::collections::HashMap;

/// Ordered list of feature-column names the model was fitted on
///
/// The schema fixes the width and column order of every vector handed to the
/// scaler and classifier. A name→index map is built once at construction so
/// that encoding a request never allocates a map.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from the ordered column names
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Artifact` if the list is empty or names a column twice.
    pub fn new(names: Vec<String>) -> Result<Self, CreditError> {
        if names.is_empty() {
            return Err(CreditError::Artifact(
                "feature name list is empty".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(CreditError::Artifact(format!(
                    "duplicate feature column: {}",
                    name
                )));
            }
        }

        Ok(Self { names, index })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column position of `name`, if the schema has it
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Column names in model order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// One encoded applicant: a value per schema column, in schema order
#[derive(Debug, Clone)]
pub struct FeatureVector<'a> {
    schema: &'a FeatureSchema,
    values: Vec<f64>,
}

impl<'a> FeatureVector<'a> {
    /// Zero-filled vector for `schema`
    pub fn zeros(schema: &'a FeatureSchema) -> Self {
        Self {
            schema,
            values: vec![0.0; schema.len()],
        }
    }

    /// Assign `value` to column `name`
    ///
    /// Returns `false` and leaves the vector untouched when the schema has no
    /// such column.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.schema.position(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Value of column `name`
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|i| self.values[i])
    }

    /// The row handed to the scaler
    pub fn as_row(&self) -> &[f64] {
        &self.values
    }

    /// Number of columns (always the schema width)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for a zero-width schema, which `FeatureSchema::new` rejects
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Schema the vector was built against
    pub fn schema(&self) -> &'a FeatureSchema {
        self.schema
    }

    /// `(column, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.schema
            .names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Names of the columns holding a non-zero value
    pub fn active_columns(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| *v != 0.0)
            .map(|(name, _)| name)
            .collect()
    }
}

impl PartialEq for FeatureVector<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.schema.names == other.schema.names && self.values == other.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> FeatureSchema {
        FeatureSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_schema_rejects_empty() {
        assert!(matches!(
            FeatureSchema::new(vec![]),
            Err(CreditError::Artifact(_))
        ));
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = FeatureSchema::new(vec!["Age".to_string(), "Age".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positions_follow_order() {
        let s = schema(&["Age", "Savings", "Gender_Male"]);
        assert_eq!(s.position("Age"), Some(0));
        assert_eq!(s.position("Gender_Male"), Some(2));
        assert_eq!(s.position("Gender_Female"), None);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_vector_set_and_get() {
        let s = schema(&["Age", "Savings"]);
        let mut v = FeatureVector::zeros(&s);

        assert_eq!(v.as_row(), &[0.0, 0.0]);
        assert!(v.set("Savings", 1500.0));
        assert!(!v.set("Unknown", 1.0));

        assert_eq!(v.get("Savings"), Some(1500.0));
        assert_eq!(v.get("Unknown"), None);
        assert_eq!(v.as_row(), &[0.0, 1500.0]);
        assert_eq!(v.active_columns(), vec!["Savings"]);
    }
}
