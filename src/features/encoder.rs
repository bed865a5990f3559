//! Applicant → feature-vector encoding
//!
//! Builds the model row for one applicant:
//!
//! 1. Zero every schema column
//! 2. Write the direct numeric columns, including the derived `DTI_Ratio`
//! 3. One-hot the categorical selections with a single rule: compose
//!    `<Field>_<Value>` and set it to 1 only if the schema has that column.
//!    The baseline level of each field has no column and therefore leaves the
//!    row unchanged.
//!
//! # Example
//!
//! ```
//! use creditwise::features::{encode, ApplicantInput, FeatureSchema};
//!
//! let schema = FeatureSchema::new(vec![
//!     "Applicant_Income".to_string(),
//!     "DTI_Ratio".to_string(),
//!     "Gender_Male".to_string(),
//! ])?;
//!
//! let vector = encode(&ApplicantInput::default(), &schema);
//! assert_eq!(vector.get("DTI_Ratio"), Some(20.0));
//! assert_eq!(vector.get("Gender_Male"), Some(1.0));
//! # Ok::<(), creditwise::CreditError>(())
//! ```

use super::applicant::ApplicantInput;
use super::schema::{FeatureSchema, FeatureVector};

/// Debt-to-income ratio: requested amount over combined income
///
/// The denominator is floored at 1 so zero income yields `loan_amount`
/// instead of a division by zero.
pub fn dti_ratio(applicant_income: u64, coapplicant_income: u64, loan_amount: u64) -> f64 {
    let income = applicant_income.saturating_add(coapplicant_income).max(1);
    loan_amount as f64 / income as f64
}

/// Savings over requested amount, with the same floor-at-1 guard
pub fn savings_ratio(savings: u64, loan_amount: u64) -> f64 {
    savings as f64 / loan_amount.max(1) as f64
}

/// Encode an applicant against `schema`
///
/// The result always has exactly `schema.len()` entries in schema order.
/// Columns the applicant has no value for stay at zero, and values with no
/// column in the schema are dropped.
///
/// # Arguments
///
/// * `input` - Applicant as collected by the form or the JSON API
/// * `schema` - Ordered feature columns the model was fitted on
///
/// # Returns
///
/// `FeatureVector` borrowing `schema`, ready for the scaler
///
/// # Example
///
/// ```
/// use creditwise::features::{encode, ApplicantInput, FeatureSchema, PropertyArea};
///
/// let schema = FeatureSchema::new(vec![
///     "Credit_Score".to_string(),
///     "Property_Area_Urban".to_string(),
/// ])?;
/// let input = ApplicantInput {
///     property_area: PropertyArea::Urban,
///     ..Default::default()
/// };
///
/// assert_eq!(encode(&input, &schema).as_row(), &[650.0, 1.0]);
/// # Ok::<(), creditwise::CreditError>(())
/// ```
pub fn encode<'a>(input: &ApplicantInput, schema: &'a FeatureSchema) -> FeatureVector<'a> {
    let mut vector = FeatureVector::zeros(schema);

    let dti = dti_ratio(
        input.applicant_income,
        input.coapplicant_income,
        input.loan_amount,
    );

    let numeric: [(&str, f64); 11] = [
        ("Applicant_Income", input.applicant_income as f64),
        ("Coapplicant_Income", input.coapplicant_income as f64),
        ("Age", f64::from(input.age)),
        ("Dependents", f64::from(input.dependents)),
        ("Credit_Score", f64::from(input.credit_score)),
        ("Existing_Loans", f64::from(input.existing_loans)),
        ("DTI_Ratio", dti),
        ("Savings", input.savings as f64),
        ("Collateral_Value", input.collateral_value as f64),
        ("Loan_Amount", input.loan_amount as f64),
        ("Loan_Term", f64::from(input.loan_term)),
    ];

    for (column, value) in numeric {
        if !vector.set(column, value) {
            log::debug!("Schema has no numeric column {}, skipping", column);
        }
    }

    for column in input.categorical_columns() {
        if !vector.set(&column, 1.0) {
            log::trace!("{} is a baseline level (no column)", column);
        }
    }

    log::debug!(
        "Encoded applicant into {} columns ({} active), DTI={:.4}",
        vector.len(),
        vector.active_columns().len(),
        dti
    );

    vector
}
