//! Feature assembly
//!
//! Turns a form submission into the fixed-width row the model was fitted on:
//! - Applicant record and categorical enumerations
//! - Feature schema (column order, name→index map)
//! - Encoder (numeric columns, DTI ratio, one-hot expansion)

pub mod applicant;
pub mod encoder;
pub mod schema;

pub use applicant::{
    ApplicantInput, Categorical, EducationLevel, EmployerCategory, EmploymentStatus, FormSection,
    Gender, LoanPurpose, MaritalStatus, NumericField, PropertyArea, NUMERIC_FIELDS,
};
pub use encoder::{dti_ratio, encode, savings_ratio};
pub use schema::{FeatureSchema, FeatureVector};
