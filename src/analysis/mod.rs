//! Decision analysis
//!
//! Everything derived from a prediction and the applicant record:
//! - Confidence derivation
//! - Risk/strength factors
//! - Financial snapshot metrics
//! - Result types

pub mod confidence;
pub mod flags;
pub mod result;
pub mod snapshot;
