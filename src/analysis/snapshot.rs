//! Financial snapshot metrics

use crate::features::{dti_ratio, savings_ratio, ApplicantInput};
use serde::Serialize;

/// The three headline metrics shown under the decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSnapshot {
    /// Applicant plus co-applicant income
    pub total_income: u64,
    /// Loan amount over combined income (denominator floored at 1)
    pub dti_ratio: f64,
    /// Savings over loan amount (denominator floored at 1)
    pub savings_ratio: f64,
}

impl FinancialSnapshot {
    /// Compute the snapshot for an applicant
    pub fn from_input(input: &ApplicantInput) -> Self {
        Self {
            total_income: input.total_income(),
            dti_ratio: dti_ratio(
                input.applicant_income,
                input.coapplicant_income,
                input.loan_amount,
            ),
            savings_ratio: savings_ratio(input.savings, input.loan_amount),
        }
    }
}
