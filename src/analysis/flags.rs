//! Risk and strength factors
//!
//! Eight fixed predicates over the applicant and the derived DTI ratio. They
//! do not feed the model; they explain the applicant's profile next to the
//! model's verdict.
//!
//! | Factor | Kind | Condition |
//! |---|---|---|
//! | High DTI | risk | DTI > 0.4 |
//! | Low Credit | risk | credit score < 600 |
//! | Low Savings | risk | savings < 0.1 × loan |
//! | Many Loans | risk | existing loans > 2 |
//! | Good Credit | strength | credit score ≥ 700 |
//! | Low DTI | strength | DTI < 0.3 |
//! | Strong Savings | strength | savings ≥ 0.2 × loan |
//! | No Loans | strength | existing loans == 0 |

use crate::features::{dti_ratio, ApplicantInput};
use serde::Serialize;

/// DTI above which the ratio counts as a risk
pub const HIGH_DTI: f64 = 0.4;
/// DTI below which the ratio counts as a strength
pub const LOW_DTI: f64 = 0.3;
/// Credit score below which credit counts as a risk
pub const LOW_CREDIT: u32 = 600;
/// Credit score from which credit counts as a strength
pub const GOOD_CREDIT: u32 = 700;
/// Savings share of the loan below which savings count as a risk
pub const LOW_SAVINGS_SHARE: f64 = 0.1;
/// Savings share of the loan from which savings count as a strength
pub const STRONG_SAVINGS_SHARE: f64 = 0.2;
/// Existing loans above which the count is a risk
pub const MANY_LOANS: u32 = 2;

/// Whether a factor counts against or for the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Counts against approval
    Risk,
    /// Counts for approval
    Strength,
}

/// One evaluated predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Factor {
    /// Display name
    pub name: &'static str,
    /// Risk or strength
    pub kind: FactorKind,
    /// Whether the condition holds
    pub active: bool,
}

impl Factor {
    /// Bar-chart value: -1 for an active risk, +1 for an active strength, else 0
    pub fn impact(&self) -> i8 {
        match (self.active, self.kind) {
            (false, _) => 0,
            (true, FactorKind::Risk) => -1,
            (true, FactorKind::Strength) => 1,
        }
    }
}

/// Values the predicates read
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagInputs {
    /// Credit score
    pub credit_score: u32,
    /// Debt-to-income ratio
    pub dti_ratio: f64,
    /// Savings (₹)
    pub savings: u64,
    /// Loan amount (₹)
    pub loan_amount: u64,
    /// Number of running loans
    pub existing_loans: u32,
}

impl From<&ApplicantInput> for FlagInputs {
    fn from(input: &ApplicantInput) -> Self {
        Self {
            credit_score: input.credit_score,
            dti_ratio: dti_ratio(
                input.applicant_income,
                input.coapplicant_income,
                input.loan_amount,
            ),
            savings: input.savings,
            loan_amount: input.loan_amount,
            existing_loans: input.existing_loans,
        }
    }
}

/// Share of active risk vs strength factors, for the pie chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    /// Active risk factors
    pub risk_count: usize,
    /// Active strength factors
    pub strength_count: usize,
    /// `risk_count / total` (0.0-1.0)
    pub risk_share: f64,
    /// `strength_count / total` (0.0-1.0)
    pub strength_share: f64,
}

/// The four risk and four strength factors for one applicant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskStrengthFlags {
    /// High DTI, Low Credit, Low Savings, Many Loans
    pub risk: [Factor; 4],
    /// Good Credit, Low DTI, Strong Savings, No Loans
    pub strength: [Factor; 4],
}

impl RiskStrengthFlags {
    /// Evaluate all eight predicates
    pub fn evaluate(v: FlagInputs) -> Self {
        let savings = v.savings as f64;
        let loan = v.loan_amount as f64;

        let risk = |name, active| Factor {
            name,
            kind: FactorKind::Risk,
            active,
        };
        let strength = |name, active| Factor {
            name,
            kind: FactorKind::Strength,
            active,
        };

        let flags = Self {
            risk: [
                risk("High DTI", v.dti_ratio > HIGH_DTI),
                risk("Low Credit", v.credit_score < LOW_CREDIT),
                risk("Low Savings", savings < LOW_SAVINGS_SHARE * loan),
                risk("Many Loans", v.existing_loans > MANY_LOANS),
            ],
            strength: [
                strength("Good Credit", v.credit_score >= GOOD_CREDIT),
                strength("Low DTI", v.dti_ratio < LOW_DTI),
                strength("Strong Savings", savings >= STRONG_SAVINGS_SHARE * loan),
                strength("No Loans", v.existing_loans == 0),
            ],
        };

        log::debug!(
            "Flags: {} risk, {} strength",
            flags.risk_count(),
            flags.strength_count()
        );

        flags
    }

    /// Evaluate for an applicant, deriving DTI from the incomes
    pub fn from_input(input: &ApplicantInput) -> Self {
        Self::evaluate(FlagInputs::from(input))
    }

    /// All eight factors, risks first
    pub fn factors(&self) -> impl Iterator<Item = &Factor> + '_ {
        self.risk.iter().chain(self.strength.iter())
    }

    /// `(name, impact)` per factor, in bar-chart order
    pub fn impacts(&self) -> Vec<(&'static str, i8)> {
        self.factors().map(|f| (f.name, f.impact())).collect()
    }

    /// Number of active risk factors
    pub fn risk_count(&self) -> usize {
        self.risk.iter().filter(|f| f.active).count()
    }

    /// Number of active strength factors
    pub fn strength_count(&self) -> usize {
        self.strength.iter().filter(|f| f.active).count()
    }

    /// Risk vs strength shares; `None` when no factor is active
    pub fn balance(&self) -> Option<Balance> {
        let risk_count = self.risk_count();
        let strength_count = self.strength_count();
        let total = risk_count + strength_count;
        if total == 0 {
            return None;
        }
        Some(Balance {
            risk_count,
            strength_count,
            risk_share: risk_count as f64 / total as f64,
            strength_share: strength_count as f64 / total as f64,
        })
    }
}
