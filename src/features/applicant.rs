//! Applicant form record and its categorical enumerations

use crate::error::CreditError;
use serde::{Deserialize, Serialize};

/// A closed-set form field that one-hot encodes as `<FIELD>_<label>`
pub trait Categorical: Copy + PartialEq + 'static {
    /// Column prefix used by the model (e.g. `"Property_Area"`)
    const FIELD: &'static str;

    /// Human-readable field label
    const DISPLAY: &'static str;

    /// Every selectable value, in form order
    const ALL: &'static [Self];

    /// Display/wire label of this value
    fn label(self) -> &'static str;

    /// One-hot column name this value maps to
    fn column(self) -> String {
        format!("{}_{}", Self::FIELD, self.label())
    }

    /// Parse a display label
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, $display:literal,
        { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const DISPLAY: &'static str = $display;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as Categorical>::ALL[0]
            }
        }
    };
}

categorical!(
    /// Employment status of the main applicant
    EmploymentStatus, "Employment_Status", "Employment Status",
    { Salaried => "Salaried", SelfEmployed => "Self-employed", Unemployed => "Unemployed" }
);

categorical!(
    /// Marital status
    MaritalStatus, "Marital_Status", "Marital Status",
    { Single => "Single", Married => "Married" }
);

categorical!(
    /// Gender
    Gender, "Gender", "Gender",
    { Male => "Male", Female => "Female" }
);

categorical!(
    /// Highest education level
    EducationLevel, "Education_Level", "Education Level",
    { Graduate => "Graduate", NotGraduate => "Not Graduate" }
);

categorical!(
    /// Kind of employer
    EmployerCategory, "Employer_Category", "Employer Category",
    { Government => "Government", Private => "Private", SelfEmployed => "Self-employed", Other => "Other" }
);

categorical!(
    /// What the loan is for
    LoanPurpose, "Loan_Purpose", "Loan Purpose",
    { Car => "Car", Education => "Education", Home => "Home", Personal => "Personal" }
);

categorical!(
    /// Location class of the property
    PropertyArea, "Property_Area", "Property Area",
    { Rural => "Rural", Semiurban => "Semiurban", Urban => "Urban" }
);

/// Raw applicant values as collected by the form
///
/// Missing fields in a JSON body take the form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantInput {
    /// Monthly income of the main applicant (₹)
    pub applicant_income: u64,
    /// Monthly income of the co-applicant (₹)
    pub coapplicant_income: u64,
    /// Requested principal (₹)
    pub loan_amount: u64,
    /// Loan term in months (6-360)
    pub loan_term: u32,
    /// Savings (₹)
    pub savings: u64,
    /// Value of pledged collateral (₹)
    pub collateral_value: u64,
    /// Number of loans already running (0-10)
    pub existing_loans: u32,
    /// Age in years (18-70)
    pub age: u32,
    /// Number of dependents (0-10)
    pub dependents: u32,
    /// Credit score (300-900)
    pub credit_score: u32,
    /// Employment status
    pub employment_status: EmploymentStatus,
    /// Marital status
    pub marital_status: MaritalStatus,
    /// Gender
    pub gender: Gender,
    /// Education level
    pub education_level: EducationLevel,
    /// Employer category
    pub employer_category: EmployerCategory,
    /// Loan purpose
    pub loan_purpose: LoanPurpose,
    /// Property area
    pub property_area: PropertyArea,
}

impl Default for ApplicantInput {
    fn default() -> Self {
        Self {
            applicant_income: 5000,
            coapplicant_income: 0,
            loan_amount: 100_000,
            loan_term: 120,
            savings: 20_000,
            collateral_value: 50_000,
            existing_loans: 0,
            age: 30,
            dependents: 0,
            credit_score: 650,
            employment_status: EmploymentStatus::default(),
            marital_status: MaritalStatus::default(),
            gender: Gender::default(),
            education_level: EducationLevel::default(),
            employer_category: EmployerCategory::default(),
            loan_purpose: LoanPurpose::default(),
            property_area: PropertyArea::default(),
        }
    }
}

/// Form column a field is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    /// Left column: money and loan shape
    Financial,
    /// Right column: personal details and categorical selections
    Personal,
}

/// Widget constraints for one numeric field
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    /// Form/JSON key
    pub key: &'static str,
    /// Widget label
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: u64,
    /// Inclusive upper bound, if any
    pub max: Option<u64>,
    /// Widget step
    pub step: u64,
    /// Column the widget sits in
    pub section: FormSection,
    /// Reads the field from an applicant
    pub get: fn(&ApplicantInput) -> u64,
    /// Writes the field; values too wide for the field saturate so `validate` rejects them
    pub set: fn(&mut ApplicantInput, u64),
}

/// Narrow a parsed form value into a `u32` field
fn saturate(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Numeric widgets in form order
pub const NUMERIC_FIELDS: [NumericField; 10] = [
    NumericField {
        key: "applicant_income",
        label: "Applicant Income (₹)",
        min: 0,
        max: None,
        step: 1000,
        section: FormSection::Financial,
        get: |a| a.applicant_income,
        set: |a, v| a.applicant_income = v,
    },
    NumericField {
        key: "coapplicant_income",
        label: "Co-applicant Income (₹)",
        min: 0,
        max: None,
        step: 1000,
        section: FormSection::Financial,
        get: |a| a.coapplicant_income,
        set: |a, v| a.coapplicant_income = v,
    },
    NumericField {
        key: "loan_amount",
        label: "Loan Amount (₹)",
        min: 0,
        max: None,
        step: 10_000,
        section: FormSection::Financial,
        get: |a| a.loan_amount,
        set: |a, v| a.loan_amount = v,
    },
    NumericField {
        key: "loan_term",
        label: "Loan Term (months)",
        min: 6,
        max: Some(360),
        step: 1,
        section: FormSection::Financial,
        get: |a| u64::from(a.loan_term),
        set: |a, v| a.loan_term = saturate(v),
    },
    NumericField {
        key: "savings",
        label: "Savings (₹)",
        min: 0,
        max: None,
        step: 5000,
        section: FormSection::Financial,
        get: |a| a.savings,
        set: |a, v| a.savings = v,
    },
    NumericField {
        key: "collateral_value",
        label: "Collateral Value (₹)",
        min: 0,
        max: None,
        step: 5000,
        section: FormSection::Financial,
        get: |a| a.collateral_value,
        set: |a, v| a.collateral_value = v,
    },
    NumericField {
        key: "existing_loans",
        label: "Existing Loans",
        min: 0,
        max: Some(10),
        step: 1,
        section: FormSection::Financial,
        get: |a| u64::from(a.existing_loans),
        set: |a, v| a.existing_loans = saturate(v),
    },
    NumericField {
        key: "age",
        label: "Age",
        min: 18,
        max: Some(70),
        step: 1,
        section: FormSection::Personal,
        get: |a| u64::from(a.age),
        set: |a, v| a.age = saturate(v),
    },
    NumericField {
        key: "dependents",
        label: "Dependents",
        min: 0,
        max: Some(10),
        step: 1,
        section: FormSection::Personal,
        get: |a| u64::from(a.dependents),
        set: |a, v| a.dependents = saturate(v),
    },
    NumericField {
        key: "credit_score",
        label: "Credit Score",
        min: 300,
        max: Some(900),
        step: 1,
        section: FormSection::Personal,
        get: |a| u64::from(a.credit_score),
        set: |a, v| a.credit_score = saturate(v),
    },
];

impl ApplicantInput {
    /// Check every numeric field against its widget bounds
    ///
    /// The browser enforces these on the form; requests that bypass the form
    /// are rejected here before encoding.
    pub fn validate(&self) -> Result<(), CreditError> {
        for field in NUMERIC_FIELDS.iter() {
            let value = (field.get)(self);
            if value < field.min {
                return Err(CreditError::InvalidInput(format!(
                    "{} must be at least {}, got {}",
                    field.key, field.min, value
                )));
            }
            if let Some(max) = field.max {
                if value > max {
                    return Err(CreditError::InvalidInput(format!(
                        "{} must be at most {}, got {}",
                        field.key, max, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build an applicant from raw form pairs
    ///
    /// Starts from the form defaults and applies every recognised key. A value
    /// that does not parse keeps its default and is reported in the returned
    /// list, so a re-rendered form still shows everything else the user typed.
    /// Unknown keys are ignored.
    pub fn from_form(pairs: &[(String, String)]) -> (Self, Vec<String>) {
        let mut input = Self::default();
        let mut problems = Vec::new();

        for (key, raw) in pairs {
            let raw = raw.trim();

            if let Some(field) = NUMERIC_FIELDS.iter().find(|f| f.key == key) {
                match raw.parse::<u64>() {
                    Ok(value) => (field.set)(&mut input, value),
                    Err(_) => problems.push(format!(
                        "{} must be a whole number, got '{}'",
                        field.key, raw
                    )),
                }
                continue;
            }

            let known = choose(&mut input.employment_status, key, raw, &mut problems)
                || choose(&mut input.marital_status, key, raw, &mut problems)
                || choose(&mut input.gender, key, raw, &mut problems)
                || choose(&mut input.education_level, key, raw, &mut problems)
                || choose(&mut input.employer_category, key, raw, &mut problems)
                || choose(&mut input.loan_purpose, key, raw, &mut problems)
                || choose(&mut input.property_area, key, raw, &mut problems);
            if !known {
                log::debug!("Ignoring unknown form key {}", key);
            }
        }

        (input, problems)
    }

    /// Combined monthly income of applicant and co-applicant
    pub fn total_income(&self) -> u64 {
        self.applicant_income.saturating_add(self.coapplicant_income)
    }

    /// One-hot column names for the seven categorical selections
    pub fn categorical_columns(&self) -> [String; 7] {
        [
            self.employment_status.column(),
            self.marital_status.column(),
            self.loan_purpose.column(),
            self.education_level.column(),
            self.employer_category.column(),
            self.property_area.column(),
            self.gender.column(),
        ]
    }
}

/// Apply `raw` to `slot` when `key` names this categorical field
///
/// Returns whether the key belonged to the field, parsed or not.
fn choose<T: Categorical>(
    slot: &mut T,
    key: &str,
    raw: &str,
    problems: &mut Vec<String>,
) -> bool {
    if !T::FIELD.eq_ignore_ascii_case(key) {
        return false;
    }
    match T::from_label(raw) {
        Some(value) => *slot = value,
        None => problems.push(format!("{} has no option '{}'", key, raw)),
    }
    true
}
