//! The single-page form and decision view

use super::charts::{bar_chart_svg, pie_chart_svg};
use super::format::{escape_html, fixed2, percent, rupees};
use crate::analysis::result::{DecisionReport, Verdict};
use crate::error::CreditError;
use crate::features::{
    ApplicantInput, Categorical, EducationLevel, EmployerCategory, EmploymentStatus, FormSection,
    Gender, LoanPurpose, MaritalStatus, PropertyArea, NUMERIC_FIELDS,
};

/// Page title
pub const TITLE: &str = "CreditWise Loan Approval System";

const STYLE: &str = r#"
body {font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;margin:0;padding:24px 48px;color:#262730}
.title {font-size:40px;font-weight:700;color:#1f4eff}
.subtitle {font-size:18px;color:#555}
hr {border:none;border-top:1px solid #e6e6e6;margin:24px 0}
.columns {display:grid;grid-template-columns:1.2fr 1fr;gap:32px}
.section {background:#f8f9ff;padding:18px;border-radius:14px;margin-bottom:20px}
.field {display:flex;flex-direction:column;margin-bottom:12px}
.field label {font-size:14px;margin-bottom:4px}
.field input,.field select {padding:8px;border:1px solid #d0d3de;border-radius:8px;font-size:15px}
button.primary {width:100%;padding:12px;font-size:17px;border:none;border-radius:10px;background:#ff4b4b;color:white;cursor:pointer}
.approved {background:#e7f7ef;padding:20px;border-radius:14px;color:#177245}
.rejected {background:#fdeaea;padding:20px;border-radius:14px;color:#9c1c1c}
.failure {background:#fff4e5;padding:20px;border-radius:14px;color:#8a4b00}
.verdict {font-size:26px;font-weight:700}
.note {font-size:13px;color:#777}
.progress {background:#eceef4;border-radius:8px;height:14px;overflow:hidden}
.progress > div {background:#1f4eff;height:100%}
.metrics {display:grid;grid-template-columns:repeat(3,1fr);gap:16px}
.metric-label {font-size:14px;color:#555}
.metric-value {font-size:32px}
"#;

/// What to show under the form
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// Initial load: form only
    Blank,
    /// A completed assessment
    Report(&'a DecisionReport),
    /// The submission could not be scored
    Failed(&'a CreditError),
}

/// Render the full page: header, form pre-filled with `input`, then `outcome`
///
/// # Arguments
///
/// * `input` - Values to pre-fill the form with (defaults, or what was submitted)
/// * `outcome` - Nothing yet, a decision report, or the error that stopped scoring
///
/// # Returns
///
/// A complete HTML document with inline CSS and inline SVG charts
///
/// # Example
///
/// ```
/// use creditwise::render::{render_page, Outcome};
/// use creditwise::ApplicantInput;
///
/// let html = render_page(&ApplicantInput::default(), Outcome::Blank);
/// assert!(html.contains("Check Loan Eligibility"));
/// ```
pub fn render_page(input: &ApplicantInput, outcome: Outcome<'_>) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>{}</title>", TITLE));
    html.push_str(&format!("<style>{}</style></head><body>", STYLE));

    html.push_str(&format!("<div class=\"title\">💳 {}</div>", TITLE));
    html.push_str(
        "<div class=\"subtitle\">Loan eligibility prediction with explainable ML</div><hr>",
    );

    html.push_str(&render_form(input));

    match outcome {
        Outcome::Blank => {}
        Outcome::Report(report) => {
            html.push_str("<hr>");
            html.push_str(&render_report(report));
        }
        Outcome::Failed(err) => {
            html.push_str("<hr>");
            html.push_str(&render_failure(err));
        }
    }

    html.push_str("</body></html>");
    html
}

fn render_form(input: &ApplicantInput) -> String {
    let mut financial = String::from("<div class=\"section\"><h3>💰 Financial Details</h3>");
    let mut personal = String::from("<div class=\"section\"><h3>👤 Personal &amp; Loan Info</h3>");

    for field in NUMERIC_FIELDS.iter() {
        let max = field
            .max
            .map(|m| format!(" max=\"{}\"", m))
            .unwrap_or_default();
        let widget = format!(
            "<div class=\"field\"><label for=\"{key}\">{label}</label><input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min}\"{max} step=\"{step}\" value=\"{value}\" required></div>",
            key = field.key,
            label = escape_html(field.label),
            min = field.min,
            max = max,
            step = field.step,
            value = (field.get)(input)
        );
        match field.section {
            FormSection::Financial => financial.push_str(&widget),
            FormSection::Personal => personal.push_str(&widget),
        }
    }

    personal.push_str(&select(input.employment_status));
    personal.push_str(&select(input.marital_status));
    personal.push_str(&select(input.gender));
    personal.push_str(&select(input.education_level));
    personal.push_str(&select(input.employer_category));
    personal.push_str(&select(input.loan_purpose));
    personal.push_str(&select(input.property_area));

    financial.push_str("</div>");
    personal.push_str("</div>");

    format!(
        "<form method=\"post\" action=\"/\"><div class=\"columns\"><div>{}</div><div>{}</div></div><hr><button class=\"primary\" type=\"submit\">🔍 Check Loan Eligibility</button></form>",
        financial, personal
    )
}

/// Dropdown for a categorical field with `current` pre-selected
fn select<T: Categorical>(current: T) -> String {
    let key = T::FIELD.to_lowercase();
    let options: String = T::ALL
        .iter()
        .map(|&v| {
            let label = escape_html(v.label());
            let selected = if v == current { " selected" } else { "" };
            format!("<option value=\"{label}\"{selected}>{label}</option>")
        })
        .collect();

    format!(
        "<div class=\"field\"><label for=\"{key}\">{display}</label><select id=\"{key}\" name=\"{key}\">{options}</select></div>",
        key = key,
        display = T::DISPLAY,
        options = options
    )
}

fn render_report(report: &DecisionReport) -> String {
    let decision = &report.decision;
    let mut html = String::from("<h2>📊 Loan Decision</h2>");

    let (class, icon) = match decision.verdict {
        Verdict::Approved => ("approved", "✅"),
        Verdict::Rejected => ("rejected", "❌"),
    };
    html.push_str(&format!(
        "<div class=\"{class}\" id=\"verdict\" data-verdict=\"{verdict}\"><div class=\"verdict\">{icon} {headline}</div><div>Confidence: <span id=\"confidence\">{confidence}</span></div>",
        class = class,
        verdict = class,
        icon = icon,
        headline = decision.verdict.headline(),
        confidence = percent(decision.confidence, 2)
    ));
    if !decision.probability_estimated {
        html.push_str(
            "<div class=\"note\">The model does not estimate probabilities; confidence is a neutral 50%.</div>",
        );
    }
    html.push_str("</div>");

    html.push_str("<h2>📈 Approval Confidence</h2>");
    html.push_str(&format!(
        "<div class=\"progress\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"{now:.0}\"><div style=\"width:{width:.2}%\"></div></div>",
        now = decision.confidence_percent(),
        width = decision.confidence_percent()
    ));

    let snapshot = &report.snapshot;
    html.push_str("<h2>💰 Financial Snapshot</h2><div class=\"metrics\">");
    for (id, label, value) in [
        ("total-income", "Total Income", rupees(snapshot.total_income)),
        ("dti-ratio", "DTI Ratio", fixed2(snapshot.dti_ratio)),
        ("savings-ratio", "Savings Ratio", fixed2(snapshot.savings_ratio)),
    ] {
        html.push_str(&format!(
            "<div><div class=\"metric-label\">{label}</div><div class=\"metric-value\" id=\"{id}\">{value}</div></div>"
        ));
    }
    html.push_str("</div>");

    html.push_str("<h2>📊 Risk vs Strength Analysis</h2>");
    html.push_str(&chart_block("bar-chart", bar_chart_svg(&report.flags)));

    html.push_str("<h2>⚖️ Risk vs Strength Balance</h2>");
    html.push_str(&chart_block(
        "pie-chart",
        pie_chart_svg(report.flags.balance().as_ref()),
    ));

    html
}

/// Wrap a drawn chart; a chart that failed to draw degrades to a note
fn chart_block(class: &str, chart: Result<String, CreditError>) -> String {
    match chart {
        Ok(svg) => format!("<div class=\"chart {}\">{}</div>", class, svg),
        Err(err) => {
            log::warn!("{}", err);
            format!(
                "<div class=\"chart {} note\">Chart unavailable: {}</div>",
                class,
                escape_html(&err.to_string())
            )
        }
    }
}

fn render_failure(err: &CreditError) -> String {
    let heading = if err.is_client_error() {
        "Please check the form"
    } else {
        "The application could not be scored"
    };
    format!(
        "<div class=\"failure\" id=\"failure\"><div class=\"verdict\">⚠️ {}</div><div>{}</div></div>",
        heading,
        escape_html(&err.to_string())
    )
}
