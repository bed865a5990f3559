//! HTTP surface
//!
//! - `GET /`: blank form
//! - `POST /`: form submission, re-renders the form with the decision
//! - `POST /api/predict`: JSON applicant in, JSON report out
//! - `GET /healthz`: liveness
//!
//! The predictor is shared read-only across handlers; each request runs
//! validate → encode → predict → analyze to completion.

use crate::error::CreditError;
use crate::features::ApplicantInput;
use crate::ml::Predictor;
use crate::render::{render_page, Outcome};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;
use std::sync::Arc;

/// Build the application router around a loaded predictor
pub fn router(predictor: Arc<Predictor>) -> Router {
    Router::new()
        .route("/", get(form_page).post(submit_form))
        .route("/api/predict", post(predict_json))
        .route("/healthz", get(healthz))
        .with_state(predictor)
}

fn status_for(err: &CreditError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

async fn form_page() -> Html<String> {
    Html(render_page(&ApplicantInput::default(), Outcome::Blank))
}

async fn submit_form(
    State(predictor): State<Arc<Predictor>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            log::warn!("Rejected form submission: {}", rejection.body_text());
            let err = CreditError::InvalidInput(rejection.body_text());
            let page = render_page(&ApplicantInput::default(), Outcome::Failed(&err));
            return (rejection.status(), Html(page)).into_response();
        }
    };

    let (input, problems) = ApplicantInput::from_form(&pairs);
    if !problems.is_empty() {
        log::warn!("Form submission has unreadable fields: {:?}", problems);
        let err = CreditError::InvalidInput(problems.join("; "));
        let page = render_page(&input, Outcome::Failed(&err));
        return (status_for(&err), Html(page)).into_response();
    }

    match predictor.assess(&input) {
        Ok(report) => {
            log::info!(
                "Form decision: {:?} (confidence {:.4})",
                report.decision.verdict,
                report.decision.confidence
            );
            Html(render_page(&input, Outcome::Report(&report))).into_response()
        }
        Err(err) => {
            log::warn!("Form submission failed: {}", err);
            let page = render_page(&input, Outcome::Failed(&err));
            (status_for(&err), Html(page)).into_response()
        }
    }
}

/// JSON error body: `{"error": "..."}`
struct ApiError(StatusCode, String);

impl From<CreditError> for ApiError {
    fn from(err: CreditError) -> Self {
        ApiError(status_for(&err), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

async fn predict_json(
    State(predictor): State<Arc<Predictor>>,
    body: Result<Json<ApplicantInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        log::warn!("Rejected JSON body: {}", rejection.body_text());
        ApiError(rejection.status(), rejection.body_text())
    })?;

    let report = predictor.assess(&input).map_err(|err| {
        log::warn!("API prediction failed: {}", err);
        ApiError::from(err)
    })?;

    log::info!(
        "API decision: {:?} (confidence {:.4})",
        report.decision.verdict,
        report.decision.confidence
    );
    Ok(Json(report).into_response())
}

async fn healthz(State(predictor): State<Arc<Predictor>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "features": predictor.schema().len(),
    }))
}
