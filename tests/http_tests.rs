//! HTTP tests for the form and JSON endpoints
#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use creditwise::{server, Artifacts, Config, Predictor};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = Config {
        artifact_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures"),
        ..Config::default()
    };
    let artifacts = Artifacts::load(&config).expect("Fixture artifacts should load");
    server::router(Arc::new(Predictor::new(artifacts)))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const DEFAULT_FORM: &str = "applicant_income=5000&coapplicant_income=0&loan_amount=100000\
&loan_term=120&savings=20000&collateral_value=50000&existing_loans=0&age=30&dependents=0\
&credit_score=650&employment_status=Salaried&marital_status=Single&gender=Male\
&education_level=Graduate&employer_category=Government&loan_purpose=Car&property_area=Rural";

fn form_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_form_page() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("CreditWise Loan Approval System"));
    assert!(html.contains("Check Loan Eligibility"));
    assert!(!html.contains("id=\"verdict\""));
}

#[tokio::test]
async fn test_form_submission_renders_decision() {
    let response = app()
        .oneshot(form_request(DEFAULT_FORM.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("data-verdict=\"approved\""));
    assert!(html.contains("<span id=\"confidence\">65.80%</span>"));
    assert!(html.contains("id=\"total-income\">₹5,000<"));
    assert!(html.contains("id=\"dti-ratio\">20.00<"));
    assert!(html.contains("id=\"savings-ratio\">0.20<"));
    assert!(html.contains("bar-chart"));
    assert!(html.contains("pie-chart"));
}

#[tokio::test]
async fn test_form_keeps_multiword_categories() {
    let body = DEFAULT_FORM.replace("education_level=Graduate", "education_level=Not+Graduate");
    let response = app().oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<option value=\"Not Graduate\" selected>"));
}

#[tokio::test]
async fn test_form_out_of_range_is_422() {
    let body = DEFAULT_FORM.replace("age=30", "age=12");
    let response = app().oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("id=\"failure\""));
    assert!(html.contains("age must be at least 18"));
}

#[tokio::test]
async fn test_form_malformed_is_rejected() {
    let body = DEFAULT_FORM.replace("savings=20000", "savings=-5");
    let response = app().oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("id=\"failure\""));
    assert!(html.contains("savings must be a whole number"));
}

#[tokio::test]
async fn test_form_error_keeps_typed_values() {
    let body = DEFAULT_FORM
        .replace("savings=20000", "savings=lots")
        .replace("age=30", "age=41")
        .replace("property_area=Rural", "property_area=Urban");
    let response = app().oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains(r#"name="age" min="18" max="70" step="1" value="41""#));
    assert!(html.contains(r#"<option value="Urban" selected>"#));
    assert!(html.contains(r#"name="savings" min="0" step="5000" value="20000""#));
}

#[tokio::test]
async fn test_form_wrong_content_type_is_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(DEFAULT_FORM))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let html = body_string(response).await;
    assert!(html.contains("id=\"failure\""));
}

#[tokio::test]
async fn test_json_predict() {
    let response = app()
        .oneshot(json_request(
            r#"{"applicant_income": 2000, "loan_amount": 200000, "savings": 1000,
                "collateral_value": 0, "credit_score": 420, "existing_loans": 5,
                "employment_status": "Unemployed"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["decision"]["verdict"], "rejected");
    assert_eq!(json["snapshot"]["dti_ratio"], 100.0);
    assert_eq!(json["flags"]["risk"][3]["name"], "Many Loans");
    assert_eq!(json["flags"]["risk"][3]["active"], true);
}

#[tokio::test]
async fn test_json_invalid_input() {
    let response = app()
        .oneshot(json_request(r#"{"credit_score": 950}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("credit_score"));
}

#[tokio::test]
async fn test_json_unknown_category() {
    let response = app()
        .oneshot(json_request(r#"{"loan_purpose": "Yacht"}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_healthz() {
    let response = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["features"], 24);
}
