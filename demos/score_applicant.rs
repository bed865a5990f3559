//! Example: Score a single applicant from a JSON file
//!
//! Usage:
//!   cargo run --example score_applicant -- <applicant.json> [artifact_dir]
//!
//! Omitted fields take the form defaults. The artifact directory falls back to
//! `CREDITWISE_ARTIFACT_DIR`, then the current directory.

use creditwise::{ApplicantInput, Artifacts, Config, Predictor};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let applicant_path = args
        .next()
        .ok_or("Usage: score_applicant <applicant.json> [artifact_dir]")?;

    let mut config = Config::from_env()?;
    if let Some(dir) = args.next() {
        config.artifact_dir = PathBuf::from(dir);
    }

    let input: ApplicantInput = serde_json::from_str(&std::fs::read_to_string(&applicant_path)?)?;

    let predictor = Predictor::new(Artifacts::load(&config)?);
    let report = predictor.assess(&input)?;

    let decision = &report.decision;
    println!("Decision: {}", decision.verdict.headline());
    println!(
        "  Confidence: {:.2}% ({})",
        decision.confidence_percent(),
        decision.confidence_level()
    );
    if !decision.probability_estimated {
        println!("  (model has no probability estimate)");
    }
    println!("Financial snapshot:");
    println!("  Total income:  {}", report.snapshot.total_income);
    println!("  DTI ratio:     {:.2}", report.snapshot.dti_ratio);
    println!("  Savings ratio: {:.2}", report.snapshot.savings_ratio);
    println!("Factors:");
    for factor in report.flags.factors() {
        println!(
            "  [{}] {:?}: {}",
            if factor.active { "x" } else { " " },
            factor.kind,
            factor.name
        );
    }

    Ok(())
}
