//! Example: Score many applicants in parallel
//!
//! Usage:
//!   cargo run --release --example score_batch -- [--jobs N] [--json] [--artifacts DIR] <applicants.jsonl>
//!
//! Notes:
//! - One applicant JSON object per line; blank lines are skipped.
//! - Parallelism is across applicants. The predictor is shared read-only.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use creditwise::{ApplicantInput, Artifacts, Config, DecisionReport, Predictor};
use rayon::prelude::*;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

struct ItemOut {
    line: usize,
    result: Result<DecisionReport, String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut artifact_dir: Option<PathBuf> = None;
    let mut path: Option<String> = None;

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--artifacts" => {
                let dir = args.first().ok_or("--artifacts requires a directory")?;
                artifact_dir = Some(PathBuf::from(dir));
                args.remove(0);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: score_batch [--jobs N] [--json] [--artifacts DIR] <applicants.jsonl>\n\
                     \n\
                     --jobs N         Parallel workers (default: CPU-1)\n\
                     --json           Emit one JSON report per line (JSONL)\n\
                     --artifacts DIR  Artifact directory (default: $CREDITWISE_ARTIFACT_DIR or .)\n"
                );
                return Ok(());
            }
            _ => path = Some(a),
        }
    }

    let Some(path) = path else {
        eprintln!("ERROR: Provide a JSONL file of applicants. Use --help for usage.");
        std::process::exit(2);
    };

    let mut config = Config::from_env()?;
    if let Some(dir) = artifact_dir {
        config.artifact_dir = dir;
    }
    let predictor = Predictor::new(Artifacts::load(&config)?);

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} applicants, jobs={}", lines.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> = pool.install(|| {
        lines
            .par_iter()
            .map(|&(line, text)| {
                let result = serde_json::from_str::<ApplicantInput>(text)
                    .map_err(|e| format!("parse failed: {e}"))
                    .and_then(|input| {
                        predictor
                            .assess(&input)
                            .map_err(|e| format!("scoring failed: {e}"))
                    });
                ItemOut { line, result }
            })
            .collect()
    });

    let mut approved = 0usize;
    for o in &outs {
        match (&o.result, json) {
            (Ok(report), true) => {
                println!(
                    "{{\"line\":{},\"report\":{}}}",
                    o.line,
                    serde_json::to_string(report)?
                );
            }
            (Ok(report), false) => {
                println!(
                    "[line {}] {} (confidence={:.2}%) risks={} strengths={}",
                    o.line,
                    report.decision.verdict.headline(),
                    report.decision.confidence_percent(),
                    report.flags.risk_count(),
                    report.flags.strength_count()
                );
            }
            (Err(e), true) => {
                println!("{{\"line\":{},\"error\":{}}}", o.line, serde_json::to_string(e)?);
            }
            (Err(e), false) => println!("[line {}] ERROR: {}", o.line, e),
        }
        if let Ok(report) = &o.result {
            if report.decision.verdict == creditwise::Verdict::Approved {
                approved += 1;
            }
        }
    }

    let ok = outs.iter().filter(|o| o.result.is_ok()).count();
    eprintln!(
        "Done: ok={}/{} approved={} wall={:.0}ms",
        ok,
        outs.len(),
        approved,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
