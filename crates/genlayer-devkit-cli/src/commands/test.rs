use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tokio::task::JoinSet;

use genlayer_devkit_core::{ContractSource, ValidationReport, Validator};

use crate::output;

type Outcome = (PathBuf, genlayer_devkit_core::Result<ValidationReport>);

/// Validate contract files.
///
/// Files are read and validated concurrently on the blocking pool; results are
/// reported in argument order. Findings are written to stderr. Fails (non-zero
/// exit) when any file is unreadable or has an error-severity finding.
pub async fn run(files: &[PathBuf], json_output: bool) -> Result<()> {
    if !json_output {
        output::print_header("genlayer test");
    }

    let outcomes = validate_all(files, !json_output && files.len() > 1).await?;

    let mut failed = 0usize;
    let mut json_reports = Vec::with_capacity(outcomes.len());
    for (path, result) in &outcomes {
        let file = path.display().to_string();
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                failed += 1;
                if json_output {
                    json_reports.push(json!({ "file": file, "accepted": false, "error": e.to_string() }));
                } else {
                    output::print_error(&format!("{e}"));
                }
                continue;
            }
        };

        if !report.is_accepted() {
            failed += 1;
        }
        if json_output {
            json_reports.push(json!({
                "file": file,
                "accepted": report.is_accepted(),
                "report": report,
            }));
        } else {
            print_report(&file, report);
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    } else {
        println!();
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) failed validation", outcomes.len());
    }
    if !json_output {
        output::print_success("All contracts passed");
        println!("  Note: checks cover syntax and structure only; deploy to testnet for full testing");
    }
    Ok(())
}

async fn validate_all(files: &[PathBuf], show_progress: bool) -> Result<Vec<Outcome>> {
    let validator = Arc::new(Validator::genlayer());
    let progress = if show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} validating")?);
        Some(pb)
    } else {
        None
    };

    let mut set = JoinSet::new();
    for (idx, path) in files.iter().cloned().enumerate() {
        let validator = Arc::clone(&validator);
        set.spawn_blocking(move || {
            let result = ContractSource::read(&path).map(|source| validator.validate_source(&source));
            (idx, path, result)
        });
    }

    let mut slots: Vec<Option<Outcome>> = (0..files.len()).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (idx, path, result) = joined?;
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        slots[idx] = Some((path, result));
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(slots.into_iter().flatten().collect())
}

fn print_report(file: &str, report: &ValidationReport) {
    for finding in &report.findings {
        output::print_finding(file, finding);
    }

    match &report.stats {
        Some(stats) if report.is_accepted() => {
            output::print_success(&format!(
                "{file}: {} public of {} functions, {} warning(s)",
                stats.public_methods,
                stats.functions,
                report.warning_count()
            ));
        }
        _ => output::print_error(&format!(
            "{file}: {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        )),
    }
}
