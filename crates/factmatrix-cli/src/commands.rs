use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use factmatrix_core::{create_fact_hash, FactMatrixConfig, FactQuad};
use factmatrix_engine::{FactMatrix, ReplayReport, Scenario};
use factmatrix_ledger::InMemoryTokenLedger;
use factmatrix_observability::TracingEventHandler;

type Matrix = FactMatrix<InMemoryTokenLedger>;

pub fn load_config(path: Option<&Path>) -> Result<FactMatrixConfig> {
    match path {
        Some(path) => FactMatrixConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(FactMatrixConfig::default()),
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    Scenario::from_json(&source).with_context(|| format!("parsing scenario {}", path.display()))
}

/// Replay `scenario` into a fresh matrix with an in-memory ledger.
pub fn replayed(config: FactMatrixConfig, path: &Path) -> Result<(Scenario, Matrix, ReplayReport)> {
    let scenario = load_scenario(path)?;
    let mut matrix = FactMatrix::with_config(config, InMemoryTokenLedger::new())?;
    matrix.add_handler(Arc::new(TracingEventHandler));
    let report = scenario.replay(&mut matrix);
    Ok((scenario, matrix, report))
}

pub fn replay(config: FactMatrixConfig, path: &Path, verify: bool, json: bool) -> Result<ExitCode> {
    let (scenario, matrix, report) = replayed(config, path)?;
    let mismatches = if verify {
        scenario.verify(&matrix)
    } else {
        Vec::new()
    };

    if json {
        let facts: Vec<_> = matrix.facts().collect();
        let out = serde_json::json!({
            "report": report,
            "facts": facts,
            "pool_balance": matrix.balance_of(&matrix.config().staking.pool_account),
            "mismatches": mismatches,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_table(&matrix, &report);
        for mismatch in &mismatches {
            println!("MISMATCH {mismatch}");
        }
    }

    if mismatches.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(count = mismatches.len(), "verification failed");
        Ok(ExitCode::FAILURE)
    }
}

fn print_table(matrix: &Matrix, report: &ReplayReport) {
    println!(
        "scenario {}: {} steps, {} failed",
        report.scenario,
        report.steps.len(),
        report.failures()
    );
    println!("{:<12} {:>10} {:>12}  fact", "hash", "confidence", "staked");
    for fact in matrix.facts() {
        println!(
            "{:<12} {:>10} {:>12}  {}",
            fact.hash.short(),
            fact.confidence,
            fact.total_staked,
            fact.quad
        );
    }
    println!(
        "pool {}",
        matrix.balance_of(&matrix.config().staking.pool_account)
    );
}

pub fn details(config: FactMatrixConfig, path: &Path, quad: FactQuad) -> Result<()> {
    let (_, matrix, _) = replayed(config, path)?;
    let details = matrix.fact_details(&create_fact_hash(&quad));
    if !details.exists() {
        anyhow::bail!("no stored fact {quad}");
    }
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

pub fn trust(config: FactMatrixConfig, path: &Path, quad: FactQuad) -> Result<()> {
    let (_, matrix, _) = replayed(config, path)?;
    let trust = matrix.analyzer().estimate_trust(&quad);
    println!("{quad}: {trust:.2}");
    Ok(())
}

pub fn analyze(config: FactMatrixConfig, path: &Path, quad: FactQuad) -> Result<()> {
    let (_, matrix, _) = replayed(config, path)?;
    let report = matrix.analyzer().analyze(&quad);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
