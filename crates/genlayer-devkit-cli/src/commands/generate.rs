use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::Input;

use genlayer_devkit_core::project::{self, CONTRACTS_DIR};
use genlayer_devkit_core::{catalog, Binder, ContractSource, Validator};

use crate::output;

/// Parse a `--param key=value` argument.
pub fn parse_param(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Generate a contract from a catalog template.
///
/// The contract is rendered and validated in memory; the file is only written
/// once both succeed.
pub async fn run(
    archetype: &str,
    name: Option<String>,
    params: Vec<(String, String)>,
    out_dir: Option<&Path>,
    force: bool,
) -> Result<()> {
    output::print_header("genlayer generate");

    let descriptor = catalog::find(archetype)?;
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Contract name")
            .interact_text()?,
    };
    let extra: BTreeMap<String, String> = params.into_iter().collect();

    let contract = Binder::new().render(descriptor.id, &name, &extra)?;
    let report = Validator::genlayer().validate_source(&ContractSource::generated(contract.as_str()));
    for warning in report.warnings() {
        output::print_warning(&warning.to_string());
    }
    if !report.is_accepted() {
        anyhow::bail!("generated contract fails validation");
    }

    let dir = resolve_out_dir(out_dir)?;
    let path = project::contract_path(&dir, &name);
    project::write_new_file(&path, contract.as_bytes(), force)?;

    output::print_success(&format!("Generated {}", path.display()));
    output::print_key_value("Template", &format!("{} ({})", descriptor.id, descriptor.description));
    output::print_key_value("Operations", &descriptor.operations.join(", "));
    println!();
    println!("  Next steps:");
    println!("    genlayer test {}", path.display());
    println!("    genlayer deploy {}", path.display());
    println!();

    Ok(())
}

fn resolve_out_dir(out_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)?;
        return Ok(dir.to_path_buf());
    }
    let contracts = PathBuf::from(CONTRACTS_DIR);
    if contracts.is_dir() {
        Ok(contracts)
    } else {
        output::print_warning("No contracts/ directory. Run 'genlayer init' first!");
        Ok(PathBuf::from("."))
    }
}
