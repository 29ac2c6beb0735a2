use std::path::Path;

use anyhow::Result;
use console::style;
use sha2::{Digest, Sha256};

use genlayer_devkit_core::config::ProjectConfig;
use genlayer_devkit_core::{ContractSource, Validator};

use crate::output;

/// Where contracts are deployed by hand.
pub const STUDIO_URL: &str = "https://studio.genlayer.com";

/// Print deployment instructions for a contract.
///
/// Nothing is sent anywhere: the contract is validated locally, the network is
/// resolved from `genlayer.json` (or the built-in defaults when there is no
/// config file), and the manual GenLayer Studio steps are printed along with
/// the code hash to compare after upload.
pub async fn run(config_path: &Path, file: &Path, network: &str) -> Result<()> {
    output::print_header("genlayer deploy");

    let source = ContractSource::read(file)?;
    let file_name = file.display().to_string();

    let report = Validator::genlayer().validate_source(&source);
    for finding in &report.findings {
        output::print_finding(&file_name, finding);
    }
    if !report.is_accepted() {
        anyhow::bail!(
            "{file_name} has {} error(s); fix them before deploying",
            report.error_count()
        );
    }

    let config = if config_path.exists() {
        ProjectConfig::load(config_path)?
    } else {
        output::print_info(&format!(
            "{} not found, using default networks",
            config_path.display()
        ));
        ProjectConfig::default_for_project("", None)
    };
    let network_config = config.network(network)?;

    let code_hash = hex::encode(Sha256::digest(source.text.as_bytes()));

    output::print_key_value("Contract", &file_name);
    output::print_key_value("Network", network);
    output::print_key_value("RPC", &network_config.rpc_url);
    output::print_key_value("Network ID", &network_config.network_id);
    output::print_key_value("Code hash (sha256)", &code_hash);

    println!();
    println!("{}", style("Deployment Steps:").yellow().bold());
    println!("  1. Open GenLayer Studio: {STUDIO_URL}");
    println!("  2. Copy the contents of {file_name}");
    println!("  3. Paste into the Studio editor");
    println!("  4. Click 'Deploy'");
    println!("  5. Save the contract address, then run `genlayer status <address>`");
    println!();
    println!("{}", style(format!("--- {file_name} ---")).cyan());
    print!("{}", source.text);
    if !source.text.ends_with('\n') {
        println!();
    }
    println!("{}", style("--- End ---").cyan());
    println!();

    Ok(())
}
