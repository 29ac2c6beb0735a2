use std::path::Path;

use anyhow::Result;
use console::style;

use genlayer_devkit_core::config::ProjectConfig;

use super::deploy::STUDIO_URL;
use crate::output;

/// Print where to check a deployed contract. No network request is made.
pub async fn run(config_path: &Path, address: &str, network: &str) -> Result<()> {
    output::print_header("genlayer status");

    if !is_address(address) {
        output::print_warning(&format!(
            "'{address}' does not look like a contract address (0x followed by 40 hex digits)"
        ));
    }

    let config = if config_path.exists() {
        ProjectConfig::load(config_path)?
    } else {
        ProjectConfig::default_for_project("", None)
    };
    let network_config = config.network(network)?;

    output::print_key_value("Address", address);
    output::print_key_value("Network", network);
    output::print_key_value("RPC", &network_config.rpc_url);

    println!();
    println!("{}", style("Check status at:").yellow().bold());
    println!("  {STUDIO_URL}/contracts/{address}");
    println!();

    Ok(())
}

fn is_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .filter(|hex_part| hex_part.len() == 40)
        .is_some_and(|hex_part| hex::decode(hex_part).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_address() {
        assert!(is_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
        assert!(!is_address("5FbDB2315678afecb367f032d93F642f64180aa3"));
        assert!(!is_address("0x1234"));
        assert!(!is_address("0xZZbDB2315678afecb367f032d93F642f64180aa3"));
    }
}
