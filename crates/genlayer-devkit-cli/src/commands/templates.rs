use console::style;

use genlayer_devkit_core::catalog;

use crate::output;

/// List the contract archetypes in the catalog.
pub fn run() {
    output::print_header("Available Templates");

    for descriptor in catalog::all() {
        println!(
            "  {:14} v{}  {}",
            style(descriptor.id).cyan(),
            descriptor.version,
            descriptor.description
        );
        if !descriptor.aliases.is_empty() {
            output::print_key_value("aliases", &descriptor.aliases.join(", "));
        }
        output::print_key_value("operations", &descriptor.operations.join(", "));
        for slot in descriptor
            .slots
            .iter()
            .filter(|s| s.name != catalog::CONTRACT_NAME_SLOT)
        {
            let default = slot.default.unwrap_or("required");
            output::print_key_value(
                &format!("--param {}", slot.name),
                &format!("{} (default: {default})", slot.description),
            );
        }
    }

    println!();
    println!("{}", style("Usage:").yellow());
    println!("  genlayer generate --type oracle --name MyOracle");
    println!();
}
