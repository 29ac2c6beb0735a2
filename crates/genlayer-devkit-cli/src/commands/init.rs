use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use genlayer_devkit_core::config::ProjectConfig;
use genlayer_devkit_core::project::{self, CONTRACTS_DIR};
use genlayer_devkit_core::{catalog, Binder, ContractSource, Validator};

use crate::output;

/// Class name of the sample contract written by `init`.
const SAMPLE_CONTRACT: &str = "MyContract";

/// Initialize a new GenLayer project.
///
/// Renders and self-checks the sample contract first, so an unknown template
/// fails before anything touches the disk. Then creates the directory
/// structure, writes `genlayer.json` and the support files, and finally the
/// sample contract.
pub async fn run(name: &str, template: &str) -> Result<()> {
    output::print_header(&format!("genlayer init: {name}"));

    let descriptor = catalog::find(template)?;
    let contract = Binder::new().render(descriptor.id, SAMPLE_CONTRACT, &BTreeMap::new())?;
    let report = Validator::genlayer().validate_source(&ContractSource::generated(contract.as_str()));
    if !report.is_accepted() {
        anyhow::bail!(
            "template '{}' produced a contract that fails validation",
            descriptor.id
        );
    }

    let project_dir = Path::new(name);
    output::print_step(1, 4, &format!("Creating project directory: {name}/"));
    project::create_project_dirs(project_dir)?;

    output::print_step(2, 4, "Writing genlayer.json");
    let config = ProjectConfig::default_for_project(name, Some(descriptor.id));
    project::write_config(project_dir, &config)?;

    output::print_step(3, 4, "Writing README.md, requirements.txt, .gitignore");
    project::write_support_files(project_dir, name)?;

    output::print_step(4, 4, &format!("Scaffolding {} contract", descriptor.id));
    let contract_path = project::contract_path(&project_dir.join(CONTRACTS_DIR), SAMPLE_CONTRACT);
    project::write_new_file(&contract_path, contract.as_bytes(), false)?;
    tracing::info!(path = %contract_path.display(), "wrote sample contract");

    output::print_success(&format!(
        "Project '{name}' created with a {} contract",
        descriptor.id
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    genlayer generate --type oracle --name PriceFeed");
    println!("    genlayer test {CONTRACTS_DIR}/{SAMPLE_CONTRACT}.py");
    println!();

    Ok(())
}
