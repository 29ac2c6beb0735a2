//! Project directory creation and file writing.
//!
//! Provides helpers for the `init` and `generate` commands. Every file goes
//! through [`write_atomic`]: the contents land in a temporary file in the target
//! directory and are renamed into place, so an interrupted run leaves either no
//! file or a complete one.
//!
//! ## Directory layout
//!
//! ```text
//! <project>/
//! ├── genlayer.json        # ProjectConfig
//! ├── README.md
//! ├── requirements.txt
//! ├── .gitignore
//! ├── contracts/           # Contract sources (MyContract.py)
//! ├── tests/
//! ├── scripts/
//! └── docs/
//! ```

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::error::{DevkitError, Result};

/// Subdirectories created by `init`.
pub const PROJECT_DIRS: &[&str] = &["contracts", "tests", "scripts", "docs"];

/// Directory generated contracts are written to.
pub const CONTRACTS_DIR: &str = "contracts";

const REQUIREMENTS: &str = "genlayer-sdk>=0.1.0\npytest>=7.0.0\n";

const GITIGNORE: &str = "__pycache__/\n*.pyc\n.pytest_cache/\n.env\nvenv/\n*.log\n";

/// Create the project directory and its standard subdirectories.
pub fn create_project_dirs(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(DevkitError::ProjectExists(project_dir.to_path_buf()));
    }

    std::fs::create_dir_all(project_dir)?;
    for dir in PROJECT_DIRS {
        std::fs::create_dir_all(project_dir.join(dir))?;
    }
    Ok(())
}

/// Write `genlayer.json` into the project directory.
pub fn write_config(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    config.save(&project_dir.join(CONFIG_FILE))
}

/// Write the README, requirements and ignore files.
pub fn write_support_files(project_dir: &Path, project_name: &str) -> Result<Vec<PathBuf>> {
    let files = [
        ("README.md", readme(project_name)),
        ("requirements.txt", REQUIREMENTS.to_string()),
        (".gitignore", GITIGNORE.to_string()),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = project_dir.join(name);
        write_atomic(&path, contents.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

/// Path a contract named `name` is written to under `dir`.
pub fn contract_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.py"))
}

/// Atomically replace `path` with `contents`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp = stage(path, contents)?;
    tmp.persist(path).map_err(|e| DevkitError::Io(e.error))?;
    Ok(())
}

/// Atomically create `path`; fails with [`DevkitError::FileExists`] if it exists
/// and `overwrite` is false.
pub fn write_new_file(path: &Path, contents: &[u8], overwrite: bool) -> Result<()> {
    if overwrite {
        return write_atomic(path, contents);
    }
    if path.exists() {
        return Err(DevkitError::FileExists(path.to_path_buf()));
    }
    let tmp = stage(path, contents)?;
    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            DevkitError::FileExists(path.to_path_buf())
        } else {
            DevkitError::Io(e.error)
        }
    })?;
    Ok(())
}

fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

fn readme(project_name: &str) -> String {
    format!(
        "# {project_name}\n\
         \n\
         GenLayer intelligent contract project.\n\
         \n\
         ## Usage\n\
         \n\
         ```bash\n\
         genlayer generate --type oracle --name PriceFeed\n\
         genlayer test contracts/MyContract.py\n\
         genlayer deploy contracts/MyContract.py --network testnet\n\
         ```\n\
         \n\
         ## Project Structure\n\
         \n\
         - `contracts/` - Intelligent contracts\n\
         - `tests/` - Contract tests\n\
         - `scripts/` - Deployment scripts\n\
         - `docs/` - Documentation\n\
         \n\
         ## Resources\n\
         \n\
         - [GenLayer Docs](https://docs.genlayer.com)\n"
    )
}
