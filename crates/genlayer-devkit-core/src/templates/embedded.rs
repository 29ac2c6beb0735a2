//! Compile-time embedded contract templates.
//!
//! Each constant loads a template file from `templates/contracts/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/genlayer-devkit-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT add a `{{variable}}` to a template without declaring the slot on its
//! catalog descriptor.

pub const BASIC_STORAGE_CONTRACT: &str =
    include_str!("../../../../templates/contracts/basic_storage.py.hbs");
pub const ORACLE_CONTRACT: &str = include_str!("../../../../templates/contracts/oracle.py.hbs");
pub const INSURANCE_CONTRACT: &str =
    include_str!("../../../../templates/contracts/insurance.py.hbs");
pub const LENDING_CONTRACT: &str = include_str!("../../../../templates/contracts/lending.py.hbs");
