//! Core library for the genlayer-devkit toolkit.
//!
//! Two engines make up the core:
//! - the [`binder::Binder`], which renders an archetype from the closed
//!   [`catalog`] into GenLayer contract source;
//! - the [`validator::Validator`], which checks arbitrary contract source in
//!   three passes (syntax, structure, style) and returns a
//!   [`validator::ValidationReport`].
//!
//! Both are synchronous and hold no mutable state. [`config`] and [`project`]
//! are the on-disk helpers used by the `genlayer` CLI.

pub mod binder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod project;
pub mod source;
pub mod templates;
pub mod validator;

pub use binder::Binder;
pub use error::{DevkitError, Result};
pub use source::{ContractSource, Origin};
pub use validator::{ValidationReport, Validator};
