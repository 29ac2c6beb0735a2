//! CLI command implementations for genlayer.
//!
//! Each module corresponds to a subcommand (`genlayer <command>`).

pub mod deploy;
pub mod generate;
pub mod init;
pub mod status;
pub mod templates;
pub mod test;
