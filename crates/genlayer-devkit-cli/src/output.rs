//! Terminal output formatting for the genlayer CLI.
//!
//! Provides consistent, colored output using the [`console`] crate. Findings
//! go to stderr; everything else goes to stdout.

use console::style;

use genlayer_devkit_core::validator::{Finding, Severity};

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]` to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print an informational message prefixed with blue `[INFO]`.
pub fn print_info(text: &str) {
    println!("{} {}", style("[INFO]").blue().bold(), text);
}

/// Print a progress step indicator like `[1/3] Creating directories...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print one validator finding to stderr, prefixed with the file it belongs to.
pub fn print_finding(file: &str, finding: &Finding) {
    let tag = match finding.severity {
        Severity::Error => style("error").red().bold(),
        Severity::Warning => style("warning").yellow().bold(),
    };
    let location = finding
        .location
        .map(|l| format!(":{l}"))
        .unwrap_or_default();
    eprintln!(
        "{file}{location}: {tag} {} {}",
        style(format!("[{}]", finding.rule)).dim(),
        finding.message
    );
}
