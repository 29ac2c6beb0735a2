//! Structural validation of contract source text.
//!
//! [`Validator::validate`] runs three passes in fixed order:
//!
//! 1. **syntax**: the source must parse. A failure yields exactly one
//!    error finding and nothing else runs.
//! 2. **structure**: exactly one contract type, a constructor, and at least one
//!    public method. One error per violated rule.
//! 3. **style**: function statistics, docstring and header warnings. Never errors.
//!
//! A report depends on nothing but the text passed in. The validator holds no
//! mutable state, so one instance can be shared across threads.

pub mod dialect;
pub mod python;
pub mod report;

use dialect::{AnnotationClassifier, ContractDialect, MethodClassifier, SourceOutline, TypeDecl};
use python::GenLayerPython;
pub use report::{Category, Finding, Location, Severity, SourceStats, ValidationReport};

use crate::source::ContractSource;

/// Rule codes carried by findings.
pub mod rules {
    pub const INVALID_SYNTAX: &str = "invalid-syntax";
    pub const MISSING_CONTRACT: &str = "missing-contract";
    pub const DUPLICATE_CONTRACT: &str = "duplicate-contract";
    pub const MISSING_CONSTRUCTOR: &str = "missing-constructor";
    pub const NO_PUBLIC_METHODS: &str = "no-public-methods";
    pub const MISSING_DOCSTRING: &str = "missing-docstring";
    pub const MISSING_RUNNER_HEADER: &str = "missing-runner-header";
}

/// Multi-pass contract validator over a pluggable dialect and classifier.
pub struct Validator {
    dialect: Box<dyn ContractDialect>,
    classifier: Box<dyn MethodClassifier>,
}

impl Validator {
    pub fn new(
        dialect: impl ContractDialect + 'static,
        classifier: impl MethodClassifier + 'static,
    ) -> Self {
        Self {
            dialect: Box::new(dialect),
            classifier: Box::new(classifier),
        }
    }

    /// GenLayer Python contracts with `@gl.public.*` methods.
    pub fn genlayer() -> Self {
        Self::new(GenLayerPython, AnnotationClassifier::genlayer())
    }

    pub fn validate_source(&self, source: &ContractSource) -> ValidationReport {
        tracing::debug!(origin = ?source.origin, "validating contract source");
        self.validate(&source.text)
    }

    /// Validate one source text.
    pub fn validate(&self, source: &str) -> ValidationReport {
        let outline = match self.dialect.outline(source) {
            Ok(outline) => outline,
            Err(issue) => {
                tracing::debug!("syntax pass failed: {}", issue.message);
                return ValidationReport {
                    findings: vec![Finding::error(
                        Category::Syntax,
                        rules::INVALID_SYNTAX,
                        issue.message,
                        issue.location,
                    )],
                    stats: None,
                };
            }
        };

        let contracts: Vec<&TypeDecl> = outline
            .types
            .iter()
            .filter(|t| self.dialect.declares_capability(t))
            .collect();
        // Style checks fall back to every top-level type when there is no contract.
        let scope: Vec<&TypeDecl> = if contracts.is_empty() {
            outline.types.iter().collect()
        } else {
            contracts.clone()
        };

        let mut findings = self.structure_pass(&contracts);
        let stats = self.style_pass(source, &outline, &contracts, &scope, &mut findings);

        tracing::debug!(
            errors = findings.iter().filter(|f| f.is_error()).count(),
            warnings = findings.iter().filter(|f| !f.is_error()).count(),
            "validation finished"
        );
        ValidationReport {
            findings,
            stats: Some(stats),
        }
    }

    /// Without a contract the constructor and method rules have nothing to
    /// look at, so a missing contract is the only structure error.
    fn structure_pass(&self, contracts: &[&TypeDecl]) -> Vec<Finding> {
        let base = self.dialect.contract_base();
        let mut findings = Vec::new();

        match contracts {
            [] => {
                findings.push(Finding::error(
                    Category::Structure,
                    rules::MISSING_CONTRACT,
                    format!("missing contract declaration: no class derives from {base}"),
                    None,
                ));
                return findings;
            }
            [_] => {}
            [_, second, ..] => {
                let names: Vec<String> = contracts.iter().map(|c| format!("`{}`", c.name)).collect();
                let message = if names.len() == 2 {
                    format!(
                        "duplicate contract declaration: {} and {} both derive from {base}",
                        names[0], names[1]
                    )
                } else {
                    format!(
                        "duplicate contract declaration: {} all derive from {base}",
                        names.join(", ")
                    )
                };
                findings.push(Finding::error(
                    Category::Structure,
                    rules::DUPLICATE_CONTRACT,
                    message,
                    Some(second.location),
                ));
            }
        }

        let constructor = self.dialect.constructor_name();
        let has_constructor = contracts
            .iter()
            .flat_map(|t| &t.methods)
            .any(|m| m.name == constructor);
        if !has_constructor {
            findings.push(Finding::error(
                Category::Structure,
                rules::MISSING_CONSTRUCTOR,
                format!("missing constructor: no `{constructor}` defined"),
                contracts.first().map(|t| t.location),
            ));
        }

        let has_public = contracts
            .iter()
            .flat_map(|t| &t.methods)
            .any(|m| self.classifier.is_public(m));
        if !has_public {
            findings.push(Finding::error(
                Category::Structure,
                rules::NO_PUBLIC_METHODS,
                format!("no public methods: {}", self.classifier.convention()),
                contracts.first().map(|t| t.location),
            ));
        }

        findings
    }

    fn style_pass(
        &self,
        source: &str,
        outline: &SourceOutline,
        contracts: &[&TypeDecl],
        scope: &[&TypeDecl],
        findings: &mut Vec<Finding>,
    ) -> SourceStats {
        if let Some(message) = self.dialect.header_issue(source) {
            findings.push(Finding::warning(
                Category::Style,
                rules::MISSING_RUNNER_HEADER,
                message,
                Some(Location { line: 1, column: 1 }),
            ));
        }

        let mut public_methods = 0;
        for method in scope.iter().flat_map(|t| &t.methods) {
            if !self.classifier.is_public(method) {
                continue;
            }
            public_methods += 1;
            if !method.has_docstring {
                findings.push(Finding::warning(
                    Category::Style,
                    rules::MISSING_DOCSTRING,
                    format!("public method `{}` has no docstring", method.name),
                    Some(method.location),
                ));
            }
        }

        SourceStats {
            functions: outline.function_count,
            public_methods,
            contracts: contracts.len(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::genlayer()
    }
}
