//! Language seam of the validator.
//!
//! A [`ContractDialect`] turns source text into a language-neutral
//! [`SourceOutline`] and names the conventions of its contract language (the
//! base a contract derives from, the constructor name). Which methods count as
//! public is decided separately by a [`MethodClassifier`], so the same
//! validator passes work for any contract language.

use super::report::Location;

/// A method declared directly in a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// Annotation expressions without the leading `@`, e.g. `gl.public.write`.
    pub annotations: Vec<String>,
    pub has_docstring: bool,
    pub location: Location,
}

/// A top-level type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    /// Base expressions as written, e.g. `gl.Contract`.
    pub bases: Vec<String>,
    pub methods: Vec<MethodDecl>,
    pub location: Location,
}

/// What the structure and style passes need to know about a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOutline {
    pub types: Vec<TypeDecl>,
    /// Every function definition in the file, nested ones included.
    pub function_count: usize,
}

/// The parser's report for source that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub message: String,
    pub location: Option<Location>,
}

/// Parser and conventions of one contract source language.
pub trait ContractDialect: Send + Sync {
    /// Human-readable name, e.g. `genlayer-python`.
    fn name(&self) -> &'static str;

    /// The base whose presence marks a type as a contract.
    fn contract_base(&self) -> &'static str;

    /// Name of the constructor method.
    fn constructor_name(&self) -> &'static str;

    /// Parse `source` into an outline, or report why it is not valid code.
    fn outline(&self, source: &str) -> Result<SourceOutline, SyntaxIssue>;

    /// Whether `ty` carries the contract capability.
    fn declares_capability(&self, ty: &TypeDecl) -> bool {
        ty.bases.iter().any(|b| b == self.contract_base())
    }

    /// Language-specific file header check; `Some(message)` when it fails.
    fn header_issue(&self, _source: &str) -> Option<String> {
        None
    }
}

/// Decides whether a declared method is part of a contract's public interface.
pub trait MethodClassifier: Send + Sync {
    fn is_public(&self, method: &MethodDecl) -> bool;

    /// Short description of the convention, used in finding messages.
    fn convention(&self) -> String;
}

/// Public iff the method carries an annotation under one of the given prefixes.
///
/// Prefix `gl.public` matches `gl.public`, `gl.public.view`,
/// `gl.public.write.payable` and call forms such as `gl.public.write(...)`, but
/// not `gl.publicity`.
#[derive(Debug, Clone)]
pub struct AnnotationClassifier {
    prefixes: Vec<String>,
}

impl AnnotationClassifier {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// `@gl.public.*` decorators of GenLayer intelligent contracts.
    pub fn genlayer() -> Self {
        Self::new(["gl.public"])
    }

    fn matches(&self, annotation: &str) -> bool {
        let path = annotation
            .split('(')
            .next()
            .unwrap_or_default()
            .trim();
        self.prefixes.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl MethodClassifier for AnnotationClassifier {
    fn is_public(&self, method: &MethodDecl) -> bool {
        method.annotations.iter().any(|a| self.matches(a))
    }

    fn convention(&self) -> String {
        let list: Vec<String> = self.prefixes.iter().map(|p| format!("@{p}")).collect();
        format!("annotate a method with {}", list.join(" or "))
    }
}

/// Public iff the name has no leading underscore and is not a dunder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingClassifier;

impl MethodClassifier for NamingClassifier {
    fn is_public(&self, method: &MethodDecl) -> bool {
        !method.name.starts_with('_')
    }

    fn convention(&self) -> String {
        "define a method whose name does not start with `_`".to_string()
    }
}
