use std::fmt;

use serde::Serialize;

/// Which pass produced a finding. Ordering follows pass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Syntax,
    Structure,
    Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Build from a 0-based row/column pair as reported by parsers.
    pub fn from_zero_based(row: usize, column: usize) -> Self {
        Self {
            line: row + 1,
            column: column + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One issue reported by a validator pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    /// Stable rule code, e.g. `missing-contract`.
    pub rule: &'static str,
    pub message: String,
    pub location: Option<Location>,
}

impl Finding {
    pub fn error(
        category: Category,
        rule: &'static str,
        message: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        Self {
            category,
            severity: Severity::Error,
            rule,
            message: message.into(),
            location,
        }
    }

    pub fn warning(
        category: Category,
        rule: &'static str,
        message: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        Self {
            category,
            severity: Severity::Warning,
            rule,
            message: message.into(),
            location,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let category = match self.category {
            Category::Syntax => "syntax",
            Category::Structure => "structure",
            Category::Style => "style",
        };
        write!(f, "{severity}[{category}/{}]", self.rule)?;
        if let Some(loc) = &self.location {
            write!(f, " {loc}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Counts gathered by the style pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Every function definition in the file, nested ones included.
    pub functions: usize,
    pub public_methods: usize,
    pub contracts: usize,
}

/// Ordered findings for a single source text.
///
/// Syntax findings come first, then structure, then style; within a pass,
/// findings keep source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    /// `None` when the syntax pass failed and the later passes were skipped.
    pub stats: Option<SourceStats>,
}

impl ValidationReport {
    /// True when no finding has error severity.
    pub fn is_accepted(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}
