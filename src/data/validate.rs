//! Data diagnostics: curated names missing from the catalog, absent categories, unusable usage data.
//! Nothing here blocks squad building; it is the developer-facing view of what gets silently dropped.

use std::fmt;

use crate::data::catalog::CATALOG_CATEGORIES;
use crate::data::context::DataContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

pub fn validate_context(context: &DataContext) -> ValidationReport {
    let mut report = ValidationReport::default();

    for category in CATALOG_CATEGORIES {
        if !context.catalog.has_category(category) {
            report.push(
                ValidationSeverity::Warning,
                format!("items.{category}"),
                "category missing; its pool will be empty",
            );
        }
    }
    if context.whitelist.is_empty() {
        report.push(
            ValidationSeverity::Error,
            "items",
            "catalog contains no item names",
        );
    }

    context.curated.for_each_role(|path, role| {
        for (category, names) in role.lists() {
            for name in names {
                if !context.whitelist.contains(name) {
                    report.push(
                        ValidationSeverity::Warning,
                        format!("{path}.{category}"),
                        format!("'{name}' is not in the item catalog and will be dropped"),
                    );
                }
            }
        }
    });

    if context.weights.is_empty() {
        report.push(
            ValidationSeverity::Info,
            "usage",
            "no named entries found; ranking falls back to catalog order",
        );
    }

    for required in &context.rules.must_include_stratagems {
        let needle = context.rules.loose_key(required);
        if !context
            .whitelist
            .iter()
            .any(|name| name.to_lowercase().contains(&needle))
        {
            report.push(
                ValidationSeverity::Info,
                "rules.must_include_stratagems",
                format!("'{required}' has no loose match in the catalog"),
            );
        }
    }

    report.diagnostics.sort_by(|a, b| a.severity.cmp(&b.severity));
    report
}
