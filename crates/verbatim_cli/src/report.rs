//! Rendering diagnostics as miette reports.

use std::fmt;

use miette::{LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use thiserror::Error;
use verbatim_diagnostics::{Diagnostic, DiagnosticCategory};

/// A diagnostic bundled with the source it points into.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceReport {
    message: String,
    code: String,
    severity: Severity,
    label: String,
    span: Option<SourceSpan>,
    source_code: NamedSource<String>,
}

impl SourceReport {
    pub fn new(diagnostic: &Diagnostic, name: &str, source: &str) -> Self {
        let severity = match diagnostic.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
            DiagnosticCategory::Message => Severity::Advice,
        };
        let label = match diagnostic.found.as_deref() {
            Some("") | None => "end of input".to_string(),
            Some(found) => format!("found `{}`", found),
        };
        Self {
            message: diagnostic.message_text.clone(),
            code: format!("VB{}", diagnostic.code),
            severity,
            label,
            span: diagnostic
                .span
                .map(|span| SourceSpan::from((span.start as usize, span.length as usize))),
            source_code: NamedSource::new(name, source.to_string()),
        }
    }
}

impl miette::Diagnostic for SourceReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            span,
        ))))
    }
}
