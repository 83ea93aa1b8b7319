//! Name checks and span lookup for manifest validation.

use loom_core::{is_identifier, to_pascal_case};
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Where in the manifest validation currently is.
///
/// The scope is the data class whose fields are being checked, so errors
/// read "field in 'Customer'" instead of just "field".
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    scope: Option<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            scope: None,
        }
    }

    pub fn source_context(&self) -> &'a SourceContext {
        self.source
    }

    /// The same context, scoped to `owner`.
    pub fn within(self, owner: &'a str) -> Self {
        Self {
            scope: Some(owner),
            ..self
        }
    }

    /// Describe `kind` for error messages, including the scope if any.
    pub fn context_for(&self, kind: &str) -> String {
        match self.scope {
            Some(owner) => format!("{kind} in '{owner}'"),
            None => kind.to_string(),
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.text(), name)
    }

    /// Require a plain identifier such as `first_name` that still has a
    /// name left once cased (`_` alone does not).
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let valid = is_identifier(name) && !to_pascal_case(name).is_empty();
        self.check(valid, name, kind)
    }

    /// Require dot-separated identifiers such as `System.Collections`.
    pub fn validate_type_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check(name.split('.').all(is_identifier), name, kind)
    }

    fn check(&self, valid: bool, name: &str, kind: &str) -> Result<()> {
        if valid {
            Ok(())
        } else {
            Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ))
        }
    }
}

/// Find the span of a name in the TOML source.
///
/// Looks for the name as a quoted string value, then as a bare key.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(name)?;
            rest.trim_start().starts_with('=').then(|| {
                let indent = line.len() - trimmed.len();
                SourceSpan::from((start + indent, name.len()))
            })
        })
}
