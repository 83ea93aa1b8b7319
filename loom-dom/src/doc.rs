//! Per-declaration documentation.

use crate::{target::CodeComment, types::TypeReference};

/// An exception a member is documented to throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrownException {
    /// Exception type.
    pub exception_type: TypeReference,
    /// When and why it is thrown.
    pub description: String,
}

impl ThrownException {
    /// Describe a thrown exception.
    pub fn new(exception_type: impl Into<TypeReference>, description: impl Into<String>) -> Self {
        Self {
            exception_type: exception_type.into(),
            description: description.into(),
        }
    }
}

/// Summary, remarks, and thrown exceptions of a declaration.
///
/// Lowers to XML documentation comment lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation {
    summary: Option<String>,
    remarks: Option<String>,
    exceptions: Vec<ThrownException>,
}

impl Documentation {
    /// Create empty documentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary text.
    pub fn set_summary(&mut self, text: impl Into<String>) -> &mut Self {
        self.summary = Some(text.into());
        self
    }

    /// Set the remarks text.
    pub fn set_remarks(&mut self, text: impl Into<String>) -> &mut Self {
        self.remarks = Some(text.into());
        self
    }

    /// Append a thrown exception. Duplicates are kept.
    pub fn add_exception(
        &mut self,
        exception_type: impl Into<TypeReference>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.exceptions
            .push(ThrownException::new(exception_type, description));
        self
    }

    /// The summary text, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// The remarks text, if any.
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Documented exceptions in insertion order.
    pub fn exceptions(&self) -> &[ThrownException] {
        &self.exceptions
    }

    /// Check if nothing has been documented.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.remarks.is_none() && self.exceptions.is_empty()
    }

    /// Lower to documentation comment lines.
    pub fn lower(&self) -> Vec<CodeComment> {
        let mut comments = Vec::new();
        if let Some(summary) = &self.summary {
            push_element(&mut comments, "summary", summary);
        }
        if let Some(remarks) = &self.remarks {
            push_element(&mut comments, "remarks", remarks);
        }
        for ex in &self.exceptions {
            comments.push(CodeComment::doc(format!(
                "<exception cref=\"{}\">{}</exception>",
                escape_xml(&ex.exception_type.resolve().base_type),
                escape_xml(&ex.description)
            )));
        }
        comments
    }
}

fn push_element(comments: &mut Vec<CodeComment>, tag: &str, text: &str) {
    comments.push(CodeComment::doc(format!("<{}>", tag)));
    for line in text.lines() {
        comments.push(CodeComment::doc(escape_xml(line)));
    }
    comments.push(CodeComment::doc(format!("</{}>", tag)));
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
