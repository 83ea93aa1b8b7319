//! Errors raised while loading manifests and generating templates.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result of manifest and template operations. The error is boxed since
/// the diagnostic variants carry a copy of the manifest text.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Text and display name of a manifest being loaded.
#[derive(Debug, Clone)]
pub struct SourceContext {
    text: String,
    name: String,
}

impl SourceContext {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name shown above snippets, usually the file path.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn snippet(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// Wrap a TOML deserialization failure.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.snippet(),
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.snippet(),
            span,
            message: message.into(),
        })
    }

    /// A name that must be an identifier (or dotted identifiers) but is not.
    /// `context` reads like "field in 'Customer'".
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.snippet(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read manifest '{path}'")]
    #[diagnostic(
        code(loom::io),
        help("create a loom.toml or pass its path with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest is not valid TOML for loom")]
    #[diagnostic(code(loom::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(loom::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is not a valid {context} name")]
    #[diagnostic(
        code(loom::identifier),
        help("C# names start with a letter or underscore, contain only letters, digits and underscores, and need at least one letter or digit")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("template generation failed")]
    #[diagnostic(code(loom::generation))]
    Generation {
        #[from]
        source: loom_dom::Error,
    },
}

impl Error {
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }

    /// The declaration-model error behind a [`Error::Generation`].
    pub fn dom_error(&self) -> Option<&loom_dom::Error> {
        match self {
            Self::Generation { source } => Some(source),
            _ => None,
        }
    }
}

impl From<loom_dom::Error> for Box<Error> {
    fn from(source: loom_dom::Error) -> Self {
        Box::new(Error::from(source))
    }
}
