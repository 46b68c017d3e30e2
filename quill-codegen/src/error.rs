//! Errors raised while decoding values and loading printer configuration.
//!
//! The builders themselves never fail; only the document-facing helpers that
//! sit in front of them return [`Result`].

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for quill operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "values.json");
/// serde_json::from_str::<serde_json::Value>(content).map_err(|e| ctx.json_error(e))?;
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a decode error from a serde_json error.
    ///
    /// serde_json reports 1-based line/column positions, which are mapped back
    /// to a byte offset in the source.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::from((offset.offset(), 0))
        });
        Box::new(Error::Json {
            src: self.named_source(),
            filename: self.filename.clone(),
            span,
            source,
        })
    }

    /// Create a decode error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            filename: self.filename.clone(),
            span,
            source,
        })
    }

    /// Create a configuration error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            filename: self.filename.clone(),
            span,
            message: source.message().to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse JSON document '{filename}'")]
    #[diagnostic(code(quill::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML document '{filename}'")]
    #[diagnostic(code(quill::toml_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid printer configuration in '{filename}': {message}")]
    #[diagnostic(
        code(quill::config_error),
        help("supported keys are: indent-width, tabs, quote (\"double\" or \"single\")")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
