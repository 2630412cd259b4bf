//! Template types and error definitions

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    #[error("Malformed frontmatter: missing closing '---'")]
    MalformedHeader,

    #[error("Invalid frontmatter: {0}")]
    InvalidFrontmatter(String),

    #[error("Templates directory not found at {0}")]
    DirectoryNotFound(PathBuf),

    #[error("No templates found in {0}")]
    NoTemplates(PathBuf),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A template file found in the templates directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRef {
    /// File name shown to the user (e.g. `invitation.html`)
    pub name: String,

    /// Path to the template file
    pub path: PathBuf,
}

/// One validation/formatting directive attached to a variable reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TemplateFilter {
    /// Filter name (e.g. `type`, `int`)
    pub name: String,

    /// Optional argument (`date` in `type:"date"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl TemplateFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    pub fn with_argument(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }

    /// True when this filter is `name` with argument `argument`
    pub fn is(&self, name: &str, argument: &str) -> bool {
        self.name == name && self.argument.as_deref() == Some(argument)
    }
}

impl fmt::Display for TemplateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(arg) => write!(f, "{}:{}", self.name, arg),
            None => f.write_str(&self.name),
        }
    }
}

/// A variable discovered in a template, with its filter chain in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVariable {
    /// PascalCase identifier
    pub name: String,

    /// Filters applied to the first occurrence of this variable
    pub filters: Vec<TemplateFilter>,
}

impl TemplateVariable {
    pub fn new(name: impl Into<String>, filters: Vec<TemplateFilter>) -> Self {
        Self {
            name: name.into(),
            filters,
        }
    }

    /// Comma-separated filter list, e.g. `int, type:date`
    pub fn filter_summary(&self) -> String {
        self.filters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_filter(&self, name: &str, argument: &str) -> bool {
        self.filters.iter().any(|f| f.is(name, argument))
    }
}

impl fmt::Display for TemplateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (filters: {})", self.name, self.filter_summary())
        }
    }
}

/// A template file separated into frontmatter fields and body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTemplateFile {
    pub subject: String,
    pub body: String,
    /// Default recipients from frontmatter
    pub to: String,
    pub cc: String,
    pub bcc: String,
}

impl ParsedTemplateFile {
    /// A template with no frontmatter: everything is body
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }
}
