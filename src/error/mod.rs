use thiserror::Error;

use crate::input::InputError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Template(#[from] TemplateError),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Validation failed: {0}")]
    Validation(InputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Short machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Template(TemplateError::MalformedHeader)
            | AppError::Template(TemplateError::InvalidFrontmatter(_)) => "TEMPLATE_HEADER",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Input(_) => "INPUT_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "SERIALIZATION_ERROR",
        }
    }

    /// What the user can do about it, when there is something to suggest
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Template(TemplateError::DirectoryNotFound(_)) => {
                Some("create a 'templates' directory or pass --templates-dir")
            }
            AppError::Template(TemplateError::NoTemplates(_)) => {
                Some("add at least one .html template to the templates directory")
            }
            AppError::Template(TemplateError::TemplateNotFound(_)) => {
                Some("run with --template and no value to list available templates")
            }
            AppError::Template(TemplateError::MalformedHeader) => {
                Some("close the frontmatter block with a '---' line")
            }
            AppError::Input(InputError::MalformedKeyValuePair { .. }) => {
                Some("use the form --kv \"key1='value1';key2='value2'\"")
            }
            AppError::Input(_) | AppError::Validation(_) => {
                Some("run with --kv and no value to list required variables")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
