//! Email template introspection.
//!
//! This module provides:
//! - Frontmatter splitting (`subject`, `to`, `cc`, `bcc` plus body)
//! - Variable discovery for `{{ Name | filter:"arg" }}` tags
//! - Filter chain parsing
//! - Template file discovery in a directory
//!
//! # Example
//!
//! ```ignore
//! let contract = TemplateContract::load(Path::new("templates/invite.html"))?;
//!
//! for variable in &contract.variables {
//!     println!("  - {variable}");
//! }
//! ```

mod discovery;
mod filters;
mod frontmatter;
mod scanner;
mod types;

pub use discovery::{scan_templates, select_template};
pub use filters::parse_filters;
pub use frontmatter::{read_template_file, split_frontmatter};
pub use scanner::{scan_text, scan_variables, TemplateContract};
pub use types::{
    ParsedTemplateFile, TemplateError, TemplateFilter, TemplateRef, TemplateResult,
    TemplateVariable,
};
