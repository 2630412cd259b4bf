//! Filter-driven value validation.
//!
//! Values are checked against the filter chain of a template variable.
//! The set of known filters is an explicit [`FilterRegistry`] value that
//! callers build once and pass around.

mod registry;
mod rules;
mod types;

pub use registry::{hint_for, FilterFn, FilterRegistry};
pub use rules::{
    validate_date, validate_file_exists, validate_filepath, validate_int, DATE_FORMAT,
};
pub use types::{FilepathMode, ValidationError, ValidationResult};
