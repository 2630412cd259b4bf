//! Filter registry: the set of filters the validator knows how to check

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::template::TemplateFilter;

use super::rules::{validate_date, validate_file_exists, validate_filepath, validate_int};
use super::types::{FilepathMode, ValidationResult};

/// Check for a single filter. Receives the value and the filter argument.
pub type FilterFn = Arc<dyn Fn(&str, Option<&str>) -> ValidationResult<()> + Send + Sync>;

/// Immutable mapping from filter name to its check.
///
/// Filters not present in the registry are skipped, so templates may carry
/// rendering-only filters without blocking validation.
#[derive(Clone)]
pub struct FilterRegistry {
    filters: HashMap<String, FilterFn>,
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.filters.keys().collect();
        names.sort();
        f.debug_struct("FilterRegistry")
            .field("filters", &names)
            .finish()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::builtin(FilepathMode::default())
    }
}

impl FilterRegistry {
    /// A registry that knows no filters
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// The built-in `int` and `type` filters
    pub fn builtin(filepath_mode: FilepathMode) -> Self {
        Self::empty()
            .with_filter("int", |value, _| validate_int(value).map(|_| ()))
            .with_filter("type", move |value, arg| match arg {
                Some("date") => validate_date(value).map(|_| ()),
                Some("filepath") => {
                    validate_filepath(value)?;
                    if filepath_mode == FilepathMode::Strict {
                        validate_file_exists(value)?;
                    }
                    Ok(())
                }
                _ => Ok(()),
            })
    }

    /// Add or replace a filter check
    pub fn with_filter<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> ValidationResult<()> + Send + Sync + 'static,
    {
        self.filters.insert(name.into(), Arc::new(check));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Run each filter of the chain in order, stopping at the first failure
    pub fn validate(&self, value: &str, filters: &[TemplateFilter]) -> ValidationResult<()> {
        for filter in filters {
            match self.filters.get(&filter.name) {
                Some(check) => check(value, filter.argument.as_deref())?,
                None => {
                    tracing::trace!(filter = %filter.name, "Unknown filter skipped");
                }
            }
        }
        Ok(())
    }
}

/// Input hint for a filter chain; the first filter with a hint wins
pub fn hint_for(filters: &[TemplateFilter]) -> Option<&'static str> {
    filters.iter().find_map(|f| match (f.name.as_str(), f.argument.as_deref()) {
        ("type", Some("date")) => Some("DD-MM-YYYY"),
        ("type", Some("filepath")) => Some("path/to/file.pdf"),
        ("int", _) => Some("e.g. 42"),
        _ => None,
    })
}
