//! Input types and error definitions

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Input-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid format in pair {position}: {reason} in '{segment}'")]
    MalformedKeyValuePair {
        /// 1-based index of the `;`-separated segment
        position: usize,
        segment: String,
        reason: &'static str,
    },

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("variable {0} is required")]
    MissingRequiredVariable(String),

    #[error("variable {variable}: {source}")]
    FilterViolation {
        variable: String,
        #[source]
        source: ValidationError,
    },
}

impl InputError {
    /// The variable the error is about, if any
    pub fn variable(&self) -> Option<&str> {
        match self {
            InputError::MalformedKeyValuePair { .. } => None,
            InputError::UnknownVariable(name)
            | InputError::MissingRequiredVariable(name)
            | InputError::FilterViolation { variable: name, .. } => Some(name),
        }
    }
}

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;

/// Outcome of reconciling a value set: `Ok` is accepted
pub type ValidationOutcome = InputResult<()>;

/// Externally supplied variable values, keyed by exact variable name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateValueSet {
    values: BTreeMap<String, String>,
}

impl CandidateValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any earlier one for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CandidateValueSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
