//! Value collection and reconciliation.
//!
//! Values arrive either as form answers or as a flat key/value string.
//! Both end up as a [`CandidateValueSet`] that is accepted or rejected as a
//! whole by [`reconcile`].

mod kv;
mod prompt;
mod reconcile;
mod types;

pub use kv::parse_kv;
pub use prompt::{collect_attachments, prompt_fields, FieldPrompt};
pub use reconcile::{check_value, reconcile};
pub use types::{CandidateValueSet, InputError, InputResult, ValidationOutcome};
