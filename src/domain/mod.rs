//! Domain layer modules
//!
//! This module contains the template contract logic:
//! - `template`: Frontmatter splitting, variable and filter discovery
//! - `validation`: Filter registry and value checks
//! - `input`: Key/value parsing, reconciliation and field prompts

pub mod input;
pub mod template;
pub mod validation;
