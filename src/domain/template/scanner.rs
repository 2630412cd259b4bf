//! Variable discovery across frontmatter fields and body

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::filters::parse_filters;
use super::frontmatter::read_template_file;
use super::types::{ParsedTemplateFile, TemplateResult, TemplateVariable};

lazy_static! {
    // {{ Name <rest of tag> }}
    static ref VARIABLE_RE: Regex =
        Regex::new(r"\{\{\s*([A-Z][a-zA-Z0-9]*)(.*?)\s*\}\}").expect("variable pattern is valid");
}

/// A template read from disk together with the variables it declares
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContract {
    pub file: ParsedTemplateFile,
    pub variables: Vec<TemplateVariable>,
}

impl TemplateContract {
    /// Read, split and scan a template file
    pub fn load(path: &Path) -> TemplateResult<Self> {
        let file = read_template_file(path)?;
        let variables = scan_variables(&file);

        tracing::info!(
            template = %path.display(),
            variables = variables.len(),
            "Template parsed"
        );

        Ok(Self { file, variables })
    }

    pub fn variable(&self, name: &str) -> Option<&TemplateVariable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// Discover every variable used in subject, recipients and body.
///
/// Fields are scanned in the order subject, to, cc, bcc, body. The first
/// occurrence of a name decides its position and its filter chain; later
/// occurrences are skipped.
pub fn scan_variables(parsed: &ParsedTemplateFile) -> Vec<TemplateVariable> {
    let combined = [
        parsed.subject.as_str(),
        parsed.to.as_str(),
        parsed.cc.as_str(),
        parsed.bcc.as_str(),
        parsed.body.as_str(),
    ]
    .join("\n");

    scan_text(&combined)
}

/// Discover variables in a single piece of template text
pub fn scan_text(text: &str) -> Vec<TemplateVariable> {
    let mut seen = HashSet::new();
    let mut variables = Vec::new();

    for caps in VARIABLE_RE.captures_iter(text) {
        let name = &caps[1];
        if !seen.insert(name.to_string()) {
            continue;
        }

        let rest = &caps[2];
        let filters = if rest.trim().is_empty() {
            Vec::new()
        } else {
            parse_filters(rest)
        };

        tracing::debug!(variable = %name, filters = filters.len(), "Variable discovered");
        variables.push(TemplateVariable::new(name, filters));
    }

    variables
}
