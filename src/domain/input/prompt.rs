//! Per-field contract for interactive value collection

use std::path::PathBuf;

use crate::template::TemplateVariable;
use crate::validation::{hint_for, FilterRegistry};

use super::reconcile::check_value;
use super::types::{CandidateValueSet, ValidationOutcome};

/// What a form needs to ask for one variable
#[derive(Debug, Clone)]
pub struct FieldPrompt<'a> {
    pub variable: &'a TemplateVariable,
    /// Placeholder text derived from the filter chain
    pub hint: Option<&'static str>,
    registry: &'a FilterRegistry,
}

impl<'a> FieldPrompt<'a> {
    pub fn new(variable: &'a TemplateVariable, registry: &'a FilterRegistry) -> Self {
        Self {
            variable,
            hint: hint_for(&variable.filters),
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.variable.name
    }

    /// Validate one raw answer: required rule, then the filter chain
    pub fn check(&self, raw: &str) -> ValidationOutcome {
        check_value(self.variable, raw, self.registry)
    }
}

/// One prompt per variable, in declared order
pub fn prompt_fields<'a>(
    declared: &'a [TemplateVariable],
    registry: &'a FilterRegistry,
) -> Vec<FieldPrompt<'a>> {
    declared
        .iter()
        .map(|variable| FieldPrompt::new(variable, registry))
        .collect()
}

/// Absolute paths of every `type:"filepath"` value, in declared order
pub fn collect_attachments(
    declared: &[TemplateVariable],
    values: &CandidateValueSet,
) -> std::io::Result<Vec<PathBuf>> {
    let mut attachments = Vec::new();
    for variable in declared {
        if !variable.has_filter("type", "filepath") {
            continue;
        }
        match values.get(&variable.name) {
            Some(path) if !path.trim().is_empty() => {
                attachments.push(std::path::absolute(path)?);
            }
            _ => {}
        }
    }
    Ok(attachments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;
    use crate::template::TemplateFilter;
    use crate::validation::{FilepathMode, ValidationError};

    fn declared() -> Vec<TemplateVariable> {
        vec![
            TemplateVariable::new("Name", vec![]),
            TemplateVariable::new("When", vec![TemplateFilter::with_argument("type", "date")]),
            TemplateVariable::new(
                "Report",
                vec![TemplateFilter::with_argument("type", "filepath")],
            ),
        ]
    }

    #[test]
    fn test_prompts_follow_declared_order_with_hints() {
        let registry = FilterRegistry::builtin(FilepathMode::Lenient);
        let vars = declared();
        let prompts = prompt_fields(&vars, &registry);

        let summary: Vec<_> = prompts.iter().map(|p| (p.name(), p.hint)).collect();
        assert_eq!(
            summary,
            [
                ("Name", None),
                ("When", Some("DD-MM-YYYY")),
                ("Report", Some("path/to/file.pdf")),
            ]
        );
    }

    #[test]
    fn test_prompt_check() {
        let registry = FilterRegistry::builtin(FilepathMode::Lenient);
        let vars = declared();
        let prompts = prompt_fields(&vars, &registry);

        assert_eq!(
            prompts[0].check("  "),
            Err(InputError::MissingRequiredVariable("Name".to_string()))
        );
        assert!(prompts[1].check("25-01-2026").is_ok());
        assert_eq!(
            prompts[1].check("2026-01-25"),
            Err(InputError::FilterViolation {
                variable: "When".to_string(),
                source: ValidationError::InvalidDate("2026-01-25".to_string()),
            })
        );
    }

    #[test]
    fn test_attachments_are_absolute_and_ordered() {
        let mut vars = declared();
        vars.push(TemplateVariable::new(
            "Extra",
            vec![TemplateFilter::with_argument("type", "filepath")],
        ));

        let values: CandidateValueSet = [
            ("Name", "Ann"),
            ("When", "25-01-2026"),
            ("Report", "out/report.pdf"),
            ("Extra", "/tmp/extra.txt"),
        ]
        .into_iter()
        .collect();

        let attachments = collect_attachments(&vars, &values).unwrap();
        assert_eq!(attachments.len(), 2);
        assert!(attachments.iter().all(|p| p.is_absolute()));
        assert!(attachments[0].ends_with("out/report.pdf"));
        assert!(attachments[1].ends_with("extra.txt"));
    }
}
