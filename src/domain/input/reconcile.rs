//! Reconciling supplied values with a template's declared variables

use std::collections::HashSet;

use crate::template::TemplateVariable;
use crate::validation::{FilterRegistry, ValidationError};

use super::types::{CandidateValueSet, InputError, ValidationOutcome};

/// Check a whole value set against the declared variables.
///
/// Unknown keys are reported before anything else. Then each declared
/// variable, in declared order, must have a non-blank value that passes its
/// filter chain. The first problem found rejects the set.
pub fn reconcile(
    declared: &[TemplateVariable],
    supplied: &CandidateValueSet,
    registry: &FilterRegistry,
) -> ValidationOutcome {
    let known: HashSet<&str> = declared.iter().map(|v| v.name.as_str()).collect();

    if let Some(unknown) = supplied.names().find(|name| !known.contains(name)) {
        tracing::debug!(variable = %unknown, "Unknown variable supplied");
        return Err(InputError::UnknownVariable(unknown.to_string()));
    }

    for variable in declared {
        let value = supplied.get(&variable.name).unwrap_or_default();
        check_value(variable, value, registry)?;
    }

    tracing::debug!(variables = declared.len(), "Values accepted");
    Ok(())
}

/// Required rule then filter chain for one variable
pub fn check_value(
    variable: &TemplateVariable,
    value: &str,
    registry: &FilterRegistry,
) -> ValidationOutcome {
    if value.trim().is_empty() {
        return Err(InputError::MissingRequiredVariable(variable.name.clone()));
    }

    registry
        .validate(value, &variable.filters)
        .map_err(|source| violation(variable, source))
}

fn violation(variable: &TemplateVariable, source: ValidationError) -> InputError {
    InputError::FilterViolation {
        variable: variable.name.clone(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateFilter;
    use crate::validation::FilepathMode;

    fn registry() -> FilterRegistry {
        FilterRegistry::builtin(FilepathMode::Strict)
    }

    fn values(pairs: &[(&str, &str)]) -> CandidateValueSet {
        pairs.iter().copied().collect()
    }

    fn declared() -> Vec<TemplateVariable> {
        vec![
            TemplateVariable::new("A", vec![]),
            TemplateVariable::new("B", vec![TemplateFilter::new("int")]),
        ]
    }

    #[test]
    fn test_accepts_complete_valid_set() {
        let outcome = reconcile(&declared(), &values(&[("A", "x"), ("B", "3")]), &registry());
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_unknown_reported_before_missing() {
        let outcome = reconcile(&declared(), &values(&[("Z", "x")]), &registry());
        assert_eq!(outcome, Err(InputError::UnknownVariable("Z".to_string())));
    }

    #[test]
    fn test_unknown_key_is_case_sensitive() {
        let outcome = reconcile(
            &declared(),
            &values(&[("A", "x"), ("B", "1"), ("b", "1")]),
            &registry(),
        );
        assert_eq!(outcome, Err(InputError::UnknownVariable("b".to_string())));
    }

    #[test]
    fn test_missing_in_declared_order() {
        let outcome = reconcile(&declared(), &CandidateValueSet::new(), &registry());
        assert_eq!(
            outcome,
            Err(InputError::MissingRequiredVariable("A".to_string()))
        );
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let outcome = reconcile(&declared(), &values(&[("A", "   "), ("B", "1")]), &registry());
        assert_eq!(
            outcome,
            Err(InputError::MissingRequiredVariable("A".to_string()))
        );
    }

    #[test]
    fn test_filter_violation_names_variable() {
        let outcome = reconcile(&declared(), &values(&[("A", "x"), ("B", "abc")]), &registry());
        assert_eq!(
            outcome,
            Err(InputError::FilterViolation {
                variable: "B".to_string(),
                source: ValidationError::NotAnInteger("abc".to_string()),
            })
        );
    }

    #[test]
    fn test_no_declared_variables() {
        assert!(reconcile(&[], &CandidateValueSet::new(), &registry()).is_ok());
        assert_eq!(
            reconcile(&[], &values(&[("A", "1")]), &registry()),
            Err(InputError::UnknownVariable("A".to_string()))
        );
    }
}
