//! Command flow behind the `mailmate` binary:
//! 1. Discover templates
//! 2. Select one (by path or interactively)
//! 3. Read its variable contract
//! 4. Collect values (`--kv` string or prompts) and reconcile them
//! 5. Report the accepted draft contract
//!
//! Rendering and sending happen downstream of this flow.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::input::{
    collect_attachments, parse_kv, prompt_fields, reconcile, CandidateValueSet, InputError,
};
use crate::template::{
    scan_templates, select_template, ParsedTemplateFile, TemplateContract, TemplateRef,
    TemplateVariable,
};
use crate::validation::{FilepathMode, FilterRegistry};

const KV_USAGE: &str = "Usage: --kv \"key1='value1';key2='value2'\"";
const TEMPLATE_USAGE: &str = "Usage: --template <path>";

/// Options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// `Some("")` lists templates, `Some(path)` selects one, `None` prompts
    pub template: Option<String>,
    /// `Some("")` lists required variables, `Some(pairs)` supplies values,
    /// `None` prompts
    pub kv: Option<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    /// Print the accepted draft as JSON
    pub json: bool,
}

/// How a run ended successfully
#[derive(Debug)]
pub enum RunOutcome {
    TemplatesListed,
    VariablesListed,
    Accepted(Draft),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipients {
    pub to: String,
    pub cc: String,
    pub bcc: String,
}

impl Recipients {
    /// Command-line values win over frontmatter defaults when non-empty
    pub fn resolve(file: &ParsedTemplateFile, options: &Options) -> Self {
        fn pick(flag: &Option<String>, default: &str) -> String {
            match flag.as_deref() {
                Some(value) if !value.trim().is_empty() => value.to_string(),
                _ => default.to_string(),
            }
        }

        Self {
            to: pick(&options.to, &file.to),
            cc: pick(&options.cc, &file.cc),
            bcc: pick(&options.bcc, &file.bcc),
        }
    }
}

/// Everything the renderer and mail transport need, after validation
#[derive(Debug, Clone, Serialize)]
pub struct Draft {
    pub template: PathBuf,
    pub subject: String,
    pub recipients: Recipients,
    pub variables: Vec<TemplateVariable>,
    pub values: CandidateValueSet,
    pub attachments: Vec<PathBuf>,
}

pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    options: &Options,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome> {
    let templates = scan_templates(&settings.templates.dir, &settings.templates.extension)?;

    let selected = match options.template.as_deref() {
        Some("") => {
            write_template_list(out, &templates)?;
            return Ok(RunOutcome::TemplatesListed);
        }
        Some(requested) => select_template(&templates, requested)?.clone(),
        None => choose_template(&templates, input, out)?,
    };

    let contract = TemplateContract::load(&selected.path)?;
    let registry =
        FilterRegistry::builtin(FilepathMode::from_strict(settings.validation.strict_filepath));

    let values = match options.kv.as_deref() {
        Some("") => {
            write_required_variables(out, &contract.variables)?;
            return Ok(RunOutcome::VariablesListed);
        }
        Some(raw) => {
            let values = parse_kv(raw)?;
            if let Err(err) = reconcile(&contract.variables, &values, &registry) {
                writeln!(out, "Error: {err}\n")?;
                write_required_variables(out, &contract.variables)?;
                return Err(AppError::Validation(err));
            }
            values
        }
        None => {
            let values = prompt_values(&contract.variables, &registry, input, out)?;
            reconcile(&contract.variables, &values, &registry).map_err(AppError::Validation)?;
            values
        }
    };

    let attachments = collect_attachments(&contract.variables, &values)?;
    let draft = Draft {
        template: selected.path,
        subject: contract.file.subject.clone(),
        recipients: Recipients::resolve(&contract.file, options),
        variables: contract.variables,
        values,
        attachments,
    };

    tracing::info!(
        template = %draft.template.display(),
        values = draft.values.len(),
        attachments = draft.attachments.len(),
        "Draft accepted"
    );

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &draft)?;
        writeln!(out)?;
    } else {
        write_draft_summary(out, &draft)?;
    }

    Ok(RunOutcome::Accepted(draft))
}

pub fn write_template_list<W: Write>(out: &mut W, templates: &[TemplateRef]) -> Result<()> {
    writeln!(out, "Available templates:")?;
    for template in templates {
        writeln!(out, "  - {}", template.path.display())?;
    }
    writeln!(out, "\n{TEMPLATE_USAGE}")?;
    Ok(())
}

pub fn write_required_variables<W: Write>(
    out: &mut W,
    variables: &[TemplateVariable],
) -> Result<()> {
    writeln!(out, "Template variables required:")?;
    for variable in variables {
        writeln!(out, "  - {variable}")?;
    }
    writeln!(out, "\n{KV_USAGE}")?;
    Ok(())
}

fn write_draft_summary<W: Write>(out: &mut W, draft: &Draft) -> Result<()> {
    writeln!(out, "Template: {}", draft.template.display())?;
    writeln!(out, "Subject: {}", draft.subject)?;
    for (label, value) in [
        ("To", &draft.recipients.to),
        ("Cc", &draft.recipients.cc),
        ("Bcc", &draft.recipients.bcc),
    ] {
        if !value.is_empty() {
            writeln!(out, "{label}: {value}")?;
        }
    }
    for (name, value) in draft.values.iter() {
        writeln!(out, "  {name} = {value}")?;
    }
    for attachment in &draft.attachments {
        writeln!(out, "Attachment: {}", attachment.display())?;
    }
    Ok(())
}

fn choose_template<R: BufRead, W: Write>(
    templates: &[TemplateRef],
    input: &mut R,
    out: &mut W,
) -> Result<TemplateRef> {
    writeln!(out, "Select a template:")?;
    for (i, template) in templates.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, template.name)?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = read_answer(input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=templates.len()).contains(&n) => return Ok(templates[n - 1].clone()),
            _ => writeln!(out, "Enter a number between 1 and {}", templates.len())?,
        }
    }
}

/// Ask for each variable in turn, re-asking until the answer passes
fn prompt_values<R: BufRead, W: Write>(
    variables: &[TemplateVariable],
    registry: &FilterRegistry,
    input: &mut R,
    out: &mut W,
) -> Result<CandidateValueSet> {
    let mut values = CandidateValueSet::new();

    for field in prompt_fields(variables, registry) {
        loop {
            match field.hint {
                Some(hint) => write!(out, "{} [{}]: ", field.name(), hint)?,
                None => write!(out, "{}: ", field.name())?,
            }
            out.flush()?;

            let answer = read_answer(input)?;
            match field.check(&answer) {
                Ok(()) => {
                    values.insert(field.name(), answer);
                    break;
                }
                Err(InputError::MissingRequiredVariable(_)) => {
                    writeln!(out, "  value is required")?;
                }
                Err(InputError::FilterViolation { source, .. }) => {
                    writeln!(out, "  {source}")?;
                }
                Err(err) => writeln!(out, "  {err}")?,
            }
        }
    }

    Ok(values)
}

/// One line without its line ending; end of input is an error
fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before all values were entered",
        )
        .into());
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
