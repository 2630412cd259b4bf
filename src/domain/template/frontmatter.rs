//! Frontmatter splitting
//!
//! A template may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! subject: Hello {{ Name }}
//! to: "{{ Email }}"
//! ---
//! <p>Body</p>
//! ```

use std::path::Path;

use serde::Deserialize;

use super::types::{ParsedTemplateFile, TemplateError, TemplateResult};

const MARKER: &str = "---";

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    cc: Option<String>,
    #[serde(default)]
    bcc: Option<String>,
}

/// Read a template file from disk and split it
pub fn read_template_file(path: &Path) -> TemplateResult<ParsedTemplateFile> {
    let content = std::fs::read(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(template = %path.display(), bytes = content.len(), "Template file read");

    split_frontmatter(&content)
}

/// Separate the frontmatter block (if any) from the body.
///
/// Content that does not open with a `---` line is returned whole as the body.
/// An opening marker without a closing one fails with
/// [`TemplateError::MalformedHeader`]; content that is not UTF-8 fails with
/// [`TemplateError::InvalidEncoding`].
pub fn split_frontmatter(raw: &[u8]) -> TemplateResult<ParsedTemplateFile> {
    let content = std::str::from_utf8(raw).map_err(|e| TemplateError::InvalidEncoding {
        offset: e.valid_up_to(),
    })?;

    let Some(rest) = strip_opening_marker(content) else {
        return Ok(ParsedTemplateFile::from_body(content));
    };

    let (metadata, body) = split_at_closing_marker(rest).ok_or(TemplateError::MalformedHeader)?;
    let frontmatter = parse_metadata(metadata)?;

    Ok(ParsedTemplateFile {
        subject: frontmatter.subject.unwrap_or_default(),
        body: body.to_string(),
        to: frontmatter.to.unwrap_or_default(),
        cc: frontmatter.cc.unwrap_or_default(),
        bcc: frontmatter.bcc.unwrap_or_default(),
    })
}

/// Returns the text after the opening marker line, or `None` when the
/// content does not start with one.
fn strip_opening_marker(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(MARKER)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Finds the first line equal to the marker. Returns the metadata before it
/// and the body after its line ending.
fn split_at_closing_marker(rest: &str) -> Option<(&str, &str)> {
    let mut start = 0;
    while start < rest.len() {
        let (line, next) = match rest[start..].find('\n') {
            Some(idx) => (&rest[start..start + idx], start + idx + 1),
            None => (&rest[start..], rest.len()),
        };

        if line.strip_suffix('\r').unwrap_or(line) == MARKER {
            return Some((&rest[..start], &rest[next..]));
        }
        start = next;
    }
    None
}

fn parse_metadata(metadata: &str) -> TemplateResult<Frontmatter> {
    if metadata.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(metadata).map_err(|e| TemplateError::InvalidFrontmatter(e.to_string()))
}
