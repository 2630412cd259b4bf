//! Template file discovery

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::types::{TemplateError, TemplateRef, TemplateResult};

/// List template files in `dir` whose extension matches `extension`
/// (case-insensitive), sorted by file name.
pub fn scan_templates(dir: &Path, extension: &str) -> TemplateResult<Vec<TemplateRef>> {
    let entries = std::fs::read_dir(dir).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TemplateError::DirectoryNotFound(dir.to_path_buf()),
        _ => TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        },
    })?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if !matches {
            continue;
        }

        templates.push(TemplateRef {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    if templates.is_empty() {
        return Err(TemplateError::NoTemplates(dir.to_path_buf()));
    }

    templates.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = templates.len(), "Templates discovered");

    Ok(templates)
}

/// Pick the template whose path matches `requested` once both are normalized
pub fn select_template<'a>(
    templates: &'a [TemplateRef],
    requested: &str,
) -> TemplateResult<&'a TemplateRef> {
    let wanted = normalize(Path::new(requested));
    templates
        .iter()
        .find(|t| normalize(&t.path) == wanted)
        .ok_or_else(|| TemplateError::TemplateNotFound(requested.to_string()))
}

/// Lexical normalization: drops `.` components and folds `..` where possible
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.html"), "B").unwrap();
        fs::write(dir.path().join("a.HTML"), "A").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::create_dir(dir.path().join("nested.html")).unwrap();

        let templates = scan_templates(dir.path(), "html").unwrap();
        let names: Vec<_> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a.HTML", "b.html"]);
        assert_eq!(templates[1].path, dir.path().join("b.html"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("templates");
        let err = scan_templates(&missing, "html").unwrap_err();
        assert!(matches!(err, TemplateError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        let err = scan_templates(dir.path(), "html").unwrap_err();
        assert!(matches!(err, TemplateError::NoTemplates(_)));
    }

    #[test]
    fn test_select_normalizes_paths() {
        let templates = vec![
            TemplateRef {
                name: "invite.html".to_string(),
                path: PathBuf::from("templates/invite.html"),
            },
            TemplateRef {
                name: "report.html".to_string(),
                path: PathBuf::from("templates/report.html"),
            },
        ];

        let found = select_template(&templates, "./templates/sub/../report.html").unwrap();
        assert_eq!(found.name, "report.html");

        let err = select_template(&templates, "templates/other.html").unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound(name) if name == "templates/other.html"));
    }
}
