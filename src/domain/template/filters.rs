//! Filter chain parsing for variable tags

use lazy_static::lazy_static;
use regex::Regex;

use super::types::TemplateFilter;

lazy_static! {
    // | name
    // | name:"double quoted"
    // | name:'single quoted'
    // | name:bare
    static ref FILTER_RE: Regex =
        Regex::new(r#"\|\s*([a-zA-Z0-9_]+)(?:\s*:\s*(?:"([^"]*)"|'([^']*)'|([^|\s]+)))?"#)
            .expect("filter pattern is valid");
}

/// Parse the filter chain out of the text following a variable name inside a
/// tag, e.g. `| type:"date" | int`.
///
/// Filters come back in source order. Duplicates are kept. Text without any
/// `|` yields an empty chain. An empty quoted argument is treated as no
/// argument.
pub fn parse_filters(raw: &str) -> Vec<TemplateFilter> {
    FILTER_RE
        .captures_iter(raw)
        .map(|caps| {
            let argument = (2..=4)
                .filter_map(|i| caps.get(i))
                .map(|m| m.as_str())
                .find(|s| !s.is_empty())
                .map(str::to_string);

            TemplateFilter {
                name: caps[1].to_string(),
                argument,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pipe_is_empty_chain() {
        assert!(parse_filters("").is_empty());
        assert!(parse_filters("   ").is_empty());
        assert!(parse_filters(" trailing words").is_empty());
    }

    #[test]
    fn test_bare_filter() {
        assert_eq!(parse_filters(" | int"), vec![TemplateFilter::new("int")]);
    }

    #[test]
    fn test_argument_forms() {
        assert_eq!(
            parse_filters(r#" | type:"date""#),
            vec![TemplateFilter::with_argument("type", "date")]
        );
        assert_eq!(
            parse_filters(" | type:'filepath'"),
            vec![TemplateFilter::with_argument("type", "filepath")]
        );
        assert_eq!(
            parse_filters(" | default:now"),
            vec![TemplateFilter::with_argument("default", "now")]
        );
    }

    #[test]
    fn test_quoted_argument_keeps_whitespace() {
        assert_eq!(
            parse_filters(r#" | default:"hello  world ""#),
            vec![TemplateFilter::with_argument("default", "hello  world ")]
        );
    }

    #[test]
    fn test_bare_argument_stops_at_pipe_or_space() {
        assert_eq!(
            parse_filters(" | default:a|int"),
            vec![
                TemplateFilter::with_argument("default", "a"),
                TemplateFilter::new("int"),
            ]
        );
        assert_eq!(
            parse_filters(" | default:abc def"),
            vec![TemplateFilter::with_argument("default", "abc")]
        );
    }

    #[test]
    fn test_spaces_around_colon() {
        assert_eq!(
            parse_filters(r#" | type : "date" "#),
            vec![TemplateFilter::with_argument("type", "date")]
        );
    }

    #[test]
    fn test_chain_order_and_duplicates() {
        assert_eq!(
            parse_filters(r#" | int | type:"date" | int"#),
            vec![
                TemplateFilter::new("int"),
                TemplateFilter::with_argument("type", "date"),
                TemplateFilter::new("int"),
            ]
        );
    }

    #[test]
    fn test_filter_name_charset() {
        assert_eq!(
            parse_filters(" | to_upper2"),
            vec![TemplateFilter::new("to_upper2")]
        );
    }

    #[test]
    fn test_empty_quoted_argument() {
        assert_eq!(parse_filters(r#" | type:"""#), vec![TemplateFilter::new("type")]);
    }
}
