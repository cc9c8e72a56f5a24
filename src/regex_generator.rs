use crate::route::template::Piece;
use crate::Error;
use lazy_static::lazy_static;
use regex::Regex;
use regex_syntax::ast::{self, Ast, GroupKind};

lazy_static! {
    static ref PARAM_NAME_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// A single path segment compiled from a regular expression with named groups.
#[derive(Debug, Clone)]
pub(crate) struct SegmentRegex {
    pub(crate) source: String,
    pub(crate) regex: Regex,
    pub(crate) names: Vec<String>,
    pub(crate) pieces: Vec<Piece>,
}

impl SegmentRegex {
    pub(crate) fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }
}

pub(crate) fn is_valid_param_name(name: &str) -> bool {
    PARAM_NAME_RE.is_match(name)
}

/// A segment is a regex only if it opens a group with an unescaped `(`. Anything else, `+`, `$`
/// and `[...]` included, is matched literally.
pub(crate) fn is_regex_segment(segment: &str) -> bool {
    let mut escaped = false;

    for ch in segment.chars() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '(' => return true,
            _ => {}
        }
    }

    false
}

/// Compiles one segment of `pattern` into an anchored regex and its reversible template pieces.
pub(crate) fn generate_segment_regex(pattern: &str, segment: &str) -> crate::Result<SegmentRegex> {
    let invalid = |reason: String| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        reason,
    };

    let regex = Regex::new(&format!("^(?:{})$", segment)).map_err(|e| invalid(e.to_string()))?;

    let mut names = Vec::new();
    for name in regex.capture_names().skip(1) {
        match name {
            Some(name) if names.iter().any(|n| n == name) => {
                return Err(Error::DuplicateParameter {
                    pattern: pattern.to_owned(),
                    name: name.to_owned(),
                });
            }
            Some(name) => names.push(name.to_owned()),
            None => {
                return Err(Error::UnnamedCapture {
                    pattern: pattern.to_owned(),
                })
            }
        }
    }

    let ast = ast::parse::Parser::new()
        .parse(segment)
        .map_err(|e| invalid(e.to_string()))?;

    let mut pieces = Vec::new();
    collect_pieces(segment, &ast, &mut pieces);

    Ok(SegmentRegex {
        source: segment.to_owned(),
        regex,
        names,
        pieces,
    })
}

// Captures are located by their span in the syntax tree, never by searching for their text.
// Constructs outside a capture that match more than one fixed string (classes, repetitions,
// alternations, flags) have no single rendering and are kept as opaque pieces.
fn collect_pieces(source: &str, node: &Ast, pieces: &mut Vec<Piece>) {
    match node {
        Ast::Concat(concat) => {
            for item in concat.asts.iter() {
                collect_pieces(source, item, pieces);
            }
        }
        Ast::Group(group) => match &group.kind {
            GroupKind::CaptureName { name, .. } => pieces.push(Piece::Placeholder {
                name: name.name.clone(),
                greedy: false,
            }),
            GroupKind::NonCapturing(flags) if flags.items.is_empty() => {
                collect_pieces(source, &group.ast, pieces)
            }
            _ => pieces.push(Piece::Opaque(span_text(source, node))),
        },
        Ast::Literal(literal) => push_text(pieces, literal.c.to_string()),
        // Zero-width, the segment is anchored anyway.
        Ast::Empty(_) | Ast::Assertion(_) => {}
        _ => pieces.push(Piece::Opaque(span_text(source, node))),
    }
}

fn span_text(source: &str, node: &Ast) -> String {
    let span = node.span();
    source[span.start.offset..span.end.offset].to_owned()
}

fn push_text(pieces: &mut Vec<Piece>, text: String) {
    if let Some(Piece::Text(last)) = pieces.last_mut() {
        last.push_str(&text);
    } else {
        pieces.push(Piece::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str) -> Piece {
        Piece::Placeholder {
            name: name.to_owned(),
            greedy: false,
        }
    }

    #[test]
    fn detects_regex_segments() {
        assert!(is_regex_segment("(?P<id>\\d+)"));
        assert!(is_regex_segment("v(?:[0-9])"));
        assert!(!is_regex_segment("v[0-9]"));
        assert!(!is_regex_segment("a.*"));
        assert!(!is_regex_segment("a+b"));
        assert!(!is_regex_segment("$5"));
        assert!(!is_regex_segment(r"\(x\)"));
        assert!(!is_regex_segment("index.html"));
        assert!(!is_regex_segment("users"));
    }

    #[test]
    fn validates_param_names() {
        assert!(is_valid_param_name("userId"));
        assert!(is_valid_param_name("_id2"));
        assert!(!is_valid_param_name(""));
        assert!(!is_valid_param_name("2id"));
        assert!(!is_valid_param_name("user-id"));
    }

    #[test]
    fn compiles_named_groups() {
        let seg = generate_segment_regex("/p", r"(?P<year>\d{4})-(?P<month>\d{2})\.json").unwrap();

        assert_eq!(seg.names, vec!["year", "month"]);
        assert_eq!(
            seg.pieces,
            vec![
                placeholder("year"),
                Piece::Text("-".to_owned()),
                placeholder("month"),
                Piece::Text(".json".to_owned()),
            ]
        );
        assert!(seg.is_match("2024-05.json"));
        assert!(!seg.is_match("2024-05.jsonx"));
        assert!(!seg.is_match("x2024-05.json"));
    }

    #[test]
    fn substitutes_by_position_not_by_text() {
        // The text of `a` is a substring of the text of `ab`.
        let seg = generate_segment_regex("/p", "(?P<a>x)(?P<ab>xx)").unwrap();

        assert_eq!(seg.pieces, vec![placeholder("a"), placeholder("ab")]);
    }

    #[test]
    fn accepts_short_group_syntax_and_non_capturing_groups() {
        let seg = generate_segment_regex("/p", "(?:item-)(?<id>[0-9]+)").unwrap();

        assert_eq!(seg.names, vec!["id"]);
        assert_eq!(seg.pieces, vec![Piece::Text("item-".to_owned()), placeholder("id")]);
    }

    #[test]
    fn keeps_ambiguous_constructs_opaque() {
        let opaque = |text: &str| Piece::Opaque(text.to_owned());

        let seg = generate_segment_regex("/p", "(?P<a>x+)|(?P<b>y+)").unwrap();
        assert_eq!(seg.pieces, vec![opaque("(?P<a>x+)|(?P<b>y+)")]);

        let seg = generate_segment_regex("/p", r"(?i)user-(?P<id>\d+)").unwrap();
        assert_eq!(
            seg.pieces,
            vec![opaque("(?i)"), Piece::Text("user-".to_owned()), placeholder("id")]
        );

        let seg = generate_segment_regex("/p", r"n(?P<id>\d+)?").unwrap();
        assert_eq!(seg.pieces, vec![Piece::Text("n".to_owned()), opaque(r"(?P<id>\d+)?")]);

        let seg = generate_segment_regex("/p", r"\d(?P<id>x)").unwrap();
        assert_eq!(seg.pieces, vec![opaque(r"\d"), placeholder("id")]);
    }

    #[test]
    fn skips_anchors() {
        let seg = generate_segment_regex("/p", r"^(?P<id>\d+)$").unwrap();
        assert_eq!(seg.pieces, vec![placeholder("id")]);
    }

    #[test]
    fn rejects_unnamed_groups() {
        let err = generate_segment_regex("/(.*)", "(.*)").unwrap_err();
        assert_eq!(
            err,
            Error::UnnamedCapture {
                pattern: "/(.*)".to_owned()
            }
        );

        assert!(generate_segment_regex("/p", "(?P<a>x)(y)").is_err());
    }

    #[test]
    fn rejects_invalid_regex() {
        assert!(matches!(
            generate_segment_regex("/p", "(?P<a>x"),
            Err(Error::InvalidPattern { .. })
        ));
    }
}
