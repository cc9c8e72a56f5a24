use crate::constants::{GREEDY_PARAMETER_RUNE, PARAMETER_RUNE, PATH_SEPARATOR};
use crate::regex_generator::{generate_segment_regex, is_regex_segment, is_valid_param_name, SegmentRegex};
use crate::route::template::Piece;
use crate::Error;

/// One compiled segment of a route pattern.
#[derive(Debug, Clone)]
pub(crate) enum Segment {
    Literal(String),
    Param(String),
    Greedy(String),
    Regex(SegmentRegex),
}

impl Segment {
    pub(crate) fn param_names(&self) -> Vec<&str> {
        match self {
            Segment::Literal(_) => Vec::new(),
            Segment::Param(name) | Segment::Greedy(name) => vec![name.as_str()],
            Segment::Regex(re) => re.names.iter().map(String::as_str).collect(),
        }
    }

    pub(crate) fn pieces(&self) -> Vec<Piece> {
        match self {
            Segment::Literal(text) => vec![Piece::Text(text.clone())],
            Segment::Param(name) => vec![Piece::Placeholder {
                name: name.clone(),
                greedy: false,
            }],
            Segment::Greedy(name) => vec![Piece::Placeholder {
                name: name.clone(),
                greedy: true,
            }],
            Segment::Regex(re) => re.pieces.clone(),
        }
    }
}

/// Splits a normalized pattern on `/`, ignoring separators inside groups, classes and escapes.
pub(crate) fn split_pattern(pattern: &str) -> Vec<&str> {
    let body = pattern.strip_prefix(PATH_SEPARATOR).unwrap_or(pattern);
    if body.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_class = false;
    let mut escaped = false;
    let mut start = 0;

    for (idx, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => depth = depth.saturating_sub(1),
            PATH_SEPARATOR if depth == 0 && !in_class => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);

    parts
}

/// Compiles a normalized pattern into its segments.
pub(crate) fn compile_segments(pattern: &str) -> crate::Result<Vec<Segment>> {
    let parts = split_pattern(pattern);
    let last = parts.len().saturating_sub(1);
    let mut segments = Vec::with_capacity(parts.len());
    let mut declared: Vec<String> = Vec::new();

    for (idx, part) in parts.into_iter().enumerate() {
        let segment = if let Some(name) = part.strip_prefix(PARAMETER_RUNE) {
            check_param_name(pattern, name)?;
            Segment::Param(name.to_owned())
        } else if let Some(name) = part.strip_prefix(GREEDY_PARAMETER_RUNE) {
            check_param_name(pattern, name)?;
            if idx != last {
                return Err(Error::GreedyNotLast {
                    pattern: pattern.to_owned(),
                });
            }
            Segment::Greedy(name.to_owned())
        } else if is_regex_segment(part) {
            Segment::Regex(generate_segment_regex(pattern, part)?)
        } else {
            Segment::Literal(part.to_owned())
        };

        for name in segment.param_names() {
            if declared.iter().any(|n| n == name) {
                return Err(Error::DuplicateParameter {
                    pattern: pattern.to_owned(),
                    name: name.to_owned(),
                });
            }
            declared.push(name.to_owned());
        }

        segments.push(segment);
    }

    Ok(segments)
}

fn check_param_name(pattern: &str, name: &str) -> crate::Result<()> {
    if is_valid_param_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidParameterName {
            pattern: pattern.to_owned(),
            name: name.to_owned(),
        })
    }
}
