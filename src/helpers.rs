use crate::constants::PATH_SEPARATOR;
use percent_encoding::percent_decode_str;
use std::ops::Range;
use std::str::Utf8Error;

pub(crate) fn percent_decode_request_path(val: &str) -> Result<String, Utf8Error> {
    percent_decode_str(val).decode_utf8().map(|val| val.to_string())
}

/// Normalizes a pattern or prefix to exactly one leading separator and no trailing one.
/// The root is `"/"`.
pub(crate) fn normalize_path(path: &str) -> String {
    format!("{}{}", PATH_SEPARATOR, path.trim_matches(PATH_SEPARATOR))
}

/// Joins a mount prefix and a child path, both already normalized.
pub(crate) fn join_paths(prefix: &str, path: &str) -> String {
    match (prefix, path) {
        ("/", p) => p.to_owned(),
        (p, "/") => p.to_owned(),
        (p, q) => format!("{}{}", p, q),
    }
}

/// Splits a request path into segment spans, dropping one leading and one trailing empty segment.
/// `"//"` is therefore one empty segment, not the root.
pub(crate) fn split_path_spans(path: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut seg_start = 0;

    for (idx, ch) in path.char_indices() {
        if ch == PATH_SEPARATOR {
            spans.push(seg_start..idx);
            seg_start = idx + 1;
        }
    }
    spans.push(seg_start..path.len());

    if path.starts_with(PATH_SEPARATOR) {
        spans.remove(0);
    }
    if spans.last().map_or(false, |span| span.is_empty()) {
        spans.pop();
    }

    spans
}
