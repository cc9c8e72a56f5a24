use crate::constants::PATH_SEPARATOR;
use crate::route::segment::Segment;
use crate::types::RouteParams;
use crate::Error;

/// A piece of one template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Text(String),
    Placeholder { name: String, greedy: bool },
    // Regex source with no single rendering.
    Opaque(String),
}

/// The reversible form of a route pattern: literal text and placeholders, segment by segment,
/// in the order their values must be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Vec<Piece>>,
}

impl Template {
    pub(crate) fn from_segments(segments: &[Segment]) -> Template {
        Template {
            segments: segments.iter().map(Segment::pieces).collect(),
        }
    }

    /// Returns this template mounted below `prefix`.
    pub(crate) fn prefixed(&self, prefix: &Template) -> Template {
        Template {
            segments: prefix.segments.iter().chain(self.segments.iter()).cloned().collect(),
        }
    }

    /// Substitutes each placeholder with the value supplied under its name.
    pub(crate) fn render(&self, params: &RouteParams) -> crate::Result<String> {
        self.render_with(|name| params.get(name))
    }

    /// Substitutes placeholders with `values` strictly in declaration order.
    pub(crate) fn render_positional<S: AsRef<str>>(&self, values: &[S]) -> crate::Result<String> {
        let mut values = values.iter();
        self.render_with(|_| values.next().map(|value| value.as_ref()))
    }

    // A greedy placeholder takes exactly one value and ends the path: whatever follows it in the
    // template is not rendered.
    fn render_with<'v, F>(&self, mut value_of: F) -> crate::Result<String>
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        let mut path = String::new();

        for segment in self.segments.iter() {
            path.push(PATH_SEPARATOR);

            for piece in segment.iter() {
                match piece {
                    Piece::Text(text) => path.push_str(text),
                    Piece::Opaque(source) => {
                        return Err(Error::NotReversible {
                            segment: source.clone(),
                        })
                    }
                    Piece::Placeholder { name, greedy } => {
                        let value = value_of(name).ok_or_else(|| Error::MissingParameter { name: name.clone() })?;
                        path.push_str(value);

                        if *greedy {
                            return Ok(path);
                        }
                    }
                }
            }
        }

        if path.is_empty() {
            path.push(PATH_SEPARATOR);
        }

        Ok(path)
    }
}
