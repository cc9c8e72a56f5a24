use crate::helpers::split_path_spans;
use crate::regex_generator::SegmentRegex;
use crate::route::{Capture, Route, Segment};
use std::collections::HashMap;
use std::sync::Arc;

/// One path segment position of the route trie.
pub(crate) struct Node<H> {
    literals: HashMap<String, Node<H>>,
    // Tried in registration order.
    patterns: Vec<PatternChild<H>>,
    param: Option<Box<Node<H>>>,
    greedy: Option<Arc<Route<H>>>,
    route: Option<Arc<Route<H>>>,
}

struct PatternChild<H> {
    regex: SegmentRegex,
    node: Node<H>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Node {
            literals: HashMap::new(),
            patterns: Vec::new(),
            param: None,
            greedy: None,
            route: None,
        }
    }
}

impl<H> Node<H> {
    /// Inserts `route` at the node its segments lead to, returning the route it replaced.
    pub(crate) fn insert(&mut self, route: Arc<Route<H>>) -> Option<Arc<Route<H>>> {
        let mut node = self;

        for segment in route.segments.iter() {
            node = match segment {
                Segment::Literal(text) => node.literals.entry(text.clone()).or_default(),
                Segment::Param(_) => &mut **node.param.get_or_insert_with(Box::default),
                Segment::Regex(re) => node.pattern_child(re),
                Segment::Greedy(_) => return node.greedy.replace(Arc::clone(&route)),
            };
        }

        node.route.replace(route)
    }

    fn pattern_child(&mut self, re: &SegmentRegex) -> &mut Node<H> {
        let idx = match self.patterns.iter().position(|c| c.regex.source == re.source) {
            Some(idx) => idx,
            None => {
                if !self.patterns.is_empty() {
                    tracing::debug!(
                        segment = %re.source,
                        earlier = ?self.patterns.iter().map(|c| c.regex.source.as_str()).collect::<Vec<_>>(),
                        "Regex segment added after siblings which are tried first"
                    );
                }
                self.patterns.push(PatternChild {
                    regex: re.clone(),
                    node: Node::default(),
                });
                self.patterns.len() - 1
            }
        };

        &mut self.patterns[idx].node
    }

    /// Returns the route registered at exactly the position `segments` describe.
    pub(crate) fn find(&self, segments: &[Segment]) -> Option<&Arc<Route<H>>> {
        let mut node = self;

        for segment in segments.iter() {
            node = match segment {
                Segment::Literal(text) => node.literals.get(text)?,
                Segment::Param(_) => node.param.as_deref()?,
                Segment::Regex(re) => &node.patterns.iter().find(|c| c.regex.source == re.source)?.node,
                Segment::Greedy(_) => return node.greedy.as_ref(),
            };
        }

        node.route.as_ref()
    }

    /// Walks the trie along `path`. At each level a literal child wins over a regex child, which
    /// wins over the parameter child, which wins over a greedy route. There is no backtracking.
    pub(crate) fn resolve(&self, path: &str) -> Option<(&Route<H>, Vec<Capture>)> {
        let spans = split_path_spans(path);
        let mut captures = Vec::new();
        let mut node = self;

        for (idx, span) in spans.iter().enumerate() {
            let part = &path[span.clone()];

            if let Some(child) = node.literals.get(part) {
                node = child;
            } else if let Some(child) = node.patterns.iter().find(|c| c.regex.is_match(part)) {
                captures.push(Capture {
                    segment: idx,
                    span: span.clone(),
                });
                node = &child.node;
            } else if let Some(child) = node.param.as_deref() {
                captures.push(Capture {
                    segment: idx,
                    span: span.clone(),
                });
                node = child;
            } else if let Some(route) = node.greedy.as_deref() {
                captures.push(Capture {
                    segment: idx,
                    span: span.start..path.len(),
                });
                return Some((route, captures));
            } else {
                return None;
            }
        }

        node.route.as_deref().map(|route| (route, captures))
    }

    /// Collects every route of the trie.
    pub(crate) fn routes(&self) -> Vec<&Arc<Route<H>>> {
        let mut routes = Vec::new();
        self.collect(&mut routes);
        routes
    }

    fn collect<'a>(&'a self, routes: &mut Vec<&'a Arc<Route<H>>>) {
        routes.extend(self.route.iter());
        routes.extend(self.greedy.iter());

        for child in self.literals.values() {
            child.collect(routes);
        }
        for child in self.patterns.iter() {
            child.node.collect(routes);
        }
        if let Some(child) = self.param.as_deref() {
            child.collect(routes);
        }
    }
}
