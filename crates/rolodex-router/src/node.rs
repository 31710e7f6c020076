//! Segment tree used by the route table.
//!
//! Each node covers one path segment. Static children are kept sorted for
//! binary search; a node has at most one parameter child. Patterns are
//! parsed once at build time, and matching walks the tree segment by
//! segment with static segments taking priority over parameter bindings.

use crate::error::TableError;
use crate::params::Params;

/// What a matching pattern resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    /// A named view route; resolution yields this name plus any extracted
    /// parameters.
    View { name: String },
    /// A redirect entry; resolution forwards to the named view route with
    /// an empty parameter set.
    Redirect { to: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentKind {
    Static,
    Param(String),
}

/// Parses a path pattern into segments.
///
/// Segments wrapped in braces (`{id}`) become parameter bindings; anything
/// else is matched literally. Empty segments are filtered, so `/contacts`
/// and `/contacts/` parse identically.
fn parse_pattern(pattern: &str) -> Result<Vec<(String, SegmentKind)>, TableError> {
    let invalid = |reason: &str| TableError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if !pattern.starts_with('/') {
        return Err(invalid("pattern must start with '/'"));
    }

    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            if let Some(name) = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                if name.is_empty() {
                    return Err(invalid("empty parameter name"));
                }
                if name.contains(['{', '}', '/']) {
                    return Err(invalid("malformed parameter name"));
                }
                Ok((segment.to_string(), SegmentKind::Param(name.to_string())))
            } else if segment.contains(['{', '}']) {
                Err(invalid("braces are only allowed as a full segment"))
            } else {
                Ok((segment.to_string(), SegmentKind::Static))
            }
        })
        .collect()
}

/// A node in the segment tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    segment: String,
    kind: SegmentKind,
    target: Option<Target>,
    /// Static children, sorted by segment for binary search.
    static_children: Vec<Node>,
    /// Parameter child; at most one per node.
    param_child: Option<Box<Node>>,
}

impl Node {
    /// Creates the root of an empty tree.
    pub(crate) fn root() -> Self {
        Self::new_static("")
    }

    fn new_static(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            kind: SegmentKind::Static,
            target: None,
            static_children: Vec::new(),
            param_child: None,
        }
    }

    fn new_param(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            segment: format!("{{{name}}}"),
            kind: SegmentKind::Param(name.clone()),
            target: None,
            static_children: Vec::new(),
            param_child: None,
        }
    }

    /// Inserts a pattern into the tree.
    pub(crate) fn insert(&mut self, pattern: &str, target: Target) -> Result<(), TableError> {
        let segments = parse_pattern(pattern)?;
        self.insert_segments(pattern, &segments, target)
    }

    fn insert_segments(
        &mut self,
        pattern: &str,
        segments: &[(String, SegmentKind)],
        target: Target,
    ) -> Result<(), TableError> {
        let Some((segment, kind)) = segments.first() else {
            if self.target.is_some() {
                return Err(TableError::DuplicatePattern {
                    pattern: pattern.to_string(),
                });
            }
            self.target = Some(target);
            return Ok(());
        };
        let remaining = &segments[1..];

        match kind {
            SegmentKind::Static => {
                if let Some(child) = self
                    .static_children
                    .iter_mut()
                    .find(|c| c.segment == *segment)
                {
                    return child.insert_segments(pattern, remaining, target);
                }
                let mut child = Node::new_static(segment.as_str());
                child.insert_segments(pattern, remaining, target)?;
                self.static_children.push(child);
                // Keep sorted for binary search during matching.
                self.static_children
                    .sort_by(|a, b| a.segment.cmp(&b.segment));
                Ok(())
            }
            SegmentKind::Param(name) => {
                match &mut self.param_child {
                    Some(child) => {
                        // A position can only bind one parameter name;
                        // `/contacts/{id}` and `/contacts/{key}` would make
                        // extraction ambiguous.
                        if child.kind != SegmentKind::Param(name.clone()) {
                            return Err(TableError::InvalidPattern {
                                pattern: pattern.to_string(),
                                reason: format!(
                                    "conflicting parameter name at segment {segment}"
                                ),
                            });
                        }
                    }
                    None => self.param_child = Some(Box::new(Node::new_param(name.as_str()))),
                }
                self.param_child
                    .as_mut()
                    .map_or(Ok(()), |child| {
                        child.insert_segments(pattern, remaining, target)
                    })
            }
        }
    }

    /// Matches path segments against the tree, filling `params` with any
    /// parameter bindings along the matched branch.
    ///
    /// Static children are tried first; a failed parameter branch is
    /// backtracked so `params` only ever reflects the returned match.
    pub(crate) fn find<'n>(&'n self, segments: &[&str], params: &mut Params) -> Option<&'n Target> {
        let Some((head, rest)) = segments.split_first() else {
            return self.target.as_ref();
        };

        if let Some(child) = self.static_child(head) {
            if let Some(target) = child.find(rest, params) {
                return Some(target);
            }
        }

        if let Some(child) = &self.param_child {
            if let SegmentKind::Param(name) = &child.kind {
                params.push(name.clone(), (*head).to_string());
                if let Some(target) = child.find(rest, params) {
                    return Some(target);
                }
                params.pop();
            }
        }

        None
    }

    fn static_child(&self, segment: &str) -> Option<&Node> {
        self.static_children
            .binary_search_by(|c| c.segment.as_str().cmp(segment))
            .ok()
            .map(|i| &self.static_children[i])
    }
}
