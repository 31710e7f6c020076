//! Route table construction and resolution.
//!
//! Declarations are collected by [`RouteTableBuilder`] and validated as a
//! whole when [`build`](RouteTableBuilder::build) is called: names must be
//! unique, patterns must parse and not collide, and every redirect must
//! point at a registered view route. The resulting [`RouteTable`] is
//! immutable for the lifetime of the application.

use crate::error::{ResolveError, TableError};
use crate::node::{Node, Target};
use crate::params::Params;

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Name of the view route the path resolved to.
    pub view: &'a str,
    /// Parameters extracted from the path; empty for redirects and for
    /// routes without parameter segments.
    pub params: Params,
}

#[derive(Debug, Clone)]
enum Entry {
    View { name: String, pattern: String },
    Redirect { pattern: String, to: String },
}

/// Builder collecting route declarations for a [`RouteTable`].
///
/// Obtained from [`RouteTable::builder`]. Declaration order does not
/// affect matching priority; static segments always win over parameter
/// segments regardless of insertion order.
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder {
    base_path: Option<String>,
    entries: Vec<Entry>,
}

impl RouteTableBuilder {
    /// Mounts the whole table under a fixed prefix such as `/app`.
    ///
    /// Paths passed to [`RouteTable::resolve`] must then carry the prefix;
    /// anything outside it is a miss. Defaults to `/` (no prefix).
    #[must_use]
    pub fn base_path(mut self, prefix: impl Into<String>) -> Self {
        self.base_path = Some(prefix.into());
        self
    }

    /// Registers a named view route.
    #[must_use]
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.entries.push(Entry::View {
            name: name.into(),
            pattern: pattern.into(),
        });
        self
    }

    /// Registers a redirect from `pattern` to the view route named `to`.
    ///
    /// The redirect resolves to the target view with an empty parameter
    /// set; it never extracts parameters of its own.
    #[must_use]
    pub fn redirect(mut self, pattern: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push(Entry::Redirect {
            pattern: pattern.into(),
            to: to.into(),
        });
        self
    }

    /// Validates the declarations and builds the immutable table.
    pub fn build(self) -> Result<RouteTable, TableError> {
        let base_path = self.base_path.unwrap_or_else(|| "/".to_string());
        let base = parse_base_path(&base_path)?;

        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if let Entry::View { name, .. } = entry {
                if names.contains(&name.as_str()) {
                    return Err(TableError::DuplicateName { name: name.clone() });
                }
                names.push(name);
            }
        }

        for entry in &self.entries {
            if let Entry::Redirect { pattern, to } = entry {
                if !names.contains(&to.as_str()) {
                    return Err(TableError::UnknownRedirectTarget {
                        pattern: pattern.clone(),
                        target: to.clone(),
                    });
                }
            }
        }

        let mut root = Node::root();
        let entry_count = self.entries.len();
        for entry in self.entries {
            match entry {
                Entry::View { name, pattern } => {
                    root.insert(&pattern, Target::View { name })?;
                }
                Entry::Redirect { pattern, to } => {
                    root.insert(&pattern, Target::Redirect { to })?;
                }
            }
        }

        Ok(RouteTable {
            root,
            base,
            base_path: normalize_base_display(&base_path),
            entry_count,
        })
    }
}

/// An immutable table mapping URL paths to named views.
///
/// Built once at application startup via [`RouteTable::builder`];
/// resolution afterwards is a pure read-only lookup, so a table can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct RouteTable {
    root: Node,
    base: Vec<String>,
    base_path: String,
    entry_count: usize,
}

impl RouteTable {
    /// Starts declaring a new table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Resolves a path to a view name and its extracted parameters.
    ///
    /// The path must carry the configured base prefix. Matching a
    /// redirect entry forwards to its target view with empty parameters.
    ///
    /// Resolution is a pure function of the table and the path: the same
    /// input always yields the same result.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_>, ResolveError> {
        let not_found = || ResolveError::NotFound {
            path: path.to_string(),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < self.base.len() {
            return Err(not_found());
        }
        let (prefix, relative) = segments.split_at(self.base.len());
        if !prefix
            .iter()
            .zip(&self.base)
            .all(|(seg, base)| *seg == base.as_str())
        {
            return Err(not_found());
        }

        let mut params = Params::new();
        match self.root.find(relative, &mut params) {
            Some(Target::View { name }) => Ok(Resolution {
                view: name,
                params,
            }),
            Some(Target::Redirect { to }) => Ok(Resolution {
                view: to,
                params: Params::new(),
            }),
            None => Err(not_found()),
        }
    }

    /// Returns the base path prefix the table is mounted under.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the number of registered entries, redirects included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Returns true if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

fn parse_base_path(base_path: &str) -> Result<Vec<String>, TableError> {
    let invalid = |reason: &str| TableError::InvalidBasePath {
        base_path: base_path.to_string(),
        reason: reason.to_string(),
    };

    if !base_path.starts_with('/') {
        return Err(invalid("base path must start with '/'"));
    }
    if base_path.contains(['{', '}']) {
        return Err(invalid("base path cannot contain parameter segments"));
    }

    Ok(base_path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect())
}

fn normalize_base_display(base_path: &str) -> String {
    let trimmed = base_path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
