//! Error types for route table construction and resolution.

use thiserror::Error;

/// Errors detected while building a route table.
///
/// All of these are programming errors in the route declarations, so they
/// surface at startup when the table is built, never during resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two view routes were registered under the same name.
    #[error("duplicate route name: {name}")]
    DuplicateName {
        /// The name registered twice.
        name: String,
    },

    /// Two entries share the same path pattern.
    #[error("duplicate route pattern: {pattern}")]
    DuplicatePattern {
        /// The pattern registered twice.
        pattern: String,
    },

    /// A redirect entry points at a route name that was never registered.
    #[error("redirect from {pattern} targets unknown route: {target}")]
    UnknownRedirectTarget {
        /// The redirect entry's own pattern.
        pattern: String,
        /// The route name the redirect points at.
        target: String,
    },

    /// A path pattern could not be parsed.
    #[error("invalid route pattern {pattern}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// The base path prefix is malformed.
    #[error("invalid base path {base_path}: {reason}")]
    InvalidBasePath {
        /// The offending base path.
        base_path: String,
        /// Why the base path was rejected.
        reason: String,
    },
}

/// Errors produced when resolving a path against a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No entry matched the path.
    ///
    /// This also covers paths mounted outside the configured base prefix
    /// and paths extending past a registered pattern.
    #[error("no route matched path: {path}")]
    NotFound {
        /// The path as it was passed to `resolve`.
        path: String,
    },
}
