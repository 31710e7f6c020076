//! Route table and path resolver for the Rolodex contacts application.
//!
//! This crate maps URL paths to named views. Routes are declared once, up
//! front, and compiled into an immutable [`RouteTable`]; resolution is a
//! pure lookup against a segment tree with no side effects and no shared
//! mutable state.
//!
//! # Features
//!
//! - **Named view routes**: each route resolves to a view name the
//!   embedding application renders (`/contacts` → `contact-list`)
//! - **Path parameters**: named placeholder segments (`/contacts/{id}`)
//!   bound to the corresponding request path segment
//! - **Redirect entries**: a pattern that forwards resolution to another
//!   named route without extracting parameters (`/` → `contact-list`)
//! - **Base path mounting**: the whole table can be mounted under a fixed
//!   application root segment such as `/app`
//! - **Explicit misses**: an unmatched path is a typed
//!   [`ResolveError::NotFound`], never a silent fallback
//!
//! # Example
//!
//! ```rust
//! use rolodex_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .base_path("/app")
//!     .route("contact-list", "/contacts")
//!     .route("contact-detail", "/contacts/{id}")
//!     .redirect("/", "contact-list")
//!     .build()
//!     .unwrap();
//!
//! // The root path redirects to the list view, without parameters.
//! let hit = table.resolve("/app/").unwrap();
//! assert_eq!(hit.view, "contact-list");
//! assert!(hit.params.is_empty());
//!
//! // Parameter segments bind the actual path segment value.
//! let hit = table.resolve("/app/contacts/42").unwrap();
//! assert_eq!(hit.view, "contact-detail");
//! assert_eq!(hit.params.get("id"), Some("42"));
//! ```
//!
//! # Matching rules
//!
//! Paths are split on `/` and empty segments are filtered, so trailing
//! slashes never matter. When both a static segment and a parameter
//! segment could match, the static segment wins. Everything else is a
//! miss, including paths that extend past a registered pattern
//! (`/contacts/42/extra`).

mod error;
mod node;
mod params;
mod table;

pub use error::{ResolveError, TableError};
pub use params::Params;
pub use table::{Resolution, RouteTable, RouteTableBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts_table() -> RouteTable {
        RouteTable::builder()
            .base_path("/app")
            .route("contact-list", "/contacts")
            .route("contact-detail", "/contacts/{id}")
            .redirect("/", "contact-list")
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_redirects_to_list() {
        let table = contacts_table();
        let hit = table.resolve("/app").unwrap();
        assert_eq!(hit.view, "contact-list");
        assert!(hit.params.is_empty());
    }

    #[test]
    fn test_list_route() {
        let table = contacts_table();
        let hit = table.resolve("/app/contacts").unwrap();
        assert_eq!(hit.view, "contact-list");
        assert!(hit.params.is_empty());
    }

    #[test]
    fn test_detail_route_binds_id() {
        let table = contacts_table();
        let hit = table.resolve("/app/contacts/42").unwrap();
        assert_eq!(hit.view, "contact-detail");
        assert_eq!(hit.params.get("id"), Some("42"));
    }

    #[test]
    fn test_non_numeric_id_is_not_rejected() {
        // Identifier format is not validated at the routing layer.
        let table = contacts_table();
        let hit = table.resolve("/app/contacts/abc").unwrap();
        assert_eq!(hit.view, "contact-detail");
        assert_eq!(hit.params.get("id"), Some("abc"));
    }

    #[test]
    fn test_path_outside_base_is_not_found() {
        let table = contacts_table();
        let err = table.resolve("/contacts").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                path: "/contacts".to_string()
            }
        );
    }

    #[test]
    fn test_overlong_path_is_not_found() {
        let table = contacts_table();
        assert!(table.resolve("/app/contacts/42/extra").is_err());
    }
}
