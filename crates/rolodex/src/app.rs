//! Contacts application wiring.
//!
//! Declares the application's route table and the typed [`View`] layer on
//! top of the generic resolver.

use std::fmt;

use tracing::{debug, warn};

use rolodex_config::NavigationConfig;
use rolodex_router::{Resolution, ResolveError, RouteTable, TableError};

/// Name of the contact list view route.
pub const CONTACT_LIST: &str = "contact-list";

/// Name of the contact detail view route.
pub const CONTACT_DETAIL: &str = "contact-detail";

/// Builds the contacts route table under the configured base path:
///
/// | Pattern          | Entry                       |
/// |------------------|-----------------------------|
/// | `/`              | redirect → `contact-list`   |
/// | `/contacts`      | view route `contact-list`   |
/// | `/contacts/{id}` | view route `contact-detail` |
pub fn contact_routes(navigation: &NavigationConfig) -> Result<RouteTable, TableError> {
    RouteTable::builder()
        .base_path(navigation.base_path.clone())
        .route(CONTACT_LIST, "/contacts")
        .route(CONTACT_DETAIL, "/contacts/{id}")
        .redirect("/", CONTACT_LIST)
        .build()
}

/// A resolved application view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The contact list; takes no parameters.
    ContactList,
    /// The detail view for one contact.
    ///
    /// The identifier is handed through as the raw path segment; its
    /// format is not validated at the routing layer.
    ContactDetail {
        /// Raw `id` path segment.
        id: String,
    },
}

impl View {
    /// Returns the route name this view was resolved from.
    #[must_use]
    pub fn route_name(&self) -> &'static str {
        match self {
            Self::ContactList => CONTACT_LIST,
            Self::ContactDetail { .. } => CONTACT_DETAIL,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContactList => f.write_str(CONTACT_LIST),
            Self::ContactDetail { id } => write!(f, "{CONTACT_DETAIL}({id})"),
        }
    }
}

/// Resolves request paths to application [`View`]s.
///
/// Owns the immutable route table built from the navigation
/// configuration; resolution itself is pure, with a `tracing` event per
/// outcome.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
}

impl Navigator {
    /// Builds a navigator for the contacts route table.
    pub fn new(navigation: &NavigationConfig) -> Result<Self, TableError> {
        Ok(Self {
            table: contact_routes(navigation)?,
        })
    }

    /// Returns the underlying route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves a path to a view.
    pub fn resolve(&self, path: &str) -> Result<View, ResolveError> {
        match self.table.resolve(path) {
            Ok(resolution) => {
                let view = Self::view_for(&resolution);
                debug!(http.path = %path, view = %view, "resolved navigation");
                Ok(view)
            }
            Err(err) => {
                warn!(http.path = %path, "no route matched");
                Err(err)
            }
        }
    }

    fn view_for(resolution: &Resolution<'_>) -> View {
        // The table registers exactly two view names; anything that is
        // not the detail view is the list view (redirects included).
        if resolution.view == CONTACT_DETAIL {
            if let Some(id) = resolution.params.get("id") {
                return View::ContactDetail { id: id.to_string() };
            }
        }
        View::ContactList
    }
}
