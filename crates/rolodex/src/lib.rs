//! # Rolodex
//!
//! Navigation and domain core for a contacts management application:
//!
//! - **Routing** - an immutable route table resolving URL paths to named
//!   views with path parameter extraction and redirects
//! - **Contacts** - the `Contact`/`ContactInput` record types and an
//!   in-memory store with create/list/get/update/delete
//! - **Configuration** - layered typed configuration (defaults → file →
//!   environment)
//! - **Logging** - structured `tracing` output, JSON or pretty
//!
//! ## Quick Start
//!
//! ```rust
//! use rolodex::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RolodexConfig::default();
//! let navigator = Navigator::new(&config.navigation)?;
//!
//! match navigator.resolve("/app/contacts/42")? {
//!     View::ContactDetail { id } => assert_eq!(id, "42"),
//!     View::ContactList => unreachable!("detail paths resolve to the detail view"),
//! }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/rolodex/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export member crates
pub use rolodex_config as config;
pub use rolodex_model as model;
pub use rolodex_router as router;
pub use rolodex_store as store;

mod app;
pub mod logging;

pub use app::{contact_routes, Navigator, View, CONTACT_DETAIL, CONTACT_LIST};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use rolodex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{contact_routes, Navigator, View, CONTACT_DETAIL, CONTACT_LIST};
    pub use crate::logging;

    pub use rolodex_config::{
        ConfigLoader, LogFormat, LoggingConfig, NavigationConfig, RolodexConfig,
    };
    pub use rolodex_model::{Contact, ContactId, ContactInput, ModelError};
    pub use rolodex_router::{Params, Resolution, ResolveError, RouteTable, TableError};
    pub use rolodex_store::{ContactStore, StoreError};
}
