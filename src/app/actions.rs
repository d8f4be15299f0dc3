//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays free of Zellij calls; it returns a `Vec<Action>`
//! and the shim in `main.rs` performs them in order.

use crate::source::CatalogRequest;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane (the user pressed `q`).
    CloseFocus,

    /// Issues the catalog `GET` through the host.
    ///
    /// The response comes back as a `WebRequestResult` event tagged with
    /// [`CATALOG_CONTEXT_KEY`].
    FetchCatalog(CatalogRequest),
}

/// Context key marking web responses that belong to the catalog request.
pub const CATALOG_CONTEXT_KEY: &str = "country_list_request";

/// Context value paired with [`CATALOG_CONTEXT_KEY`].
pub const CATALOG_CONTEXT_VALUE: &str = "catalog";
