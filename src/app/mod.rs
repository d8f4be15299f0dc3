//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain and
//! UI layers.
//!
//! ```text
//! Key / Web Response → Event → handle_event → CountryListViewModel → Actions
//!                                                   │
//!                                                   ▼
//!                                          UIViewModel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`list`]: The country list view model (dataset, filters, sort, derived view)
//! - [`modes`]: Load phase of the catalog fetch
//! - [`state`]: Owned application state and UI view model computation

pub mod actions;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::{Action, CATALOG_CONTEXT_KEY, CATALOG_CONTEXT_VALUE};
pub use handler::{handle_event, Event};
pub use list::CountryListViewModel;
pub use modes::LoadPhase;
pub use state::AppState;
