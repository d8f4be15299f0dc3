//! User interface rendering layer with component-based architecture.
//!
//! Transforms the application state into ANSI-styled output through small
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, controls, table, footer and empty-state renderers
//! - [`helpers`]: Cursor positioning and character-aware text formatting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FilterToggle, FooterInfo, HeaderInfo, UIViewModel,
};
