//! Load phase of the plugin.
//!
//! The catalog is requested once, after Zellij grants network access. The
//! phase decides whether a fetch may still be issued and which empty-state
//! message the table shows.
//!
//! ```text
//! Pending ──(FetchCatalog issued)──▶ Fetching ──(response handled)──▶ Settled
//! ```

/// Where the single catalog fetch stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Waiting for network permission; no request issued yet.
    #[default]
    Pending,

    /// Request handed to the host, response not yet received.
    Fetching,

    /// Response handled, successfully or not. Terminal.
    Settled,
}

impl LoadPhase {
    /// Whether the table is still waiting for data.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Pending | Self::Fetching)
    }
}
