//! Microsoft Graph client: transport, models and the Teams facade

// The facade covers more of the Graph surface than the CLI has commands for.
#![allow(dead_code, unused_imports)]

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod teams;
pub mod transport;

#[cfg(test)]
pub use mock::MockTransport;
pub use teams::{ArchiveOutcome, GraphContext, Teams, TeamsBuilder};
pub use transport::{HttpTransport, Transport, TransportResponse};
