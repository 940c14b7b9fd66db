//! Clients for external services

pub mod summary_client;

pub use summary_client::{HttpTransport, SummaryClient, SummaryTransport};
