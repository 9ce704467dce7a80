//! Port traits for the two remote services.
//!
//! These are the only abstractions in the client. The orchestrator depends on
//! them so tests can substitute mocks for the HTTP adapter.

use async_trait::async_trait;
use vinlookup_domain::{DecodeReply, RecallList, Vin};

// =============================================================================
// Error Types
// =============================================================================

/// Failure to obtain a well-formed reply from a remote service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Service Ports
// =============================================================================

/// VIN decode service.
///
/// Returns the raw reply; in-band `ErrorCode` handling belongs to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DecodePort: Send + Sync {
    async fn decode(&self, vin: &Vin) -> Result<DecodeReply, ServiceError>;
}

/// Recall lookup service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecallPort: Send + Sync {
    async fn recalls(&self, vin: &Vin) -> Result<RecallList, ServiceError>;
}
