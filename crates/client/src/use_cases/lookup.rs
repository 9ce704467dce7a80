//! Lookup vehicle use case.
//!
//! Validates the VIN, decodes it, then fetches recalls for the decoded
//! vehicle. Drives the page through Loading into ResultsShown or ErrorShown.

use std::sync::Arc;

use vinlookup_domain::{DomainError, RecallList, VehicleRecord, Vin};

use crate::infrastructure::ports::{DecodePort, RecallPort, ServiceError};
use crate::page::{PageState, GENERIC_ERROR_MESSAGE, INVALID_VIN_MESSAGE};

/// Result of a lookup that got past the decode stage.
#[derive(Debug)]
pub struct LookupResult {
    /// The normalized VIN used for both requests
    pub vin: Vin,
    /// The decoded vehicle
    pub vehicle: VehicleRecord,
    /// Recalls, or `None` if the recall lookup failed
    pub recalls: Option<RecallList>,
}

/// Lookup vehicle use case.
///
/// Orchestrates: input validation, decode (fatal on failure), recall lookup
/// (isolated on failure).
pub struct LookupVehicle {
    decode: Arc<dyn DecodePort>,
    recall: Arc<dyn RecallPort>,
}

impl LookupVehicle {
    pub fn new(decode: Arc<dyn DecodePort>, recall: Arc<dyn RecallPort>) -> Self {
        Self { decode, recall }
    }

    /// Execute one form submission against `page`.
    ///
    /// # Arguments
    /// * `input` - Raw VIN as typed by the user
    /// * `page` - Page state updated as the lookup progresses
    ///
    /// # Returns
    /// * `Ok(LookupResult)` - Vehicle decoded; recalls may still be unavailable
    /// * `Err(LookupError)` - Input rejected or decode failed; page shows the error
    pub async fn execute(
        &self,
        input: &str,
        page: &mut PageState,
    ) -> Result<LookupResult, LookupError> {
        // 1. Validate before touching the network
        let vin = match Vin::parse(input) {
            Ok(vin) => vin,
            Err(e) => {
                tracing::warn!(input = %input.trim(), error = %e, "Rejected VIN input");
                page.reject_input(INVALID_VIN_MESSAGE);
                return Err(LookupError::InvalidInput(e));
            }
        };

        tracing::info!(vin = %vin, "Looking up vehicle");

        // 2. Loading
        page.begin_lookup();

        // 3. Decode; any failure here ends the lookup
        let reply = match self.decode.decode(&vin).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(vin = %vin, error = %e, "Decode request failed");
                page.fail(GENERIC_ERROR_MESSAGE);
                return Err(LookupError::Transport(e));
            }
        };

        let vehicle = match reply.into_result() {
            Ok(vehicle) => vehicle,
            Err(message) => {
                tracing::error!(
                    vin = %vin,
                    service_message = %message,
                    "Decode service reported an error"
                );
                page.fail(message.clone());
                return Err(LookupError::Decode(message));
            }
        };

        // 4. Vehicle details are visible from here on
        page.show_vehicle(&vehicle);

        // 5. Recalls for the same VIN; failure only affects the recall section
        let recalls = match self.recall.recalls(&vin).await {
            Ok(list) => {
                tracing::debug!(vin = %vin, count = list.len(), "Recalls loaded");
                page.show_recalls(list.clone());
                Some(list)
            }
            Err(e) => {
                tracing::warn!(vin = %vin, error = %e, "Recall request failed");
                page.show_recall_unavailable();
                None
            }
        };

        tracing::info!(vin = %vin, recalls_loaded = recalls.is_some(), "Lookup complete");

        Ok(LookupResult {
            vin,
            vehicle,
            recalls,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(DomainError),
    #[error("Transport error: {0}")]
    Transport(ServiceError),
    #[error("Decode error: {0}")]
    Decode(String),
}
