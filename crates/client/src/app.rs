//! Application composition.

use std::sync::Arc;

use crate::infrastructure::{config::LookupConfig, http::HttpLookupClient};
use crate::page::PageState;
use crate::use_cases::{LookupError, LookupResult, LookupVehicle};

/// Main application state.
///
/// Wires the HTTP adapter into the lookup use case. One `App` can serve any
/// number of pages; each page is borrowed mutably for one submission at a time.
pub struct App {
    pub lookup: LookupVehicle,
}

impl App {
    pub fn new(config: &LookupConfig) -> Self {
        let http = Arc::new(HttpLookupClient::new(config));
        Self {
            lookup: LookupVehicle::new(http.clone(), http),
        }
    }

    /// Submit raw form input against `page`.
    pub async fn submit(
        &self,
        input: &str,
        page: &mut PageState,
    ) -> Result<LookupResult, LookupError> {
        self.lookup.execute(input, page).await
    }
}
