//! Page state for a single lookup form.
//!
//! `PageState` replaces shared element references: the orchestrator owns a
//! `&mut PageState` for the duration of one submission and mutates it only
//! through the transition methods below. Renderers read it.

use vinlookup_domain::{RecallList, RecallRecord, VehicleRecord};

use super::view::{vehicle_rows, DetailRow};

/// Shown when the input does not normalize to 17 characters.
pub const INVALID_VIN_MESSAGE: &str = "Please enter a valid 17-digit VIN.";

/// Shown when the decode service cannot be reached or its reply is unusable.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Shown in the recall section when the vehicle has no recalls.
pub const NO_RECALLS_MESSAGE: &str = "No open recalls found for this vehicle.";

/// Shown in the recall section when the recall lookup fails.
pub const RECALL_UNAVAILABLE_MESSAGE: &str = "Could not load recall information.";

/// Observable display state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ResultsShown,
    ErrorShown,
}

/// Contents of the recall section inside the results container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecallSection {
    /// Recall lookup not finished yet
    #[default]
    Pending,
    /// Lookup succeeded with zero recalls
    Empty,
    /// Recalls in delivery order
    Recalls(Vec<RecallRecord>),
    /// Lookup failed; vehicle details stay visible
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    spinner_visible: bool,
    results_visible: bool,
    error: Option<String>,
    vehicle_details: Vec<DetailRow>,
    recall_section: RecallSection,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived display state.
    ///
    /// The spinner stays up while recalls load even though vehicle details are
    /// already visible, so Loading wins over ResultsShown.
    pub fn ui_state(&self) -> UiState {
        if self.error.is_some() {
            UiState::ErrorShown
        } else if self.spinner_visible {
            UiState::Loading
        } else if self.results_visible {
            UiState::ResultsShown
        } else {
            UiState::Idle
        }
    }

    pub fn spinner_visible(&self) -> bool {
        self.spinner_visible
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn vehicle_details(&self) -> &[DetailRow] {
        &self.vehicle_details
    }

    pub fn recall_section(&self) -> &RecallSection {
        &self.recall_section
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Input rejected before any request: show the message, hide results.
    pub fn reject_input(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.results_visible = false;
    }

    /// Start a lookup: hide previous results and errors, show the spinner.
    ///
    /// Content from the previous submission is discarded here so stale recalls
    /// never appear next to a new vehicle.
    pub fn begin_lookup(&mut self) {
        self.results_visible = false;
        self.error = None;
        self.spinner_visible = true;
        self.vehicle_details.clear();
        self.recall_section = RecallSection::Pending;
    }

    /// Fatal failure: hide the spinner and results, show the message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.spinner_visible = false;
        self.error = Some(message.into());
        self.results_visible = false;
    }

    /// Decode succeeded: fill vehicle details and reveal the results container.
    pub fn show_vehicle(&mut self, vehicle: &VehicleRecord) {
        self.vehicle_details = vehicle_rows(vehicle);
        self.results_visible = true;
    }

    /// Recall lookup succeeded: fill the recall section and hide the spinner.
    pub fn show_recalls(&mut self, recalls: RecallList) {
        self.spinner_visible = false;
        self.recall_section = if recalls.is_empty() {
            RecallSection::Empty
        } else {
            RecallSection::Recalls(recalls.results)
        };
    }

    /// Recall lookup failed: degrade the recall section only.
    pub fn show_recall_unavailable(&mut self) {
        self.spinner_visible = false;
        self.recall_section = RecallSection::Unavailable;
    }
}
