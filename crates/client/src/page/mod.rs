//! Page model and rendering.

pub mod render;
pub mod state;
pub mod view;

pub use render::{render_html, render_text};
pub use state::{
    PageState, RecallSection, UiState, GENERIC_ERROR_MESSAGE, INVALID_VIN_MESSAGE,
    NO_RECALLS_MESSAGE, RECALL_UNAVAILABLE_MESSAGE,
};
pub use view::{DetailRow, PLACEHOLDER};
