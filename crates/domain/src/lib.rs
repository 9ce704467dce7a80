//! VIN lookup domain types.
//!
//! Pure data: the normalized VIN, the decoded vehicle record, and recall
//! records. No I/O lives here.

pub mod error;
pub mod recall;
pub mod vehicle;
pub mod vin;

pub use error::DomainError;
pub use recall::{RecallList, RecallRecord};
pub use vehicle::{DecodeReply, FieldValue, VehicleRecord, DECODE_FALLBACK_MESSAGE};
pub use vin::{Vin, VIN_LENGTH};
