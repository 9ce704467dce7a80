//! Use cases.

mod lookup;

pub use lookup::{LookupError, LookupResult, LookupVehicle};
