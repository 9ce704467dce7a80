//! Decoded vehicle attributes
//!
//! The decode service returns a flat JSON object. Every attribute is optional
//! and may arrive as either a string or a number. A failed decode is signalled
//! in-band through `ErrorCode` / `Message` on the same object.

use serde::Deserialize;
use std::fmt;

/// Message shown when the service reports an error without a usable message.
pub const DECODE_FALLBACK_MESSAGE: &str = "Could not decode VIN.";

/// A single attribute value as delivered by the decode service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Blank values render as a placeholder: empty text or numeric zero.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0.0,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Vehicle attributes returned by a successful decode
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleRecord {
    #[serde(default)]
    pub make: Option<FieldValue>,
    #[serde(default)]
    pub model: Option<FieldValue>,
    #[serde(default)]
    pub model_year: Option<FieldValue>,
    #[serde(default)]
    pub body_class: Option<FieldValue>,
    #[serde(default)]
    pub vehicle_type: Option<FieldValue>,
    #[serde(default)]
    pub engine_cylinders: Option<FieldValue>,
    #[serde(default)]
    pub displacement_l: Option<FieldValue>,
    #[serde(default)]
    pub fuel_type_primary: Option<FieldValue>,
    #[serde(default)]
    pub drive_type: Option<FieldValue>,
    #[serde(default)]
    pub transmission_style: Option<FieldValue>,
    #[serde(default)]
    pub plant_city: Option<FieldValue>,
    #[serde(default)]
    pub plant_state: Option<FieldValue>,
    #[serde(default)]
    pub plant_country: Option<FieldValue>,
}

impl VehicleRecord {
    /// Plant location as "city, state, country".
    ///
    /// Missing parts become empty segments; separators are always kept.
    pub fn manufactured_in(&self) -> String {
        let part = |v: &Option<FieldValue>| v.as_ref().map(|v| v.to_string()).unwrap_or_default();
        format!(
            "{}, {}, {}",
            part(&self.plant_city),
            part(&self.plant_state),
            part(&self.plant_country)
        )
    }
}

/// Raw decode service reply: vehicle attributes plus the in-band error fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DecodeReply {
    #[serde(flatten)]
    pub vehicle: VehicleRecord,
    #[serde(rename = "ErrorCode", default)]
    pub error_code: Option<FieldValue>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl DecodeReply {
    /// Whether the reply carries an error code other than `"0"` / `0`.
    pub fn is_error(&self) -> bool {
        match &self.error_code {
            Some(FieldValue::Text(code)) => !code.is_empty() && code != "0",
            Some(FieldValue::Number(code)) => *code != 0.0,
            None => false,
        }
    }

    /// Split the reply into the vehicle record or the message to surface.
    pub fn into_result(self) -> Result<VehicleRecord, String> {
        if !self.is_error() {
            return Ok(self.vehicle);
        }
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DECODE_FALLBACK_MESSAGE.to_string());
        Err(message)
    }
}
