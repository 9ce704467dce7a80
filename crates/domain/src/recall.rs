//! Safety recall records

use serde::{Deserialize, Deserializer};

use crate::vehicle::FieldValue;

/// One open safety recall campaign for a vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecallRecord {
    #[serde(rename = "Component", default, deserialize_with = "text_or_empty")]
    pub component: String,
    #[serde(
        rename = "NHTSACampaignNumber",
        default,
        deserialize_with = "text_or_empty"
    )]
    pub campaign_number: String,
    #[serde(
        rename = "ReportReceivedDate",
        default,
        deserialize_with = "text_or_empty"
    )]
    pub report_received_date: String,
    #[serde(rename = "Summary", default, deserialize_with = "text_or_empty")]
    pub summary: String,
}

/// Recall service reply. `Results` is required; order is kept as delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecallList {
    #[serde(rename = "Results")]
    pub results: Vec<RecallRecord>,
}

impl RecallList {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Any scalar a recall field may arrive as.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecallField {
    Value(FieldValue),
    Flag(bool),
}

/// Accept any scalar and keep its text form; null becomes empty.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RecallField>::deserialize(deserializer)? {
        Some(RecallField::Value(value)) => value.to_string(),
        Some(RecallField::Flag(flag)) => flag.to_string(),
        None => String::new(),
    })
}
