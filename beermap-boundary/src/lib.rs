//! Serializable, anemic data structures for the beer map dataset document.

use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::ConversionError;

/// One flat venue record of the dataset document.
///
/// The document is a JSON array of these records with camelCase field
/// names; `happyHourEnd` is a `"HH:MM"` time-of-day string.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub id             : u64,
    pub name           : String,
    pub lat            : f64,
    pub lng            : f64,
    pub cheapest_beer  : f64,
    pub happy_hour_end : String,
    pub address        : String,
    pub rating         : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description    : Option<String>,
}
