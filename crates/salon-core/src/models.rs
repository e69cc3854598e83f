//! Data types shared by the loader, the search engine and the HTTP layer.

use serde::{Deserialize, Serialize};

/// One vehicle listing as loaded from the inventory source.
///
/// Text fields are already sanitized (trimmed, length-capped, HTML-escaped).
/// `brand` is derived from the title, not read from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: i64,
    pub title: String,
    pub brand: String,
    pub price_chf: i64,
    pub leasing_text: String,
    pub first_registration: String,
    pub car_type: String,
    pub mileage_km: i64,
    pub transmission: String,
    pub fuel: String,
    pub drive: String,
    pub power_hp: i64,
    pub power_kw: i64,
    /// Passed the Swiss vehicle inspection (MFK).
    pub mfk: bool,
    pub warranty: bool,
    pub warranty_text: String,
    pub equipment: Vec<String>,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// Filter specification for a search request.
///
/// Numeric bounds are tri-state: `None` means "no constraint", which is not
/// the same as a bound of zero. Empty strings are treated like absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_power: Option<i64>,
    pub limit: i64,
    pub offset: i64,
}

impl SearchQuery {
    /// Mutable handles to every textual filter, paired with its JSON field name.
    pub(crate) fn text_fields_mut(&mut self) -> [(&'static str, &mut Option<String>); 6] {
        [
            ("query", &mut self.query),
            ("brand", &mut self.brand),
            ("car_type", &mut self.car_type),
            ("transmission", &mut self.transmission),
            ("fuel", &mut self.fuel),
            ("drive", &mut self.drive),
        ]
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub cars: Vec<VehicleRecord>,
    /// Number of matching records before pagination.
    pub total: usize,
    /// The limit actually applied.
    pub limit: i64,
    /// The offset actually applied.
    pub offset: i64,
}

/// Filter values observed in the inventory.
///
/// The categorical lists carry no particular order. On an empty inventory the
/// numeric ranges are inverted (`min > max`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub brands: Vec<String>,
    pub car_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub fuels: Vec<String>,
    pub drives: Vec<String>,
    pub min_price: i64,
    pub max_price: i64,
    pub min_mileage: i64,
    pub max_mileage: i64,
    pub min_power: i64,
    pub max_power: i64,
}

/// A single rejected field of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
