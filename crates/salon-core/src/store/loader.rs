//! CSV row parsing for the inventory source.

use crate::config::SanitizeConfig;
use crate::models::VehicleRecord;
use crate::sanitize::sanitize_string;
use csv::StringRecord;
use thiserror::Error;

/// Number of columns every inventory row must have.
pub const COLUMN_COUNT: usize = 18;

/// Manufacturers whose name spans two title tokens, keyed by the first word.
const TWO_WORD_BRANDS: &[(&str, &str)] = &[
    ("alfa", "Alfa Romeo"),
    ("aston", "Aston Martin"),
    ("land", "Land Rover"),
    ("rolls", "Rolls Royce"),
];

/// Why a single row was skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} columns, got {0}", expected = COLUMN_COUNT)]
    ColumnCount(usize),

    #[error("invalid {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Parse one inventory row into a sanitized record.
pub fn parse_record(row: &StringRecord) -> Result<VehicleRecord, RowError> {
    if row.len() != COLUMN_COUNT {
        return Err(RowError::ColumnCount(row.len()));
    }

    let col = |i: usize| row.get(i).unwrap_or_default();
    let text = |i: usize| sanitize_string(col(i), SanitizeConfig::MAX_TEXT_LENGTH);

    let id = parse_int(col(0), "id")?;
    let price_chf = parse_int(col(2), "price")?;
    let mileage_km = parse_int(col(6), "mileage")?;
    let power_hp = parse_int(col(10), "power HP")?;
    let power_kw = parse_int(col(11), "power KW")?;

    let title = text(1);
    let brand = derive_brand(&title);

    Ok(VehicleRecord {
        id,
        title,
        brand,
        price_chf,
        leasing_text: text(3),
        first_registration: text(4),
        car_type: text(5),
        mileage_km,
        transmission: text(7),
        fuel: text(8),
        drive: text(9),
        power_hp,
        power_kw,
        mfk: parse_bool(col(12)),
        warranty: parse_bool(col(13)),
        warranty_text: text(14),
        equipment: split_equipment(col(15)),
        description: text(16),
        image_urls: filter_image_urls(col(17)),
    })
}

fn parse_int(value: &str, field: &'static str) -> Result<i64, RowError> {
    value.parse().map_err(|_| RowError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Only a case-insensitive `true` counts as true.
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Derive the manufacturer from a sanitized title.
///
/// The first whitespace-delimited token is the brand, except for known
/// two-word manufacturers where the canonical two-word name is used.
pub fn derive_brand(title: &str) -> String {
    let Some(first) = title.split_whitespace().next() else {
        return String::new();
    };

    TWO_WORD_BRANDS
        .iter()
        .find(|(prefix, _)| first.eq_ignore_ascii_case(prefix))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| first.to_string())
}

/// Split a `;`-delimited equipment list, sanitizing each entry and dropping
/// entries that end up empty.
pub fn split_equipment(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|item| sanitize_string(item, SanitizeConfig::MAX_TEXT_LENGTH))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Split a `;`-delimited image list, keeping only `http://` and `https://` URLs.
///
/// URLs are not HTML-escaped.
pub fn filter_image_urls(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|url| url.starts_with("https://") || url.starts_with("http://"))
        .map(String::from)
        .collect()
}
