//! Search request validation.
//!
//! Data-shape fields (text filters, numeric bounds) are rejected when they are
//! out of bounds. Pagination fields are never rejected: out-of-range values
//! are reset to their defaults.

use crate::config::{SanitizeConfig, SearchConfig, ValidationConfig};
use crate::models::{SearchQuery, ValidationError};
use crate::sanitize::{is_allowed_text, sanitize_string};

/// Validate a search request and sanitize its textual fields in place.
///
/// Every textual field that is present is replaced with its sanitized form,
/// including fields that failed validation. All failures are collected; a
/// field can contribute more than one.
pub fn validate(query: &mut SearchQuery) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in query.text_fields_mut() {
        let Some(raw) = value.as_mut() else {
            continue;
        };

        if raw.chars().count() > SanitizeConfig::MAX_QUERY_LENGTH {
            errors.push(ValidationError::new(
                field,
                format!(
                    "must not exceed {} characters",
                    SanitizeConfig::MAX_QUERY_LENGTH
                ),
            ));
        }
        if !is_allowed_text(raw.as_str()) {
            errors.push(ValidationError::new(field, "contains invalid characters"));
        }

        *raw = sanitize_string(raw.as_str(), SanitizeConfig::MAX_QUERY_LENGTH);
    }

    let bounds = [
        ("min_price", query.min_price, ValidationConfig::PRICE_RANGE),
        ("max_price", query.max_price, ValidationConfig::PRICE_RANGE),
        ("min_mileage", query.min_mileage, ValidationConfig::MILEAGE_RANGE),
        ("max_mileage", query.max_mileage, ValidationConfig::MILEAGE_RANGE),
        ("min_power", query.min_power, ValidationConfig::POWER_RANGE),
        ("max_power", query.max_power, ValidationConfig::POWER_RANGE),
    ];
    for (field, value, (low, high)) in bounds {
        if let Some(v) = value {
            if v < low || v > high {
                errors.push(ValidationError::new(
                    field,
                    format!("must be between {} and {}", low, high),
                ));
            }
        }
    }

    if query.limit <= 0 || query.limit > SearchConfig::MAX_LIMIT {
        query.limit = SearchConfig::DEFAULT_LIMIT;
    }
    if query.offset < 0 || query.offset > SearchConfig::MAX_OFFSET {
        query.offset = SearchConfig::DEFAULT_OFFSET;
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
