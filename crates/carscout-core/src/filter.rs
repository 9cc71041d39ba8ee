//! Search filters supplied once per run.
//!
//! Every filter except the page count is passed through to the remote query
//! as an opaque string; the endpoint does its own interpretation.

use crate::FilterError;

/// ZIP code used when the user leaves the ZIP prompt blank.
pub const DEFAULT_ZIP: &str = "90001";

/// Free-form strings exactly as collected from flags or prompts.
#[derive(Debug, Clone, Default)]
pub struct RawFilterInput {
    pub page_count: String,
    pub price_max: String,
    pub mileage_max: String,
    pub year_min: String,
    pub year_max: String,
    pub zip: String,
    pub brand: String,
    pub body_style: String,
}

/// Immutable search filter for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub page_count: u32,
    pub price_max: String,
    pub mileage_max: String,
    pub year_min: String,
    pub year_max: String,
    pub zip: String,
    pub brand: Option<String>,
    pub body_style: Option<String>,
}

impl SearchFilter {
    /// Validates raw input. Only the page count is checked; a blank ZIP falls
    /// back to [`DEFAULT_ZIP`] and blank brand/body style become `None`.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidPageCount`] if the page count is not an integer.
    /// - [`FilterError::ZeroPageCount`] if it is `0`.
    pub fn from_raw(raw: RawFilterInput) -> Result<Self, FilterError> {
        let page_count = parse_page_count(&raw.page_count)?;

        let zip = match raw.zip.trim() {
            "" => DEFAULT_ZIP.to_string(),
            z => z.to_string(),
        };

        Ok(Self {
            page_count,
            price_max: raw.price_max.trim().to_string(),
            mileage_max: raw.mileage_max.trim().to_string(),
            year_min: raw.year_min.trim().to_string(),
            year_max: raw.year_max.trim().to_string(),
            zip,
            brand: non_blank(raw.brand),
            body_style: non_blank(raw.body_style),
        })
    }
}

/// Parses a page count string into a positive integer.
///
/// # Errors
///
/// Returns [`FilterError`] when the value is not a positive integer.
pub fn parse_page_count(raw: &str) -> Result<u32, FilterError> {
    let trimmed = raw.trim();
    let count = trimmed
        .parse::<u32>()
        .map_err(|_| FilterError::InvalidPageCount(trimmed.to_string()))?;
    if count == 0 {
        return Err(FilterError::ZeroPageCount);
    }
    Ok(count)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
