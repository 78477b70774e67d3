//! HTTP handlers for the `/api` routes.
//!
//! Handlers check that required fields are present and well formed, convert
//! request bodies into domain inputs, and leave business rules to the
//! services in `hotel-core` and `hotel-auth`.

pub mod bookings;
pub mod guests;
pub mod rooms;
pub mod users;

use chrono::NaiveDate;
use hotel_web::AppError;

/// Wire format for request dates, e.g. "02-01-2006".
pub const REQUEST_DATE_FORMAT: &str = "%d-%m-%Y";

/// Reject a blank required field.
///
/// # Errors
///
/// 400 `"{field} is required"` when `value` is empty or whitespace.
pub fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{field} is required")));
    }
    Ok(())
}

/// Parse a `DD-MM-YYYY` request date.
///
/// # Errors
///
/// 400 naming the field when the value is blank or not a calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    required(field, value)?;
    let invalid =
        || AppError::bad_request(format!("invalid {field}: expected DD-MM-YYYY, got {value:?}"));

    let trimmed = value.trim();
    if !has_date_layout(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, REQUEST_DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `DD-MM-YYYY`: zero-padded digits with dashes at 2 and 5.
fn has_date_layout(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
