//! Client-facing views of stored records.
//!
//! Pure presentation mapping: enum labels and formatted dates, no business
//! rules.

use crate::types::{BookingDetail, Guest, Room};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Format for calendar dates, e.g. "02 January 2006".
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Format for timestamps, e.g. "02-01-2006 15:04:05".
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Booking detail as returned by `GET /api/booking`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    /// Public identifier
    pub register_number: String,
    /// Guest id
    pub guest_id: i64,
    /// "first last"
    pub guest_name: String,
    /// Guest identity number
    pub guest_identity: String,
    /// Room name
    pub room_name: String,
    /// Room floor
    pub room_floor: i32,
    /// Room type
    pub room_type: String,
    /// Room status label
    pub room_status: String,
    /// Check-in, "DD Month YYYY"
    pub check_in: String,
    /// Check-out, "DD Month YYYY"
    pub check_out: String,
    /// Derived stay cost
    pub paid_amount: f64,
    /// Payment method label
    pub payment_method: String,
    /// Payment status label
    pub payment_status: String,
    /// Optional note
    pub additional_request: Option<String>,
    /// Creation timestamp, "DD-MM-YYYY HH:MM:SS"
    pub created_at: String,
}

/// Room as returned by the room endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    /// Surrogate key
    pub id: i64,
    /// Room name
    pub name: String,
    /// Floor
    pub floor: i32,
    /// Room type
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly price
    pub price: f64,
    /// Status label
    pub status: String,
    /// Optional free text
    pub description: Option<String>,
}

/// Guest as returned by `GET /api/guest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestView {
    /// Guest id
    pub id: i64,
    /// "first last"
    pub name: String,
    /// Identity number
    pub identity_number: String,
    /// Date of birth, "DD Month YYYY"
    pub date_of_birth: String,
    /// Contact phone
    pub phone_number: String,
    /// Contact email
    pub email: String,
}

/// Joins first and last name with a single space.
///
/// An empty part leaves a leading or trailing space; callers see exactly
/// what was stored.
#[must_use]
pub fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

/// Formats a calendar date as "DD Month YYYY".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a timestamp as "DD-MM-YYYY HH:MM:SS".
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

impl From<&BookingDetail> for BookingView {
    fn from(detail: &BookingDetail) -> Self {
        let BookingDetail {
            booking,
            guest,
            room,
        } = detail;
        Self {
            register_number: booking.register_number.to_string(),
            guest_id: guest.id.0,
            guest_name: full_name(&guest.first_name, &guest.last_name),
            guest_identity: guest.identity_number.clone(),
            room_name: room.name.clone(),
            room_floor: room.floor,
            room_type: room.room_type.clone(),
            room_status: room.status.label().to_string(),
            check_in: format_date(booking.check_in),
            check_out: format_date(booking.check_out),
            paid_amount: booking.paid_amount,
            payment_method: booking.payment_method.label().to_string(),
            payment_status: booking.payment_status.label().to_string(),
            additional_request: booking.additional_request.clone(),
            created_at: format_timestamp(booking.created_at),
        }
    }
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            floor: room.floor,
            room_type: room.room_type.clone(),
            price: room.price,
            status: room.status.label().to_string(),
            description: room.description.clone(),
        }
    }
}

impl From<&Guest> for GuestView {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id.0,
            name: full_name(&guest.first_name, &guest.last_name),
            identity_number: guest.identity_number.clone(),
            date_of_birth: format_date(guest.date_of_birth),
            phone_number: guest.phone_number.clone(),
            email: guest.email.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Booking, GuestId, PaymentMethod, PaymentStatus, RegisterNumber, RoomStatus};
    use chrono::TimeZone;

    fn sample_detail() -> BookingDetail {
        let created_at = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        BookingDetail {
            booking: Booking {
                register_number: RegisterNumber::from_string("rn-1"),
                guest_id: GuestId(7),
                room_name: "R1".to_string(),
                check_in: NaiveDate::from_ymd_opt(2000, 4, 1).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2000, 4, 2).unwrap(),
                paid_amount: 1000.0,
                payment_method: PaymentMethod::BankTransfer,
                payment_status: PaymentStatus::Pending,
                additional_request: Some("late arrival".to_string()),
                created_at,
            },
            guest: Guest {
                id: GuestId(7),
                first_name: String::new(),
                last_name: "Doe".to_string(),
                identity_number: "ID-7".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 5).unwrap(),
                phone_number: "0800".to_string(),
                email: "doe@example.com".to_string(),
                created_at,
            },
            room: Room {
                id: 1,
                name: "R1".to_string(),
                floor: 3,
                room_type: "Deluxe".to_string(),
                price: 1000.0,
                status: RoomStatus::Available,
                description: None,
                created_at,
                updated_at: created_at,
            },
        }
    }

    #[test]
    fn test_booking_view_formats() {
        let view = BookingView::from(&sample_detail());
        assert_eq!(view.check_in, "01 April 2000");
        assert_eq!(view.check_out, "02 April 2000");
        assert_eq!(view.created_at, "02-01-2006 15:04:05");
        assert_eq!(view.payment_method, "Bank Transfer");
        assert_eq!(view.payment_status, "Pending");
        assert_eq!(view.room_status, "Available");
        assert_eq!(view.room_floor, 3);
    }

    #[test]
    fn test_guest_name_keeps_stray_space() {
        let view = BookingView::from(&sample_detail());
        assert_eq!(view.guest_name, " Doe");
        assert_eq!(full_name("Jane", ""), "Jane ");
    }

    #[test]
    fn test_guest_view() {
        let detail = sample_detail();
        let view = GuestView::from(&detail.guest);
        assert_eq!(view.date_of_birth, "05 December 1990");
        assert_eq!(view.id, 7);
    }

    #[test]
    fn test_room_view_serializes_type_field() {
        let detail = sample_detail();
        let json = serde_json::to_value(RoomView::from(&detail.room)).unwrap();
        assert_eq!(json["type"], "Deluxe");
        assert_eq!(json["status"], "Available");
    }
}
