//! Domain types for the hotel backend.
//!
//! Identifiers, status enums with their stored integer codes, and the records
//! exchanged with the stores.

use crate::error::{HotelError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Public identifier of a booking.
///
/// Generated once at creation (UUID v4 text) and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterNumber(String);

impl RegisterNumber {
    /// Creates a new random register number.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing register number, e.g. one read from a request.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RegisterNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a guest record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(pub i64);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a back-office user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status enums
// ============================================================================

/// Availability of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Free to book
    Available = 1,
    /// Paid booking holds the room
    Booked = 2,
    /// Out of service for maintenance
    Maintenance = 3,
    /// Withdrawn from sale
    Unavailable = 4,
}

impl RoomStatus {
    /// Stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Parses a stored integer code.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Available),
            2 => Some(Self::Booked),
            3 => Some(Self::Maintenance),
            4 => Some(Self::Unavailable),
            _ => None,
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Maintenance => "Maintenance",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a guest pays for a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card payment
    CreditCard = 1,
    /// Wire transfer
    BankTransfer = 2,
    /// Cash at the desk
    Cash = 3,
}

impl PaymentMethod {
    /// Stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Parses a stored integer code.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::CreditCard),
            2 => Some(Self::BankTransfer),
            3 => Some(Self::Cash),
            _ => None,
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle stage of a booking's payment.
///
/// Only `Completed` and `Refunded` move the linked room; the rest are
/// recorded as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Awaiting payment
    Pending = 1,
    /// Payment cleared
    Completed = 2,
    /// Payment attempt failed
    Failed = 3,
    /// Booking canceled before payment
    Canceled = 4,
    /// Payment returned to the guest
    Refunded = 5,
}

impl PaymentStatus {
    /// Stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Parses a stored integer code.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Pending),
            2 => Some(Self::Completed),
            3 => Some(Self::Failed),
            4 => Some(Self::Canceled),
            5 => Some(Self::Refunded),
            _ => None,
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Canceled => "Canceled",
            Self::Refunded => "Refunded",
        }
    }

    /// Room status this payment outcome forces onto the linked room, if any.
    #[must_use]
    pub const fn room_transition(self) -> Option<RoomStatus> {
        match self {
            Self::Completed => Some(RoomStatus::Booked),
            Self::Refunded => Some(RoomStatus::Available),
            Self::Pending | Self::Failed | Self::Canceled => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Stay period
// ============================================================================

/// Check-in and check-out dates of a stay.
///
/// Construction guarantees `check_out > check_in`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    /// Builds a stay period.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] unless `check_out` is strictly
    /// after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_out <= check_in {
            return Err(HotelError::Validation(
                "check out date must be greater than check in date".to_string(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// First night of the stay.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Departure date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// A sellable room, keyed by its unique name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Surrogate key
    pub id: i64,
    /// Unique room name, e.g. "R101"
    pub name: String,
    /// Floor number
    pub floor: i32,
    /// Room type, e.g. "Deluxe"
    pub room_type: String,
    /// Nightly price
    pub price: f64,
    /// Current availability
    pub status: RoomStatus,
    /// Optional free text
    pub description: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a room.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRoom {
    /// Unique room name
    pub name: String,
    /// Floor number (> 0)
    pub floor: i32,
    /// Room type
    pub room_type: String,
    /// Nightly price (> 0)
    pub price: f64,
    /// Initial status
    pub status: RoomStatus,
    /// Optional free text
    pub description: Option<String>,
}

/// Partial room update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomUpdate {
    /// New floor
    pub floor: Option<i32>,
    /// New nightly price
    pub price: Option<f64>,
    /// New status
    pub status: Option<RoomStatus>,
    /// New description
    pub description: Option<String>,
}

impl RoomUpdate {
    /// Update that only changes the status.
    #[must_use]
    pub const fn status(status: RoomStatus) -> Self {
        Self {
            floor: None,
            price: None,
            status: Some(status),
            description: None,
        }
    }

    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.floor.is_none()
            && self.price.is_none()
            && self.status.is_none()
            && self.description.is_none()
    }
}

/// Optional filters for listing rooms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Only rooms on this floor
    pub floor: Option<i32>,
    /// Only rooms in this status
    pub status: Option<RoomStatus>,
}

impl RoomFilter {
    /// Whether `room` passes the filter.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        self.floor.is_none_or(|floor| room.floor == floor)
            && self.status.is_none_or(|status| room.status == status)
    }
}

// ============================================================================
// Guests
// ============================================================================

/// A hotel guest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Guest id
    pub id: GuestId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Unique identity document number
    pub identity_number: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Contact phone
    pub phone_number: String,
    /// Contact email
    pub email: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating a guest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGuest {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Unique identity document number
    pub identity_number: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Contact phone
    pub phone_number: String,
    /// Contact email
    pub email: String,
}

// ============================================================================
// Bookings
// ============================================================================

/// Booking request accepted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBooking {
    /// Guest making the booking
    pub guest_id: GuestId,
    /// Room to reserve, by name
    pub room_name: String,
    /// Requested stay
    pub stay: StayPeriod,
    /// Chosen payment method
    pub payment_method: PaymentMethod,
    /// Optional note from the guest
    pub additional_request: Option<String>,
}

/// A persisted booking row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Public identifier
    pub register_number: RegisterNumber,
    /// Guest reference
    pub guest_id: GuestId,
    /// Room reference, by name
    pub room_name: String,
    /// Check-in date
    pub check_in: NaiveDate,
    /// Check-out date
    pub check_out: NaiveDate,
    /// Derived stay cost
    pub paid_amount: f64,
    /// Payment method
    pub payment_method: PaymentMethod,
    /// Payment status
    pub payment_status: PaymentStatus,
    /// Optional note
    pub additional_request: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Booking joined with its guest and room.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingDetail {
    /// The booking row
    pub booking: Booking,
    /// The guest who booked
    pub guest: Guest,
    /// The booked room
    pub room: Room,
}

// ============================================================================
// Users
// ============================================================================

/// A back-office user allowed to operate the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// User id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Contact email
    pub email: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. The password is already hashed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Contact email
    pub email: String,
}
