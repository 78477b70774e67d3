//! Booking store trait.

use crate::error::Result;
use crate::types::{Booking, BookingDetail, PaymentStatus, RegisterNumber};
use chrono::NaiveDate;

/// Booking store.
///
/// # Implementation Notes
///
/// - Bookings are keyed by register number
/// - `get_booking_detail` joins the guest (by id) and the room (by name)
/// - Updates on an unknown register number report `NotFound`
pub trait BookingStore: Send + Sync {
    /// Persist a new booking.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the write fails.
    fn insert_booking(
        &self,
        booking: &Booking,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Load a booking joined with its guest and room.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if no booking has this register number.
    fn get_booking_detail(
        &self,
        register_number: &RegisterNumber,
    ) -> impl std::future::Future<Output = Result<BookingDetail>> + Send;

    /// Overwrite the payment status.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if no booking has this register number.
    fn update_payment_status(
        &self,
        register_number: &RegisterNumber,
        status: PaymentStatus,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Overwrite the stay dates and the paid amount.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if no booking has this register number.
    fn update_schedule(
        &self,
        register_number: &RegisterNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
        paid_amount: f64,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
