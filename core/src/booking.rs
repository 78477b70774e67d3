//! Booking lifecycle engine.
//!
//! Orchestrates the room and booking stores to reserve a room, price the
//! stay, record payment outcomes and reschedule pending bookings. The engine
//! owns no storage and keeps no state between calls.
//!
//! # State Machine
//!
//! ```text
//! payment:  Pending ──complete──▶ Completed   (room → Booked)
//!           Pending ──refund────▶ Refunded    (room → Available)
//!           Pending ──fail/cancel▶ Failed / Canceled (room untouched)
//!
//! room:     Available ◀──────────▶ Booked     (driven by payment only)
//! ```
//!
//! # Consistency
//!
//! Every operation is a sequence of independent store calls. Nothing is
//! locked between a read and the write that depends on it, so two concurrent
//! bookings of the same Available room both succeed. `update_payment`
//! writes the payment status before it moves the room; if the room write
//! fails the payment status stays written.

use crate::environment::{Clock, RegisterNumberGenerator, SystemClock, UuidRegisterNumbers};
use crate::error::{HotelError, Result};
use crate::presenter::BookingView;
use crate::pricing::stay_cost;
use crate::providers::{BookingStore, RoomStore};
use crate::types::{
    Booking, NewBooking, PaymentStatus, RegisterNumber, RoomStatus, RoomUpdate, StayPeriod,
};
use std::sync::Arc;

/// Booking lifecycle engine over a store backend `S`.
pub struct BookingEngine<S> {
    store: S,
    clock: Arc<dyn Clock>,
    register_numbers: Arc<dyn RegisterNumberGenerator>,
}

impl<S: Clone> Clone for BookingEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: Arc::clone(&self.clock),
            register_numbers: Arc::clone(&self.register_numbers),
        }
    }
}

impl<S> BookingEngine<S>
where
    S: RoomStore + BookingStore,
{
    /// Engine using the wall clock and UUID v4 register numbers.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_environment(store, Arc::new(SystemClock), Arc::new(UuidRegisterNumbers))
    }

    /// Engine with injected clock and register number source.
    #[must_use]
    pub fn with_environment(
        store: S,
        clock: Arc<dyn Clock>,
        register_numbers: Arc<dyn RegisterNumberGenerator>,
    ) -> Self {
        Self {
            store,
            clock,
            register_numbers,
        }
    }

    /// Reserve a room for a guest.
    ///
    /// The booking starts Pending with `paid_amount` priced from the room's
    /// current nightly rate. The room itself stays Available until payment
    /// completes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the room does not exist
    /// - `RoomUnavailable` if the room is not Available
    /// - `Store` if persistence fails
    #[tracing::instrument(skip(self, request), fields(room = %request.room_name, guest = %request.guest_id))]
    pub async fn create_booking(&self, request: NewBooking) -> Result<RegisterNumber> {
        let room = self.store.get_room_by_name(&request.room_name).await?;
        if room.status != RoomStatus::Available {
            tracing::debug!(status = %room.status, "Room cannot be booked");
            return Err(HotelError::RoomUnavailable);
        }

        let booking = Booking {
            register_number: self.register_numbers.next_register_number(),
            guest_id: request.guest_id,
            room_name: room.name,
            check_in: request.stay.check_in(),
            check_out: request.stay.check_out(),
            paid_amount: stay_cost(room.price, &request.stay),
            payment_method: request.payment_method,
            payment_status: PaymentStatus::Pending,
            additional_request: request.additional_request,
            created_at: self.clock.now(),
        };
        self.store.insert_booking(&booking).await?;

        tracing::info!(
            register_number = %booking.register_number,
            paid_amount = booking.paid_amount,
            "Booking created"
        );
        Ok(booking.register_number)
    }

    /// Load the display view of a booking.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the register number is unknown.
    #[tracing::instrument(skip(self), fields(register_number = %register_number))]
    pub async fn booking_detail(&self, register_number: &RegisterNumber) -> Result<BookingView> {
        let detail = self.store.get_booking_detail(register_number).await?;
        Ok(BookingView::from(&detail))
    }

    /// Record a payment outcome and move the linked room accordingly.
    ///
    /// Steps, each aborting on failure:
    /// 1. write the new payment status
    /// 2. re-read the booking to find its room
    /// 3. `Completed` books the room, `Refunded` frees it, anything else
    ///    leaves it alone
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown register number or `Store` if any
    /// write fails. A failure in step 3 does not undo step 1.
    #[tracing::instrument(skip(self), fields(register_number = %register_number, status = %status))]
    pub async fn update_payment(
        &self,
        register_number: &RegisterNumber,
        status: PaymentStatus,
    ) -> Result<()> {
        self.store
            .update_payment_status(register_number, status)
            .await?;

        let detail = self.store.get_booking_detail(register_number).await?;

        if let Some(room_status) = status.room_transition() {
            self.store
                .update_room(&detail.room.name, &RoomUpdate::status(room_status))
                .await?;
            tracing::info!(room = %detail.room.name, room_status = %room_status, "Room status changed by payment");
        }

        Ok(())
    }

    /// Move a pending booking to a new stay and reprice it.
    ///
    /// Preconditions are checked against freshly read state, payment first:
    /// the booking must be Pending and its room Available. The price comes
    /// from a fresh read of the room.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the booking or its room is gone
    /// - `InvalidPaymentStatus` if the booking is not Pending
    /// - `InvalidRoomStatus` if the room is not Available
    /// - `Store` if persistence fails
    #[tracing::instrument(skip(self), fields(register_number = %register_number))]
    pub async fn reschedule(&self, register_number: &RegisterNumber, stay: StayPeriod) -> Result<()> {
        let detail = self.store.get_booking_detail(register_number).await?;

        if detail.booking.payment_status != PaymentStatus::Pending {
            return Err(HotelError::InvalidPaymentStatus);
        }
        if detail.room.status != RoomStatus::Available {
            return Err(HotelError::InvalidRoomStatus);
        }

        let room = self.store.get_room_by_name(&detail.room.name).await?;
        let paid_amount = stay_cost(room.price, &stay);

        self.store
            .update_schedule(register_number, stay.check_in(), stay.check_out(), paid_amount)
            .await?;

        tracing::info!(paid_amount, "Booking rescheduled");
        Ok(())
    }
}
