//! # Hotel Core
//!
//! Domain types, store traits and the booking lifecycle engine for the hotel
//! backend.
//!
//! ## Core Concepts
//!
//! - **Stores**: key-based get/insert/update interfaces over rooms, bookings,
//!   guests and users ([`providers`])
//! - **Booking engine**: availability checks, pricing and the payment-driven
//!   room status transitions ([`booking`])
//! - **Presenter**: labels and formatted dates for clients ([`presenter`])
//! - **Environment**: clock and register number source, injected for tests
//!
//! ## Example
//!
//! ```ignore
//! use hotel_core::{BookingEngine, NewBooking, PaymentStatus};
//!
//! let engine = BookingEngine::new(store);
//! let register_number = engine.create_booking(request).await?;
//! engine.update_payment(&register_number, PaymentStatus::Completed).await?;
//! ```

pub mod booking;
pub mod environment;
pub mod error;
pub mod guest;
pub mod presenter;
pub mod pricing;
pub mod providers;
pub mod room;
pub mod types;

pub use booking::BookingEngine;
pub use error::{HotelError, Result};
pub use guest::GuestService;
pub use presenter::{BookingView, GuestView, RoomView};
pub use providers::{BookingStore, GuestStore, HotelStore, RoomStore, UserStore};
pub use room::RoomService;
pub use types::{
    Booking, BookingDetail, Guest, GuestId, NewBooking, NewGuest, NewRoom, NewUser,
    PaymentMethod, PaymentStatus, RegisterNumber, Room, RoomFilter, RoomStatus, RoomUpdate,
    StayPeriod, User, UserId,
};
