//! Store traits consumed by the engine and the services.
//!
//! Providers are **interfaces**, not implementations. The PostgreSQL crate
//! and the in-memory test store implement them; the engine only ever sees
//! these traits.
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐
//! │ BookingEngine    │─────▶│ RoomStore        │
//! │ RoomService      │      │ BookingStore     │
//! │ GuestService     │      │ GuestStore       │
//! └──────────────────┘      │ UserStore        │
//!                           └────────┬─────────┘
//!                                    │
//!                  ┌─────────────────┴──────────────┐
//!                  ▼                                ▼
//!          PostgreSQL (prod)                In-memory (tests)
//! ```

pub mod booking;
pub mod guest;
pub mod room;
pub mod user;

pub use booking::BookingStore;
pub use guest::GuestStore;
pub use room::RoomStore;
pub use user::UserStore;

/// A backend that implements every store.
///
/// Blanket-implemented, so application state can be generic over a single
/// type parameter.
pub trait HotelStore: RoomStore + BookingStore + GuestStore + UserStore + Clone + 'static {}

impl<T> HotelStore for T where T: RoomStore + BookingStore + GuestStore + UserStore + Clone + 'static {}
