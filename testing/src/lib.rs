//! # Hotel Testing
//!
//! Testing utilities for the hotel backend.
//!
//! This crate provides:
//! - [`InMemoryHotelStore`]: every store trait over in-memory tables, with
//!   failure injection
//! - Deterministic environment mocks ([`FixedClock`],
//!   [`SequentialRegisterNumbers`])
//! - Fixture builders for rooms, guests and bookings
//!
//! ## Example
//!
//! ```ignore
//! use hotel_testing::{InMemoryHotelStore, fixtures};
//! use hotel_core::{BookingEngine, RoomStatus};
//!
//! #[tokio::test]
//! async fn test_booking_flow() {
//!     let store = InMemoryHotelStore::new();
//!     store.seed_room(fixtures::room("R1", 1000.0, RoomStatus::Available)).unwrap();
//!     let engine = BookingEngine::new(store.clone());
//!     // ...
//! }
//! ```

pub mod store;

pub use store::{InMemoryHotelStore, StoreOp};

/// Mock implementations of environment traits.
pub mod mocks {
    use chrono::{DateTime, TimeZone, Utc};
    use hotel_core::RegisterNumber;
    use hotel_core::environment::{Clock, RegisterNumberGenerator};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use hotel_testing::mocks::FixedClock;
    /// use hotel_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Fixed clock at 2006-01-02 15:04:05 UTC.
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
                .single()
                .unwrap_or_default(),
        )
    }

    /// Register numbers `RN-000001`, `RN-000002`, ...
    #[derive(Debug)]
    pub struct SequentialRegisterNumbers {
        next: AtomicU64,
    }

    impl SequentialRegisterNumbers {
        /// Start the sequence at 1.
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialRegisterNumbers {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegisterNumberGenerator for SequentialRegisterNumbers {
        fn next_register_number(&self) -> RegisterNumber {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            RegisterNumber::from_string(format!("RN-{n:06}"))
        }
    }
}

/// Fixture builders.
pub mod fixtures {
    use chrono::NaiveDate;
    use hotel_core::{
        GuestId, NewBooking, NewGuest, NewRoom, PaymentMethod, RoomStatus, StayPeriod,
    };

    /// A room on floor 1 of type "Deluxe".
    #[must_use]
    pub fn room(name: &str, price: f64, status: RoomStatus) -> NewRoom {
        NewRoom {
            name: name.to_string(),
            floor: 1,
            room_type: "Deluxe".to_string(),
            price,
            status,
            description: None,
        }
    }

    /// A guest with the given names and a unique-ish identity number.
    #[must_use]
    pub fn guest(first_name: &str, last_name: &str) -> NewGuest {
        NewGuest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            identity_number: format!("ID-{first_name}-{last_name}"),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap_or_default(),
            phone_number: "+62 812 0000 0000".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        }
    }

    /// Calendar date shorthand. Invalid dates fall back to 1970-01-01.
    #[must_use]
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    /// Stay between two dates.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `check_out` is after `check_in`.
    pub fn stay(check_in: NaiveDate, check_out: NaiveDate) -> hotel_core::Result<StayPeriod> {
        StayPeriod::new(check_in, check_out)
    }

    /// Credit card booking of `room_name` for `guest_id`.
    #[must_use]
    pub fn booking(guest_id: GuestId, room_name: &str, stay: StayPeriod) -> NewBooking {
        NewBooking {
            guest_id,
            room_name: room_name.to_string(),
            stay,
            payment_method: PaymentMethod::CreditCard,
            additional_request: None,
        }
    }
}

pub use mocks::{FixedClock, SequentialRegisterNumbers, test_clock};
