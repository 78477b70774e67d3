//! Booking lifecycle tests against the in-memory store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use hotel_core::{
    BookingEngine, GuestId, HotelError, PaymentMethod, PaymentStatus, RegisterNumber, RoomStatus,
    RoomStore,
};
use hotel_testing::fixtures::{booking, date, guest, room, stay};
use hotel_testing::{InMemoryHotelStore, SequentialRegisterNumbers, StoreOp, test_clock};
use proptest::prelude::*;
use std::sync::Arc;

struct Harness {
    store: InMemoryHotelStore,
    engine: BookingEngine<InMemoryHotelStore>,
    guest_id: GuestId,
}

fn harness(rooms: &[(&str, f64, RoomStatus)]) -> Harness {
    let store = InMemoryHotelStore::new();
    for (name, price, status) in rooms {
        store.seed_room(room(name, *price, *status)).expect("seed room");
    }
    let guest_id = store.seed_guest(guest("Jane", "Doe")).expect("seed guest").id;
    let engine = BookingEngine::with_environment(
        store.clone(),
        Arc::new(test_clock()),
        Arc::new(SequentialRegisterNumbers::new()),
    );
    Harness {
        store,
        engine,
        guest_id,
    }
}

async fn book(h: &Harness, room_name: &str, nights: (u32, u32)) -> RegisterNumber {
    let s = stay(date(2000, 4, nights.0), date(2000, 4, nights.1)).unwrap();
    h.engine
        .create_booking(booking(h.guest_id, room_name, s))
        .await
        .expect("create booking")
}

#[tokio::test]
async fn test_create_booking_prices_stay_and_leaves_room_available() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);

    let rn = book(&h, "R1", (1, 2)).await;

    assert_eq!(rn.as_str(), "RN-000001");
    let stored = h.store.booking(&rn).unwrap().unwrap();
    assert_eq!(stored.paid_amount, 1000.0);
    assert_eq!(stored.payment_status, PaymentStatus::Pending);
    assert_eq!(stored.payment_method, PaymentMethod::CreditCard);
    assert_eq!(h.store.room_status("R1").unwrap(), Some(RoomStatus::Available));
}

#[tokio::test]
async fn test_create_booking_unknown_room() {
    let h = harness(&[]);
    let s = stay(date(2000, 4, 1), date(2000, 4, 2)).unwrap();

    let err = h
        .engine
        .create_booking(booking(h.guest_id, "nope", s))
        .await
        .unwrap_err();

    assert!(matches!(err, HotelError::NotFound { resource: "room", .. }));
    assert_eq!(h.store.booking_count().unwrap(), 0);
}

#[tokio::test]
async fn test_create_booking_rejects_every_non_available_room() {
    for status in [
        RoomStatus::Booked,
        RoomStatus::Maintenance,
        RoomStatus::Unavailable,
    ] {
        let h = harness(&[("R1", 500.0, status)]);
        let s = stay(date(2000, 4, 1), date(2000, 4, 3)).unwrap();

        let err = h
            .engine
            .create_booking(booking(h.guest_id, "R1", s))
            .await
            .unwrap_err();

        assert_eq!(err, HotelError::RoomUnavailable, "status {status:?}");
        assert_eq!(h.store.booking_count().unwrap(), 0);
    }
}

#[tokio::test]
async fn test_create_then_get_detail() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;

    let view = h.engine.booking_detail(&rn).await.unwrap();

    assert_eq!(view.register_number, rn.as_str());
    assert_eq!(view.check_in, "01 April 2000");
    assert_eq!(view.check_out, "02 April 2000");
    assert_eq!(view.payment_method, "Credit Card");
    assert_eq!(view.payment_status, "Pending");
    assert_eq!(view.paid_amount, 1000.0);
    assert_eq!(view.guest_name, "Jane Doe");
    assert_eq!(view.room_status, "Available");
    assert_eq!(view.created_at, "02-01-2006 15:04:05");
}

#[tokio::test]
async fn test_get_detail_unknown_register_number() {
    let h = harness(&[]);
    let err = h
        .engine
        .booking_detail(&RegisterNumber::from_string("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, HotelError::NotFound { .. }));
}

#[tokio::test]
async fn test_scenario_complete_then_reschedule_is_gated() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;

    h.engine
        .update_payment(&rn, PaymentStatus::Completed)
        .await
        .unwrap();
    assert_eq!(h.store.room_status("R1").unwrap(), Some(RoomStatus::Booked));

    let err = h
        .engine
        .reschedule(&rn, stay(date(2000, 4, 5), date(2000, 4, 7)).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, HotelError::InvalidPaymentStatus);
}

#[tokio::test]
async fn test_refund_frees_room_regardless_of_prior_status() {
    let h = harness(&[("R2", 700.0, RoomStatus::Available)]);
    let rn = book(&h, "R2", (1, 2)).await;
    h.store
        .update_room("R2", &hotel_core::RoomUpdate::status(RoomStatus::Maintenance))
        .await
        .unwrap();

    h.engine
        .update_payment(&rn, PaymentStatus::Refunded)
        .await
        .unwrap();

    assert_eq!(h.store.room_status("R2").unwrap(), Some(RoomStatus::Available));
    assert_eq!(
        h.store.booking(&rn).unwrap().unwrap().payment_status,
        PaymentStatus::Refunded
    );
}

#[tokio::test]
async fn test_failed_and_canceled_leave_room_untouched() {
    for status in [PaymentStatus::Failed, PaymentStatus::Canceled] {
        let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
        let rn = book(&h, "R1", (1, 2)).await;

        h.engine.update_payment(&rn, status).await.unwrap();

        assert_eq!(h.store.room_status("R1").unwrap(), Some(RoomStatus::Available));
        assert_eq!(h.store.booking(&rn).unwrap().unwrap().payment_status, status);
    }
}

#[tokio::test]
async fn test_update_payment_unknown_booking() {
    let h = harness(&[]);
    let err = h
        .engine
        .update_payment(&RegisterNumber::from_string("missing"), PaymentStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(err, HotelError::NotFound { .. }));
}

#[tokio::test]
async fn test_payment_write_survives_room_write_failure() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;
    h.store.fail_on(StoreOp::UpdateRoom).unwrap();

    let err = h
        .engine
        .update_payment(&rn, PaymentStatus::Completed)
        .await
        .unwrap_err();

    assert!(matches!(err, HotelError::Store(_)));
    assert_eq!(
        h.store.booking(&rn).unwrap().unwrap().payment_status,
        PaymentStatus::Completed
    );
    assert_eq!(h.store.room_status("R1").unwrap(), Some(RoomStatus::Available));
}

#[tokio::test]
async fn test_reschedule_reprices_from_current_room_price() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;
    h.store
        .update_room(
            "R1",
            &hotel_core::RoomUpdate {
                price: Some(1200.0),
                ..hotel_core::RoomUpdate::default()
            },
        )
        .await
        .unwrap();

    h.engine
        .reschedule(&rn, stay(date(2000, 4, 10), date(2000, 4, 13)).unwrap())
        .await
        .unwrap();

    let stored = h.store.booking(&rn).unwrap().unwrap();
    assert_eq!(stored.register_number, rn);
    assert_eq!(stored.check_in, date(2000, 4, 10));
    assert_eq!(stored.check_out, date(2000, 4, 13));
    assert_eq!(stored.paid_amount, 3600.0);
    assert_eq!(h.store.booking_count().unwrap(), 1);
}

#[tokio::test]
async fn test_reschedule_rejects_non_available_room() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;
    h.store
        .update_room("R1", &hotel_core::RoomUpdate::status(RoomStatus::Maintenance))
        .await
        .unwrap();

    let err = h
        .engine
        .reschedule(&rn, stay(date(2000, 4, 5), date(2000, 4, 6)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, HotelError::InvalidRoomStatus);
}

#[tokio::test]
async fn test_reschedule_reports_payment_before_room() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let rn = book(&h, "R1", (1, 2)).await;
    h.engine
        .update_payment(&rn, PaymentStatus::Failed)
        .await
        .unwrap();
    h.store
        .update_room("R1", &hotel_core::RoomUpdate::status(RoomStatus::Unavailable))
        .await
        .unwrap();

    let err = h
        .engine
        .reschedule(&rn, stay(date(2000, 4, 5), date(2000, 4, 6)).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, HotelError::InvalidPaymentStatus);
}

#[tokio::test]
async fn test_concurrent_bookings_of_same_room_both_succeed() {
    let h = harness(&[("R1", 1000.0, RoomStatus::Available)]);
    let s = stay(date(2000, 4, 1), date(2000, 4, 2)).unwrap();

    let (a, b) = tokio::join!(
        h.engine.create_booking(booking(h.guest_id, "R1", s)),
        h.engine.create_booking(booking(h.guest_id, "R1", s)),
    );

    assert_ne!(a.unwrap(), b.unwrap());
    assert_eq!(h.store.booking_count().unwrap(), 2);
}

proptest! {
    #[test]
    fn prop_paid_amount_is_price_times_days(price in 1u32..100_000, nights in 1u32..28) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let h = harness(&[("R1", f64::from(price), RoomStatus::Available)]);

        let rn = runtime.block_on(book(&h, "R1", (1, 1 + nights)));

        let stored = h.store.booking(&rn).unwrap().unwrap();
        prop_assert_eq!(stored.paid_amount, f64::from(price) * f64::from(nights));
    }
}
