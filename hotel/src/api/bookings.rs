//! Booking lifecycle endpoints: create, view, payment update, reschedule.

use crate::api::{parse_date, required};
use crate::metrics;
use crate::server::state::{AppState, SessionCache};
use axum::extract::State;
use hotel_core::{
    BookingView, GuestId, HotelStore, NewBooking, PaymentMethod, PaymentStatus, RegisterNumber,
    StayPeriod,
};
use hotel_web::{ApiResponse, AppError, JsonBody, QueryParams, WebResult};
use serde::{Deserialize, Serialize};

/// `POST /api/booking` body.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    /// Guest id
    #[serde(default)]
    pub guest_id: i64,
    /// Room name
    #[serde(default)]
    pub room_name: String,
    /// "DD-MM-YYYY"
    #[serde(default)]
    pub check_in: String,
    /// "DD-MM-YYYY", after `check_in`
    #[serde(default)]
    pub check_out: String,
    /// Payment method code
    #[serde(default)]
    pub payment_method: i16,
    /// Optional note
    pub additional_request: Option<String>,
}

/// `POST /api/booking` payload.
#[derive(Debug, Serialize)]
pub struct BookingCreated {
    /// Public booking identifier
    pub register_number: String,
}

/// `GET /api/booking` query.
#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    /// Public booking identifier
    pub register_number: Option<String>,
}

/// `PUT /api/payment` body.
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    /// Public booking identifier
    #[serde(default)]
    pub register_number: String,
    /// Payment status code
    #[serde(default)]
    pub payment_status: i16,
}

/// `PUT /api/reschedule` body.
#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    /// Public booking identifier
    #[serde(default)]
    pub register_number: String,
    /// "DD-MM-YYYY"
    #[serde(default)]
    pub check_in: String,
    /// "DD-MM-YYYY", after `check_in`
    #[serde(default)]
    pub check_out: String,
}

fn stay_period(check_in: &str, check_out: &str) -> Result<StayPeriod, AppError> {
    let check_in = parse_date("check_in", check_in)?;
    let check_out = parse_date("check_out", check_out)?;
    Ok(StayPeriod::new(check_in, check_out)?)
}

/// Reserve an available room for a guest.
///
/// # Errors
///
/// - 400 for missing fields, malformed dates, a non-positive stay or an
///   unknown payment method
/// - 404 for an unknown room
/// - 500 when the room is not available
#[tracing::instrument(skip(state, request), fields(room = %request.room_name))]
pub async fn create_booking<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<BookingRequest>,
) -> WebResult<ApiResponse<BookingCreated>> {
    if request.guest_id <= 0 {
        return Err(AppError::bad_request("guest_id is required"));
    }
    required("room_name", &request.room_name)?;
    let stay = stay_period(&request.check_in, &request.check_out)?;
    let payment_method = PaymentMethod::from_code(request.payment_method)
        .ok_or_else(|| AppError::bad_request("invalid payment method"))?;

    let register_number = state
        .bookings
        .create_booking(NewBooking {
            guest_id: GuestId(request.guest_id),
            room_name: request.room_name,
            stay,
            payment_method,
            additional_request: request.additional_request,
        })
        .await?;

    metrics::record_booking_created();
    Ok(ApiResponse::created(BookingCreated {
        register_number: register_number.as_str().to_string(),
    }))
}

/// Booking detail joined with its guest and room.
///
/// # Errors
///
/// 400 without a register number, 404 for an unknown booking.
pub async fn get_booking<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    QueryParams(query): QueryParams<BookingQuery>,
) -> WebResult<ApiResponse<BookingView>> {
    let register_number = query.register_number.unwrap_or_default();
    required("register_number", &register_number)?;

    let view = state
        .bookings
        .booking_detail(&RegisterNumber::from_string(register_number))
        .await?;
    Ok(ApiResponse::ok(view))
}

/// Record a payment outcome. Completed books the room, Refunded frees it.
///
/// # Errors
///
/// 400 for a missing register number or an unknown status code, 404 for an
/// unknown booking.
#[tracing::instrument(skip(state, request), fields(register_number = %request.register_number))]
pub async fn update_payment<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<UpdatePaymentRequest>,
) -> WebResult<ApiResponse<()>> {
    required("register_number", &request.register_number)?;
    let status = PaymentStatus::from_code(request.payment_status)
        .ok_or_else(|| AppError::bad_request("invalid payment status"))?;

    state
        .bookings
        .update_payment(&RegisterNumber::from_string(request.register_number), status)
        .await?;

    metrics::record_payment(status);
    Ok(ApiResponse::success())
}

/// Move a pending booking to new dates.
///
/// # Errors
///
/// - 400 for missing fields, malformed dates or a non-positive stay
/// - 404 for an unknown booking
/// - 500 unless the booking is pending and its room available
#[tracing::instrument(skip(state, request), fields(register_number = %request.register_number))]
pub async fn reschedule<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<RescheduleRequest>,
) -> WebResult<ApiResponse<()>> {
    required("register_number", &request.register_number)?;
    let stay = stay_period(&request.check_in, &request.check_out)?;

    state
        .bookings
        .reschedule(&RegisterNumber::from_string(request.register_number), stay)
        .await?;

    metrics::record_reschedule();
    Ok(ApiResponse::success())
}
