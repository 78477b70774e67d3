//! Guest registry endpoints.

use crate::api::parse_date;
use crate::server::state::{AppState, SessionCache};
use axum::extract::State;
use hotel_core::{GuestId, GuestView, HotelStore, NewGuest};
use hotel_web::{ApiResponse, AppError, JsonBody, QueryParams, WebResult};
use serde::{Deserialize, Serialize};

/// `POST /api/guest` body. Every field is required.
#[derive(Debug, Deserialize)]
pub struct CreateGuestRequest {
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Government identity number, unique
    #[serde(default)]
    pub identity_number: String,
    /// "DD-MM-YYYY"
    #[serde(default)]
    pub date_of_birth: String,
    /// Contact phone
    #[serde(default)]
    pub phone_number: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
}

/// `POST /api/guest` payload.
#[derive(Debug, Serialize)]
pub struct GuestCreated {
    /// Id of the new guest
    pub id: i64,
}

/// `GET /api/guest` query.
#[derive(Debug, Deserialize)]
pub struct GuestQuery {
    /// Guest id, decimal
    pub id: Option<String>,
}

/// Register a guest.
///
/// # Errors
///
/// 400 for blank fields or a malformed birth date, 500 if the identity
/// number is already registered.
#[tracing::instrument(skip_all)]
pub async fn create_guest<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<CreateGuestRequest>,
) -> WebResult<ApiResponse<GuestCreated>> {
    let date_of_birth = parse_date("date_of_birth", &request.date_of_birth)?;

    let GuestId(id) = state
        .guests
        .create_guest(NewGuest {
            first_name: request.first_name,
            last_name: request.last_name,
            identity_number: request.identity_number,
            date_of_birth,
            phone_number: request.phone_number,
            email: request.email,
        })
        .await?;

    Ok(ApiResponse::created(GuestCreated { id }))
}

/// Look up a guest by id.
///
/// # Errors
///
/// 400 for a missing or non-numeric id, 404 for an unknown guest.
pub async fn get_guest<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    QueryParams(query): QueryParams<GuestQuery>,
) -> WebResult<ApiResponse<GuestView>> {
    let id = query
        .id
        .as_deref()
        .map(str::trim)
        .and_then(|id| id.parse::<i64>().ok())
        .ok_or_else(|| AppError::bad_request("invalid guest id"))?;

    let guest = state.guests.guest(GuestId(id)).await?;
    Ok(ApiResponse::ok(guest))
}
