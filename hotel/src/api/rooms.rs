//! Room inventory endpoints.

use crate::api::required;
use crate::server::state::{AppState, SessionCache};
use axum::extract::State;
use hotel_core::{HotelStore, NewRoom, RoomFilter, RoomStatus, RoomUpdate, RoomView};
use hotel_web::{ApiResponse, AppError, JsonBody, PathParam, QueryParams, WebResult};
use serde::{Deserialize, Serialize};

/// `POST /api/room` body.
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    /// Unique room name
    #[serde(default)]
    pub name: String,
    /// Floor, must be positive
    #[serde(default)]
    pub floor: i32,
    /// Room type
    #[serde(default, rename = "type")]
    pub room_type: String,
    /// Nightly price
    #[serde(default)]
    pub price: f64,
    /// Room status code
    #[serde(default)]
    pub status: i16,
    /// Optional free text
    pub description: Option<String>,
}

/// `PUT /api/room/:name` body. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoomRequest {
    /// New floor
    pub floor: Option<i32>,
    /// New room status code
    pub status: Option<i16>,
    /// New nightly price
    pub price: Option<f64>,
    /// New description
    pub description: Option<String>,
}

/// `GET /api/room` query.
#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    /// Room name
    pub name: Option<String>,
}

/// `GET /api/rooms` query. Empty values count as absent.
#[derive(Debug, Deserialize)]
pub struct ListRoomsQuery {
    /// Floor filter
    pub floor: Option<String>,
    /// Room status code filter
    pub status: Option<String>,
}

/// `GET /api/rooms` payload.
#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    /// Matching rooms
    pub rooms: Vec<RoomView>,
}

fn room_status(code: i16) -> Result<RoomStatus, AppError> {
    RoomStatus::from_code(code).ok_or_else(|| AppError::bad_request("invalid room status"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Add a room.
///
/// # Errors
///
/// 400 for missing fields or an unknown status code, 500 if the name is taken.
#[tracing::instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_room<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    JsonBody(request): JsonBody<CreateRoomRequest>,
) -> WebResult<ApiResponse<RoomView>> {
    let status = room_status(request.status)?;

    let room = state
        .rooms
        .create_room(NewRoom {
            name: request.name,
            floor: request.floor,
            room_type: request.room_type,
            price: request.price,
            status,
            description: request.description,
        })
        .await?;

    Ok(ApiResponse::created(room))
}

/// Look up a room by name.
///
/// # Errors
///
/// 400 without a name, 404 for an unknown room.
pub async fn get_room<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    QueryParams(query): QueryParams<RoomQuery>,
) -> WebResult<ApiResponse<RoomView>> {
    let name = non_empty(query.name).ok_or_else(|| AppError::bad_request("name is required"))?;
    let room = state.rooms.room_by_name(&name).await?;
    Ok(ApiResponse::ok(room))
}

/// List rooms, optionally filtered by floor and status.
///
/// # Errors
///
/// 400 for a non-numeric floor or an unknown status code.
pub async fn list_rooms<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    QueryParams(query): QueryParams<ListRoomsQuery>,
) -> WebResult<ApiResponse<RoomsResponse>> {
    let floor = non_empty(query.floor)
        .map(|floor| {
            floor
                .trim()
                .parse::<i32>()
                .map_err(|_| AppError::bad_request("invalid floor"))
        })
        .transpose()?;
    let status = non_empty(query.status)
        .map(|status| {
            status
                .trim()
                .parse::<i16>()
                .map_err(|_| AppError::bad_request("invalid room status"))
                .and_then(room_status)
        })
        .transpose()?;

    let rooms = state.rooms.list_rooms(RoomFilter { floor, status }).await?;
    Ok(ApiResponse::ok(RoomsResponse { rooms }))
}

/// Patch a room's floor, price, status or description.
///
/// # Errors
///
/// 400 for an empty patch or an unknown status code, 404 for an unknown room.
#[tracing::instrument(skip(state, request))]
pub async fn update_room<S: HotelStore, C: SessionCache>(
    State(state): State<AppState<S, C>>,
    PathParam(name): PathParam<String>,
    JsonBody(request): JsonBody<UpdateRoomRequest>,
) -> WebResult<ApiResponse<()>> {
    required("name", &name)?;
    let status = request.status.map(room_status).transpose()?;

    state
        .rooms
        .update_room(
            &name,
            RoomUpdate {
                floor: request.floor,
                price: request.price,
                status,
                description: request.description,
            },
        )
        .await?;

    Ok(ApiResponse::success())
}
