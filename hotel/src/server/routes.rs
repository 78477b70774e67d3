//! Router configuration for the hotel backend.
//!
//! Builds the complete Axum router with all endpoints.

use super::state::{AppState, SessionCache};
use crate::api::{bookings, guests, rooms, users};
use crate::auth::{handlers as session, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use hotel_core::HotelStore;
use hotel_web::{correlation_id_layer, handlers::health_check};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// - `GET /health` and `POST /api/register`, `POST /auth/login` are open
/// - every other `/api` route and `/auth/logout`, `/auth/refresh` require a
///   live bearer token
///
/// Every request gets a correlation id and an HTTP trace span.
pub fn build_router<S: HotelStore, C: SessionCache>(state: AppState<S, C>) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), require_auth::<S, C>);

    let api_routes = Router::new()
        // Rooms
        .route(
            "/room",
            post(rooms::create_room::<S, C>).get(rooms::get_room::<S, C>),
        )
        .route("/rooms", get(rooms::list_rooms::<S, C>))
        .route("/room/:name", put(rooms::update_room::<S, C>))
        // Guests
        .route(
            "/guest",
            post(guests::create_guest::<S, C>).get(guests::get_guest::<S, C>),
        )
        // Bookings
        .route(
            "/booking",
            post(bookings::create_booking::<S, C>).get(bookings::get_booking::<S, C>),
        )
        .route("/payment", put(bookings::update_payment::<S, C>))
        .route("/reschedule", put(bookings::reschedule::<S, C>))
        // Accounts
        .route("/password", put(users::change_password::<S, C>))
        .route_layer(guard.clone())
        .route("/register", post(users::register::<S, C>));

    let auth_routes = Router::new()
        .route("/logout", post(session::logout::<S, C>))
        .route("/refresh", post(session::refresh::<S, C>))
        .route_layer(guard)
        .route("/login", post(session::login::<S, C>));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .nest("/auth", auth_routes)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
