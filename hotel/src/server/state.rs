//! Application state for the hotel HTTP server.
//!
//! Holds one instance of each domain service. Every service owns a cheap
//! clone of the same store, so the state is cloned per request.

use hotel_auth::providers::TokenCache;
use hotel_auth::{AuthService, PasswordHasher, TokenIssuer, UserService};
use hotel_core::{BookingEngine, GuestService, HotelStore, RoomService};

/// Token cache usable from request handlers.
pub trait SessionCache: TokenCache + Clone + 'static {}

impl<T: TokenCache + Clone + 'static> SessionCache for T {}

/// Application state shared across all HTTP handlers.
///
/// Generic over the store backend `S` (`PostgreSQL` in production, in-memory
/// in tests) and the token cache `C` (Redis or the mock).
#[derive(Clone)]
pub struct AppState<S, C> {
    /// Room inventory
    pub rooms: RoomService<S>,
    /// Guest registry
    pub guests: GuestService<S>,
    /// Booking lifecycle engine
    pub bookings: BookingEngine<S>,
    /// Back-office accounts
    pub users: UserService<S>,
    /// Sessions
    pub auth: AuthService<S, C>,
}

impl<S: HotelStore, C: SessionCache> AppState<S, C> {
    /// Create the state from a store and a token cache.
    #[must_use]
    pub fn new(store: S, cache: C, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        Self::with_engine(
            BookingEngine::new(store.clone()),
            store,
            cache,
            tokens,
            hasher,
        )
    }

    /// Create the state around a preconfigured booking engine.
    ///
    /// Lets tests inject a fixed clock and register numbers.
    #[must_use]
    pub fn with_engine(
        bookings: BookingEngine<S>,
        store: S,
        cache: C,
        tokens: TokenIssuer,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            rooms: RoomService::new(store.clone()),
            guests: GuestService::new(store.clone()),
            bookings,
            users: UserService::new(store.clone(), hasher),
            auth: AuthService::new(store, cache, tokens, hasher),
        }
    }
}
