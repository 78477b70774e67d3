//! Room store trait.

use crate::error::Result;
use crate::types::{NewRoom, Room, RoomFilter, RoomUpdate};

/// Room store.
///
/// Rooms are keyed by their unique name.
pub trait RoomStore: Send + Sync {
    /// Insert a new room.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the name is taken or the write fails.
    fn insert_room(&self, room: &NewRoom) -> impl std::future::Future<Output = Result<Room>> + Send;

    /// Get a room by name.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if no room has this name.
    fn get_room_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Room>> + Send;

    /// List rooms matching `filter`, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the read fails.
    fn list_rooms(
        &self,
        filter: RoomFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Room>>> + Send;

    /// Apply a partial update. Only the `Some` fields are written.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if no room has this name.
    fn update_room(
        &self,
        name: &str,
        update: &RoomUpdate,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
