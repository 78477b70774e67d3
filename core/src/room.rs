//! Room inventory service.

use crate::error::{HotelError, Result};
use crate::presenter::RoomView;
use crate::providers::RoomStore;
use crate::types::{NewRoom, RoomFilter, RoomUpdate};

/// Create, read, list and patch rooms.
#[derive(Clone)]
pub struct RoomService<S> {
    store: S,
}

impl<S: RoomStore> RoomService<S> {
    /// Create a new room service.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a room to the inventory.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank name or type, a non-positive floor
    /// or price, and `Store` if the name is already taken.
    #[tracing::instrument(skip(self, room), fields(name = %room.name))]
    pub async fn create_room(&self, room: NewRoom) -> Result<RoomView> {
        validate_new_room(&room)?;
        let created = self.store.insert_room(&room).await?;
        tracing::info!(id = created.id, "Room created");
        Ok(RoomView::from(&created))
    }

    /// Look a room up by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no room has this name.
    pub async fn room_by_name(&self, name: &str) -> Result<RoomView> {
        let room = self.store.get_room_by_name(name).await?;
        Ok(RoomView::from(&room))
    }

    /// List rooms, optionally narrowed by floor and status.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    pub async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<RoomView>> {
        let rooms = self.store.list_rooms(filter).await?;
        Ok(rooms.iter().map(RoomView::from).collect())
    }

    /// Patch a room. Only the provided fields change.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty or out-of-range update and
    /// `NotFound` if no room has this name.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_room(&self, name: &str, update: RoomUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(HotelError::Validation("nothing to update".to_string()));
        }
        if update.floor.is_some_and(|floor| floor <= 0) {
            return Err(HotelError::Validation("floor must be greater than 0".to_string()));
        }
        if update.price.is_some_and(|price| price <= 0.0) {
            return Err(HotelError::Validation("price must be greater than 0".to_string()));
        }
        self.store.update_room(name, &update).await
    }
}

fn validate_new_room(room: &NewRoom) -> Result<()> {
    if room.name.trim().is_empty() {
        return Err(HotelError::Validation("name is required".to_string()));
    }
    if room.room_type.trim().is_empty() {
        return Err(HotelError::Validation("type is required".to_string()));
    }
    if room.floor <= 0 {
        return Err(HotelError::Validation("floor must be greater than 0".to_string()));
    }
    if room.price <= 0.0 {
        return Err(HotelError::Validation("price must be greater than 0".to_string()));
    }
    Ok(())
}
