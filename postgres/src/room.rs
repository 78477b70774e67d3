//! Room queries.

use crate::{PgHotelStore, code, column, write_error};
use hotel_core::providers::RoomStore;
use hotel_core::{HotelError, NewRoom, Result, Room, RoomFilter, RoomStatus, RoomUpdate};
use sqlx::postgres::PgRow;

const ROOM_COLUMNS: &str =
    "id, name, floor, type, price, status, description, created_at, updated_at";

fn row_to_room(row: &PgRow) -> Result<Room> {
    Ok(Room {
        id: column(row, "id")?,
        name: column(row, "name")?,
        floor: column(row, "floor")?,
        room_type: column(row, "type")?,
        price: column(row, "price")?,
        status: code(row, "status", RoomStatus::from_code)?,
        description: column(row, "description")?,
        created_at: column(row, "created_at")?,
        updated_at: column(row, "updated_at")?,
    })
}

impl RoomStore for PgHotelStore {
    async fn insert_room(&self, room: &NewRoom) -> Result<Room> {
        let row = sqlx::query(&format!(
            "INSERT INTO rooms (name, floor, type, price, status, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ROOM_COLUMNS}"
        ))
        .bind(&room.name)
        .bind(room.floor)
        .bind(&room.room_type)
        .bind(room.price)
        .bind(room.status.code())
        .bind(room.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("create room", "room name already exists", &e))?;

        row_to_room(&row)
    }

    async fn get_room_by_name(&self, name: &str) -> Result<Room> {
        let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| HotelError::Store(format!("Failed to get room: {e}")))?
            .ok_or_else(|| HotelError::not_found("room", name))?;

        row_to_room(&row)
    }

    async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>> {
        let rows = sqlx::query(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms
             WHERE ($1::INTEGER IS NULL OR floor = $1)
               AND ($2::SMALLINT IS NULL OR status = $2)
             ORDER BY name"
        ))
        .bind(filter.floor)
        .bind(filter.status.map(RoomStatus::code))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to list rooms: {e}")))?;

        rows.iter().map(row_to_room).collect()
    }

    async fn update_room(&self, name: &str, update: &RoomUpdate) -> Result<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET floor = COALESCE($2, floor),
                price = COALESCE($3, price),
                status = COALESCE($4, status),
                description = COALESCE($5, description),
                updated_at = now()
            WHERE name = $1
            ",
        )
        .bind(name)
        .bind(update.floor)
        .bind(update.price)
        .bind(update.status.map(RoomStatus::code))
        .bind(update.description.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to update room: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(HotelError::not_found("room", name));
        }
        tracing::debug!(room = name, "Room updated");
        Ok(())
    }
}
