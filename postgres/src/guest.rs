//! Guest queries.

use crate::{PgHotelStore, column, write_error};
use hotel_core::providers::GuestStore;
use hotel_core::{Guest, GuestId, HotelError, NewGuest, Result};
use sqlx::postgres::PgRow;

const GUEST_COLUMNS: &str =
    "id, first_name, last_name, identity_number, date_of_birth, phone_number, email, created_at";

fn row_to_guest(row: &PgRow) -> Result<Guest> {
    Ok(Guest {
        id: GuestId(column(row, "id")?),
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        identity_number: column(row, "identity_number")?,
        date_of_birth: column(row, "date_of_birth")?,
        phone_number: column(row, "phone_number")?,
        email: column(row, "email")?,
        created_at: column(row, "created_at")?,
    })
}

impl GuestStore for PgHotelStore {
    async fn insert_guest(&self, guest: &NewGuest) -> Result<Guest> {
        let row = sqlx::query(&format!(
            "INSERT INTO guests (first_name, last_name, identity_number, date_of_birth, phone_number, email)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {GUEST_COLUMNS}"
        ))
        .bind(&guest.first_name)
        .bind(&guest.last_name)
        .bind(&guest.identity_number)
        .bind(guest.date_of_birth)
        .bind(&guest.phone_number)
        .bind(&guest.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("create guest", "identity number already exists", &e))?;

        row_to_guest(&row)
    }

    async fn get_guest(&self, id: GuestId) -> Result<Guest> {
        let row = sqlx::query(&format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| HotelError::Store(format!("Failed to get guest: {e}")))?
            .ok_or_else(|| HotelError::not_found("guest", id))?;

        row_to_guest(&row)
    }
}
