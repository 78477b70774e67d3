//! User queries.

use crate::{PgHotelStore, column, write_error};
use hotel_core::providers::UserStore;
use hotel_core::{HotelError, NewUser, Result, User, UserId};
use sqlx::postgres::PgRow;

fn row_to_user(row: &PgRow) -> Result<User> {
    Ok(User {
        id: UserId(column(row, "id")?),
        name: column(row, "name")?,
        username: column(row, "username")?,
        password_hash: column(row, "password")?,
        email: column(row, "email")?,
        created_at: column(row, "created_at")?,
    })
}

impl UserStore for PgHotelStore {
    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let row = sqlx::query(
            r"
            INSERT INTO users (name, username, password, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, username, password, email, created_at
            ",
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("create user", "username already exists", &e))?;

        row_to_user(&row)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User> {
        let row = sqlx::query(
            "SELECT id, name, username, password, email, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to get user: {e}")))?
        .ok_or_else(|| HotelError::not_found("user", username))?;

        row_to_user(&row)
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE users SET password = $2, updated_at = now() WHERE username = $1",
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to update password: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(HotelError::not_found("user", username));
        }
        Ok(())
    }
}
