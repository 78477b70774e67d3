//! `PostgreSQL` stores for the hotel backend.
//!
//! [`PgHotelStore`] implements every store trait from `hotel-core` over a
//! single connection pool:
//!
//! - Rooms keyed by unique name, with partial updates and filtered listing
//! - Bookings keyed by register number, joined with guest and room for detail
//! - Guests and users with unique identity numbers and usernames
//!
//! Status and method enums are stored as their integer codes.
//!
//! # Example
//!
//! ```ignore
//! use hotel_postgres::PgHotelStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PgHotelStore::connect("postgres://localhost/hotel", 10).await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod booking;
mod guest;
mod room;
mod user;

use hotel_core::{HotelError, Result};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, Row};
use std::time::Duration;

/// `PostgreSQL` implementation of all hotel stores.
///
/// Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct PgHotelStore {
    pool: PgPool,
}

impl PgHotelStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the database is unreachable.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await
            .map_err(|e| HotelError::Store(format!("Failed to connect to database: {e}")))?;
        Ok(Self { pool })
    }

    /// Run the bundled schema migrations.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if a migration fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| HotelError::Store(format!("Migration failed: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Cheap connectivity probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the database does not answer.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| HotelError::Store(format!("Database ping failed: {e}")))?;
        Ok(())
    }
}

/// Read a column, mapping decode failures to `HotelError::Store`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| HotelError::Store(format!("Failed to decode column {name}: {e}")))
}

/// Decode a stored enum code.
pub(crate) fn code<T>(row: &PgRow, name: &str, parse: fn(i16) -> Option<T>) -> Result<T> {
    let raw: i16 = column(row, name)?;
    parse(raw).ok_or_else(|| HotelError::Store(format!("Invalid {name} code {raw}")))
}

/// Map a write error, naming the unique constraint that was hit if any.
pub(crate) fn write_error(action: &str, duplicate: &str, e: &sqlx::Error) -> HotelError {
    if let sqlx::Error::Database(db_err) = e {
        if db_err.is_unique_violation() {
            return HotelError::Store(duplicate.to_string());
        }
    }
    HotelError::Store(format!("Failed to {action}: {e}"))
}
