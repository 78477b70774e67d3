//! Guest store trait.

use crate::error::Result;
use crate::types::{Guest, GuestId, NewGuest};

/// Guest store.
pub trait GuestStore: Send + Sync {
    /// Insert a guest and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the identity number is taken or the
    /// write fails.
    fn insert_guest(
        &self,
        guest: &NewGuest,
    ) -> impl std::future::Future<Output = Result<Guest>> + Send;

    /// Get a guest by id.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::NotFound` if the id is unknown.
    fn get_guest(&self, id: GuestId) -> impl std::future::Future<Output = Result<Guest>> + Send;
}
