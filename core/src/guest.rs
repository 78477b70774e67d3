//! Guest registry service.

use crate::error::{HotelError, Result};
use crate::presenter::GuestView;
use crate::providers::GuestStore;
use crate::types::{GuestId, NewGuest};

/// Register and look up guests.
#[derive(Clone)]
pub struct GuestService<S> {
    store: S,
}

impl<S: GuestStore> GuestService<S> {
    /// Create a new guest service.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a guest and return its id.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a field is blank and `Store` if the identity
    /// number is already registered.
    #[tracing::instrument(skip(self, guest))]
    pub async fn create_guest(&self, guest: NewGuest) -> Result<GuestId> {
        let required = [
            ("first_name", &guest.first_name),
            ("last_name", &guest.last_name),
            ("identity_number", &guest.identity_number),
            ("phone_number", &guest.phone_number),
            ("email", &guest.email),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(HotelError::Validation(format!("{field} is required")));
        }

        let created = self.store.insert_guest(&guest).await?;
        tracing::info!(id = %created.id, "Guest registered");
        Ok(created.id)
    }

    /// Look a guest up by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub async fn guest(&self, id: GuestId) -> Result<GuestView> {
        let guest = self.store.get_guest(id).await?;
        Ok(GuestView::from(&guest))
    }
}
