//! In-memory implementation of every hotel store.
//!
//! Mirrors the constraints of the PostgreSQL schema (unique room names,
//! identity numbers, register numbers and usernames; bookings must point at
//! an existing guest and room) so engine tests see the same failures.
//!
//! Any operation can be made to fail with [`InMemoryHotelStore::fail_on`],
//! which is how tests exercise the partial-write behaviour of payment
//! updates.

use chrono::{NaiveDate, Utc};
use hotel_core::providers::{BookingStore, GuestStore, RoomStore, UserStore};
use hotel_core::{
    Booking, BookingDetail, Guest, GuestId, HotelError, NewGuest, NewRoom, NewUser,
    PaymentStatus, RegisterNumber, Result, Room, RoomFilter, RoomStatus, RoomUpdate, User,
    UserId,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Store operations that can be forced to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// `insert_room`
    InsertRoom,
    /// `get_room_by_name`
    GetRoom,
    /// `update_room`
    UpdateRoom,
    /// `insert_booking`
    InsertBooking,
    /// `get_booking_detail`
    GetBookingDetail,
    /// `update_payment_status`
    UpdatePaymentStatus,
    /// `update_schedule`
    UpdateSchedule,
    /// `insert_guest`
    InsertGuest,
    /// `insert_user`
    InsertUser,
    /// `update_password`
    UpdatePassword,
}

#[derive(Debug, Default)]
struct Tables {
    rooms: BTreeMap<String, Room>,
    bookings: HashMap<RegisterNumber, Booking>,
    guests: BTreeMap<i64, Guest>,
    users: HashMap<String, User>,
    next_id: i64,
    failures: HashSet<StoreOp>,
}

impl Tables {
    fn check(&self, op: StoreOp) -> Result<()> {
        if self.failures.contains(&op) {
            return Err(HotelError::Store(format!("injected failure: {op:?}")));
        }
        Ok(())
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory hotel store.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryHotelStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| HotelError::Store("Mutex lock failed".to_string()))
    }

    /// Make every subsequent call of `op` fail with a store error.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn fail_on(&self, op: StoreOp) -> Result<()> {
        self.lock()?.failures.insert(op);
        Ok(())
    }

    /// Remove all injected failures.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn clear_failures(&self) -> Result<()> {
        self.lock()?.failures.clear();
        Ok(())
    }

    /// Insert a room directly, bypassing failure injection.
    ///
    /// # Errors
    ///
    /// Returns error if the name is taken or the lock is poisoned.
    pub fn seed_room(&self, room: NewRoom) -> Result<Room> {
        let mut tables = self.lock()?;
        insert_room(&mut tables, &room)
    }

    /// Insert a guest directly, bypassing failure injection.
    ///
    /// # Errors
    ///
    /// Returns error if the identity number is taken or the lock is poisoned.
    pub fn seed_guest(&self, guest: NewGuest) -> Result<Guest> {
        let mut tables = self.lock()?;
        insert_guest(&mut tables, &guest)
    }

    /// Current status of a room (for assertions).
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn room_status(&self, name: &str) -> Result<Option<RoomStatus>> {
        Ok(self.lock()?.rooms.get(name).map(|room| room.status))
    }

    /// Stored booking row (for assertions).
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn booking(&self, register_number: &RegisterNumber) -> Result<Option<Booking>> {
        Ok(self.lock()?.bookings.get(register_number).cloned())
    }

    /// Number of stored bookings.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn booking_count(&self) -> Result<usize> {
        Ok(self.lock()?.bookings.len())
    }
}

fn insert_room(tables: &mut Tables, room: &NewRoom) -> Result<Room> {
    if tables.rooms.contains_key(&room.name) {
        return Err(HotelError::Store(format!("room {} already exists", room.name)));
    }
    let now = Utc::now();
    let created = Room {
        id: tables.next_id(),
        name: room.name.clone(),
        floor: room.floor,
        room_type: room.room_type.clone(),
        price: room.price,
        status: room.status,
        description: room.description.clone(),
        created_at: now,
        updated_at: now,
    };
    tables.rooms.insert(created.name.clone(), created.clone());
    Ok(created)
}

fn insert_guest(tables: &mut Tables, guest: &NewGuest) -> Result<Guest> {
    if tables
        .guests
        .values()
        .any(|g| g.identity_number == guest.identity_number)
    {
        return Err(HotelError::Store(format!(
            "identity number {} already exists",
            guest.identity_number
        )));
    }
    let created = Guest {
        id: GuestId(tables.next_id()),
        first_name: guest.first_name.clone(),
        last_name: guest.last_name.clone(),
        identity_number: guest.identity_number.clone(),
        date_of_birth: guest.date_of_birth,
        phone_number: guest.phone_number.clone(),
        email: guest.email.clone(),
        created_at: Utc::now(),
    };
    tables.guests.insert(created.id.0, created.clone());
    Ok(created)
}

impl RoomStore for InMemoryHotelStore {
    async fn insert_room(&self, room: &NewRoom) -> Result<Room> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::InsertRoom)?;
        insert_room(&mut tables, room)
    }

    async fn get_room_by_name(&self, name: &str) -> Result<Room> {
        let tables = self.lock()?;
        tables.check(StoreOp::GetRoom)?;
        tables
            .rooms
            .get(name)
            .cloned()
            .ok_or_else(|| HotelError::not_found("room", name))
    }

    async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>> {
        let tables = self.lock()?;
        Ok(tables
            .rooms
            .values()
            .filter(|room| filter.matches(room))
            .cloned()
            .collect())
    }

    async fn update_room(&self, name: &str, update: &RoomUpdate) -> Result<()> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::UpdateRoom)?;
        let room = tables
            .rooms
            .get_mut(name)
            .ok_or_else(|| HotelError::not_found("room", name))?;
        if let Some(floor) = update.floor {
            room.floor = floor;
        }
        if let Some(price) = update.price {
            room.price = price;
        }
        if let Some(status) = update.status {
            room.status = status;
        }
        if let Some(description) = &update.description {
            room.description = Some(description.clone());
        }
        room.updated_at = Utc::now();
        Ok(())
    }
}

impl BookingStore for InMemoryHotelStore {
    async fn insert_booking(&self, booking: &Booking) -> Result<()> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::InsertBooking)?;
        if !tables.guests.contains_key(&booking.guest_id.0) {
            return Err(HotelError::Store(format!(
                "guest {} does not exist",
                booking.guest_id
            )));
        }
        if !tables.rooms.contains_key(&booking.room_name) {
            return Err(HotelError::Store(format!(
                "room {} does not exist",
                booking.room_name
            )));
        }
        if tables.bookings.contains_key(&booking.register_number) {
            return Err(HotelError::Store(format!(
                "register number {} already exists",
                booking.register_number
            )));
        }
        tables
            .bookings
            .insert(booking.register_number.clone(), booking.clone());
        Ok(())
    }

    async fn get_booking_detail(&self, register_number: &RegisterNumber) -> Result<BookingDetail> {
        let tables = self.lock()?;
        tables.check(StoreOp::GetBookingDetail)?;
        let not_found = || HotelError::not_found("booking", register_number);
        let booking = tables.bookings.get(register_number).ok_or_else(not_found)?;
        let guest = tables.guests.get(&booking.guest_id.0).ok_or_else(not_found)?;
        let room = tables.rooms.get(&booking.room_name).ok_or_else(not_found)?;
        Ok(BookingDetail {
            booking: booking.clone(),
            guest: guest.clone(),
            room: room.clone(),
        })
    }

    async fn update_payment_status(
        &self,
        register_number: &RegisterNumber,
        status: PaymentStatus,
    ) -> Result<()> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::UpdatePaymentStatus)?;
        let booking = tables
            .bookings
            .get_mut(register_number)
            .ok_or_else(|| HotelError::not_found("booking", register_number))?;
        booking.payment_status = status;
        Ok(())
    }

    async fn update_schedule(
        &self,
        register_number: &RegisterNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
        paid_amount: f64,
    ) -> Result<()> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::UpdateSchedule)?;
        let booking = tables
            .bookings
            .get_mut(register_number)
            .ok_or_else(|| HotelError::not_found("booking", register_number))?;
        booking.check_in = check_in;
        booking.check_out = check_out;
        booking.paid_amount = paid_amount;
        Ok(())
    }
}

impl GuestStore for InMemoryHotelStore {
    async fn insert_guest(&self, guest: &NewGuest) -> Result<Guest> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::InsertGuest)?;
        insert_guest(&mut tables, guest)
    }

    async fn get_guest(&self, id: GuestId) -> Result<Guest> {
        self.lock()?
            .guests
            .get(&id.0)
            .cloned()
            .ok_or_else(|| HotelError::not_found("guest", id))
    }
}

impl UserStore for InMemoryHotelStore {
    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::InsertUser)?;
        if tables.users.contains_key(&user.username) {
            return Err(HotelError::Store(format!(
                "username {} already exists",
                user.username
            )));
        }
        let created = User {
            id: UserId(tables.next_id()),
            name: user.name.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
        };
        tables.users.insert(created.username.clone(), created.clone());
        Ok(created)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.lock()?
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| HotelError::not_found("user", username))
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> Result<()> {
        let mut tables = self.lock()?;
        tables.check(StoreOp::UpdatePassword)?;
        let user = tables
            .users
            .get_mut(username)
            .ok_or_else(|| HotelError::not_found("user", username))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}
