//! Booking queries.

use crate::{PgHotelStore, code, column, write_error};
use chrono::NaiveDate;
use hotel_core::providers::BookingStore;
use hotel_core::{
    Booking, BookingDetail, Guest, GuestId, HotelError, PaymentMethod, PaymentStatus,
    RegisterNumber, Result, Room, RoomStatus,
};
use sqlx::postgres::PgRow;

fn row_to_detail(row: &PgRow) -> Result<BookingDetail> {
    let guest_id = GuestId(column(row, "guest_id")?);
    let room_name: String = column(row, "room_name")?;
    let register_number: String = column(row, "register_number")?;

    let booking = Booking {
        register_number: RegisterNumber::from_string(register_number),
        guest_id,
        room_name: room_name.clone(),
        check_in: column(row, "check_in")?,
        check_out: column(row, "check_out")?,
        paid_amount: column(row, "paid_amount")?,
        payment_method: code(row, "payment_method", PaymentMethod::from_code)?,
        payment_status: code(row, "payment_status", PaymentStatus::from_code)?,
        additional_request: column(row, "additional_request")?,
        created_at: column(row, "created_at")?,
    };
    let guest = Guest {
        id: guest_id,
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        identity_number: column(row, "identity_number")?,
        date_of_birth: column(row, "date_of_birth")?,
        phone_number: column(row, "phone_number")?,
        email: column(row, "email")?,
        created_at: column(row, "guest_created_at")?,
    };
    let room = Room {
        id: column(row, "room_id")?,
        name: room_name,
        floor: column(row, "floor")?,
        room_type: column(row, "room_type")?,
        price: column(row, "price")?,
        status: code(row, "room_status", RoomStatus::from_code)?,
        description: column(row, "description")?,
        created_at: column(row, "room_created_at")?,
        updated_at: column(row, "room_updated_at")?,
    };

    Ok(BookingDetail {
        booking,
        guest,
        room,
    })
}

impl BookingStore for PgHotelStore {
    async fn insert_booking(&self, booking: &Booking) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO bookings (
                register_number, guest_id, room_name, check_in, check_out,
                paid_amount, payment_method, payment_status, additional_request, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(booking.register_number.as_str())
        .bind(booking.guest_id.0)
        .bind(&booking.room_name)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.paid_amount)
        .bind(booking.payment_method.code())
        .bind(booking.payment_status.code())
        .bind(booking.additional_request.as_deref())
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("create booking", "register number already exists", &e))?;

        Ok(())
    }

    async fn get_booking_detail(&self, register_number: &RegisterNumber) -> Result<BookingDetail> {
        let row = sqlx::query(
            r"
            SELECT
                b.register_number, b.guest_id, b.room_name, b.check_in, b.check_out,
                b.paid_amount, b.payment_method, b.payment_status, b.additional_request,
                b.created_at,
                g.first_name, g.last_name, g.identity_number, g.date_of_birth,
                g.phone_number, g.email, g.created_at AS guest_created_at,
                r.id AS room_id, r.floor, r.type AS room_type, r.price,
                r.status AS room_status, r.description,
                r.created_at AS room_created_at, r.updated_at AS room_updated_at
            FROM bookings b
            JOIN guests g ON g.id = b.guest_id
            JOIN rooms r ON r.name = b.room_name
            WHERE b.register_number = $1
            ",
        )
        .bind(register_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to get booking: {e}")))?
        .ok_or_else(|| HotelError::not_found("booking", register_number))?;

        row_to_detail(&row)
    }

    async fn update_payment_status(
        &self,
        register_number: &RegisterNumber,
        status: PaymentStatus,
    ) -> Result<()> {
        let result = sqlx::query(
            "UPDATE bookings SET payment_status = $2, updated_at = now() WHERE register_number = $1",
        )
        .bind(register_number.as_str())
        .bind(status.code())
        .execute(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to update payment status: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(HotelError::not_found("booking", register_number));
        }
        Ok(())
    }

    async fn update_schedule(
        &self,
        register_number: &RegisterNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
        paid_amount: f64,
    ) -> Result<()> {
        let result = sqlx::query(
            r"
            UPDATE bookings
            SET check_in = $2, check_out = $3, paid_amount = $4, updated_at = now()
            WHERE register_number = $1
            ",
        )
        .bind(register_number.as_str())
        .bind(check_in)
        .bind(check_out)
        .bind(paid_amount)
        .execute(&self.pool)
        .await
        .map_err(|e| HotelError::Store(format!("Failed to reschedule booking: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(HotelError::not_found("booking", register_number));
        }
        Ok(())
    }
}
