//! Business metrics for the hotel backend.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `hotel_bookings_created_total` - Bookings accepted
//! - `hotel_payments_total{status}` - Payment updates by resulting status
//! - `hotel_reschedules_total` - Stays moved to new dates
//! - `hotel_logins_total{outcome}` - Login attempts by outcome
//!
//! Recording without an installed recorder is a no-op, so handlers can be
//! exercised in tests without an exporter.

use hotel_core::PaymentStatus;
use metrics::describe_counter;

/// Register metric descriptions.
///
/// Call once at startup, after the recorder is installed.
pub fn register_business_metrics() {
    describe_counter!(
        "hotel_bookings_created_total",
        "Total number of bookings accepted"
    );
    describe_counter!(
        "hotel_payments_total",
        "Total number of payment updates by status (pending, completed, failed, canceled, refunded)"
    );
    describe_counter!(
        "hotel_reschedules_total",
        "Total number of bookings moved to new dates"
    );
    describe_counter!(
        "hotel_logins_total",
        "Total number of login attempts by outcome (success, failure)"
    );

    tracing::info!("Business metrics registered");
}

// ============================================================================
// Metric Recording Functions
// ============================================================================

/// Record an accepted booking.
pub fn record_booking_created() {
    metrics::counter!("hotel_bookings_created_total").increment(1);
    tracing::debug!("Recorded booking_created metric");
}

/// Record an applied payment update.
pub fn record_payment(status: PaymentStatus) {
    let label = match status {
        PaymentStatus::Pending => "pending",
        PaymentStatus::Completed => "completed",
        PaymentStatus::Failed => "failed",
        PaymentStatus::Canceled => "canceled",
        PaymentStatus::Refunded => "refunded",
    };
    metrics::counter!("hotel_payments_total", "status" => label).increment(1);
    tracing::debug!(status = label, "Recorded payment metric");
}

/// Record a rescheduled stay.
pub fn record_reschedule() {
    metrics::counter!("hotel_reschedules_total").increment(1);
    tracing::debug!("Recorded reschedule metric");
}

/// Record a login attempt.
pub fn record_login(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("hotel_logins_total", "outcome" => outcome).increment(1);
}
