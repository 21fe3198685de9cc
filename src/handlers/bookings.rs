use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::auth::CurrentUser;
use crate::models::{Booking, BookingStatus, NewBooking, TicketSelection};
use crate::state::AppState;
use crate::utils::error::AppError;

/// Booking submission as posted by the booking form. The total arrives
/// pre-computed by the client and is stored as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub event_id: i32,
    pub tickets: TicketSelection,
    pub total_amount: i64,
}

pub async fn create_booking(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let event = state
        .store
        .get_event(payload.event_id)
        .await
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    let booking = state
        .store
        .create_booking(NewBooking {
            user_id: user.id,
            event_id: event.id,
            tickets: payload.tickets,
            total_amount: payload.total_amount,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        })
        .await;

    info!(
        booking_id = booking.id,
        user_id = user.id,
        event_id = event.id,
        total_amount = booking.total_amount,
        "booking confirmed"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn list_bookings(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<Booking>> {
    Json(state.store.get_bookings_by_user(user.id).await)
}
