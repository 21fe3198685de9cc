use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub mod auth;
pub mod bookings;
pub mod events;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthPayload {
        status: "ok",
        service: "tikiti-api",
    })
}
