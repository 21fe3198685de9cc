use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::TicketPrices;

/// A stored booking. Bookings are insert-only: nothing in the API mutates or
/// deletes one, so `status` never leaves `Confirmed` in practice even though
/// the lifecycle models more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub tickets: TicketSelection,
    pub total_amount: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking payload as handed to the store; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub event_id: i32,
    pub tickets: TicketSelection,
    pub total_amount: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Requested quantity per tier, as entered into the booking form. Tiers left
/// off the wire default to zero; negative quantities are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSelection {
    #[serde(default)]
    pub membership: u32,
    #[serde(default)]
    pub regular: u32,
    #[serde(default)]
    pub vip: u32,
    #[serde(default)]
    pub vvip: u32,
}

/// Rejection surfaced by the booking form before anything is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("You must select at least one ticket")]
pub struct EmptySelection;

impl TicketSelection {
    /// Order total for this selection at the given per-tier prices.
    pub fn total(&self, prices: &TicketPrices) -> i64 {
        i64::from(self.membership) * prices.membership
            + i64::from(self.regular) * prices.regular
            + i64::from(self.vip) * prices.vip
            + i64::from(self.vvip) * prices.vvip
    }

    pub fn is_empty(&self) -> bool {
        self.membership == 0 && self.regular == 0 && self.vip == 0 && self.vvip == 0
    }

    /// Form-level gate: a selection with every quantity at zero must not be
    /// submitted at all.
    pub fn validate(&self) -> Result<(), EmptySelection> {
        if self.is_empty() {
            Err(EmptySelection)
        } else {
            Ok(())
        }
    }
}
