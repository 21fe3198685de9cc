use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry. Events exist only through seeding and are immutable for
/// the life of the process; there is no creation or update API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub venue: String,
    pub date: DateTime<Utc>,
    pub image_url: String,
    pub ticket_types: TicketPrices,
}

/// Unit price per ticket tier, in whole currency units (KES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPrices {
    pub membership: i64,
    pub regular: i64,
    pub vip: i64,
    pub vvip: i64,
}
