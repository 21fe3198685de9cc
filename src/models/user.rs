use serde::{Deserialize, Serialize};

/// A registered account. Passwords are stored exactly as submitted and the
/// full record (password included) is what auth handlers echo back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Registration payload; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
}
