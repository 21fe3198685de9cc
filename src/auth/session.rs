use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the browser-held session cookie.
pub const SESSION_COOKIE: &str = "tikiti_sid";

/// Server-side session records: opaque token -> authenticated user id.
///
/// The map is the whole story — sessions live as long as the process and are
/// dropped on logout. Swapping in an external store would change only this
/// type.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, i32>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes a session for `user_id` and returns its token.
    pub async fn create(&self, user_id: i32) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(token, user_id);
        token
    }

    /// The user id behind `token`, if the session is live.
    pub async fn user_id(&self, token: Uuid) -> Option<i32> {
        self.sessions.read().await.get(&token).copied()
    }

    /// Ends the session. Unknown tokens are a no-op, so logout is idempotent.
    pub async fn destroy(&self, token: Uuid) {
        self.sessions.write().await.remove(&token);
    }
}

/// Extracts the session token from the request's `Cookie` header.
pub fn token_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

/// `Set-Cookie` value establishing a session in the browser.
pub fn session_cookie(token: Uuid) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value instructing the browser to drop the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[tokio::test]
    async fn created_session_resolves_to_its_user() {
        let store = SessionStore::new();

        let token = store.create(7).await;
        assert_eq!(store.user_id(token).await, Some(7));
    }

    #[tokio::test]
    async fn destroy_is_idempotent() {
        let store = SessionStore::new();

        let token = store.create(7).await;
        store.destroy(token).await;
        store.destroy(token).await;
        assert_eq!(store.user_id(token).await, None);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let store = SessionStore::new();
        assert_eq!(store.user_id(Uuid::new_v4()).await, None);
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={token}; lang=en"))
                .unwrap(),
        );

        assert_eq!(token_from_headers(&headers), Some(token));
    }

    #[test]
    fn missing_or_malformed_cookie_yields_none() {
        assert_eq!(token_from_headers(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("tikiti_sid=not-a-uuid"),
        );
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
