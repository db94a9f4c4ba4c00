/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::SmugMugError;
use crate::v1::parsers::{ScanCursor, find_value};
use crate::v1::{AlbumRegistry, ApiMethod, Creds, Endpoints, SessionState, Transport, decode_albums};
use log::{debug, trace, warn};

const SESSION_ID_FIELD: &str = "Session id";

/// Token issued by `smugmug.login.withPassword`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Debug for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionId").field(&"xxx").finish()
    }
}

/// Decodes the body of a `smugmug.login.withPassword` response.
///
/// A body without a session id is [`SmugMugError::AuthenticationFailed`]. Rejected
/// credentials and an unexpected response look the same here.
pub fn decode_login(body: &[u8]) -> Result<SessionId, SmugMugError> {
    // Body holds the session id so only its size is logged.
    trace!("login response: {} bytes", body.len());
    find_value(body, SESSION_ID_FIELD, ScanCursor::start())?
        .map(|field| SessionId(field.value))
        .ok_or(SmugMugError::AuthenticationFailed())
}

/// The logout body carries nothing we need.
pub fn decode_logout(body: &[u8]) {
    trace!("logout response: {}", String::from_utf8_lossy(body));
}

// Live session that still has to be logged out.
#[must_use = "an active session has to be logged out"]
struct ActiveSession {
    id: SessionId,
    released: bool,
}

impl ActiveSession {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            released: false,
        }
    }

    fn release(mut self) {
        self.released = true;
    }
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        if !self.released {
            warn!("session dropped without logging out");
        }
    }
}

/// Runs login, album listing and logout in order against one transport.
///
/// A session runs once. Whenever login produced a session id, logout is attempted exactly
/// once before [`Session::run`] returns, whichever stage failed.
#[derive(Debug)]
pub struct Session<T> {
    transport: T,
    endpoints: Endpoints,
    state: SessionState,
    failed_stage: Option<SessionState>,
    logout_error: Option<SmugMugError>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            state: SessionState::Unauthenticated,
            failed_stage: None,
            logout_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Stage that was running when the session moved to [`SessionState::Failed`]
    pub fn failed_stage(&self) -> Option<SessionState> {
        self.failed_stage
    }

    /// Error from the logout request, if it failed
    pub fn logout_error(&self) -> Option<&SmugMugError> {
        self.logout_error.as_ref()
    }

    pub fn take_logout_error(&mut self) -> Option<SmugMugError> {
        self.logout_error.take()
    }

    /// Logs in with `creds`, lists the albums and logs out.
    pub async fn run(&mut self, creds: &Creds) -> Result<AlbumRegistry, SmugMugError> {
        if self.state != SessionState::Unauthenticated {
            return Err(SmugMugError::SessionConsumed());
        }

        let active = match self.login(creds).await {
            Ok(active) => active,
            Err(err) => {
                self.fail();
                return Err(err);
            }
        };

        let albums = self.list_albums(&active).await;
        if albums.is_err() {
            self.fail();
        }
        self.logout(active).await;
        albums
    }

    async fn login(&mut self, creds: &Creds) -> Result<ActiveSession, SmugMugError> {
        self.transition(SessionState::Authenticating);
        debug!("logging in as {}", creds.email());
        let url = self.endpoints.login(creds);
        let body = self
            .transport
            .perform(ApiMethod::LoginWithPassword, &url)
            .await?;
        let session_id = decode_login(&body)?;
        self.transition(SessionState::Authenticated);
        Ok(ActiveSession::new(session_id))
    }

    async fn list_albums(&mut self, active: &ActiveSession) -> Result<AlbumRegistry, SmugMugError> {
        self.transition(SessionState::ListingAlbums);
        let url = self.endpoints.albums(&active.id);
        let body = self.transport.perform(ApiMethod::AlbumsGet, &url).await?;
        let albums = decode_albums(&body)?;
        debug!("{} albums listed", albums.len());
        self.transition(SessionState::AlbumsListed);
        Ok(albums)
    }

    // Best effort. A failed logout is kept for the caller and does not fail the session.
    async fn logout(&mut self, active: ActiveSession) {
        let closing = self.state == SessionState::AlbumsListed;
        if closing {
            self.transition(SessionState::LoggingOut);
        }

        let url = self.endpoints.logout(&active.id);
        match self.transport.perform(ApiMethod::Logout, &url).await {
            Ok(body) => decode_logout(&body),
            Err(err) => {
                warn!("logout failed: {}", err);
                self.logout_error = Some(err);
            }
        }
        active.release();

        if closing {
            self.transition(SessionState::Closed);
        }
    }

    fn fail(&mut self) {
        self.failed_stage = Some(self.state);
        self.transition(SessionState::Failed);
    }

    fn transition(&mut self, to: SessionState) {
        debug!("session {} -> {}", self.state, to);
        self.state = to;
    }
}
