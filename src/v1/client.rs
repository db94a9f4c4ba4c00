/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::SmugMugError;
use crate::v1::{API_ORIGIN, AlbumRegistry, Creds, Endpoints, HttpTransport, Session, SessionState};

/// Settings for building a [`Client`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub api_origin: String,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl ClientOptions {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
            api_origin: API_ORIGIN.into(),
            insecure: false,
        }
    }
}

/// Outcome of one login, list, logout run
#[derive(Debug)]
pub struct SessionReport {
    pub state: SessionState,
    pub failed_stage: Option<SessionState>,
    pub albums: Result<AlbumRegistry, SmugMugError>,
    pub logout_error: Option<SmugMugError>,
}

impl SessionReport {
    pub fn is_success(&self) -> bool {
        self.state == SessionState::Closed
    }
}

/// Example
/// ```rust,no_run
/// use smugbatch::v1::{Client, ClientOptions, Creds};
///
/// async fn print_albums() -> Result<(), smugbatch::v1::SmugMugError> {
///     let client = Client::new(
///         Creds::new("me@example.com", "password"),
///         &ClientOptions::new("api key"),
///     )?;
///     let report = client.list_albums().await;
///     for album in report.albums? {
///         println!("{}\t{}", album.id, album.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    creds: Creds,
    endpoints: Endpoints,
    transport: HttpTransport,
}

impl Client {
    pub fn new(creds: Creds, options: &ClientOptions) -> Result<Self, SmugMugError> {
        Ok(Self {
            creds,
            endpoints: Endpoints::new(&options.api_origin, &options.api_key)?,
            transport: HttpTransport::new(options.insecure)?,
        })
    }

    /// Logs in, retrieves the album list and logs out again
    pub async fn list_albums(&self) -> SessionReport {
        let mut session = Session::new(&self.transport, self.endpoints.clone());
        let albums = session.run(&self.creds).await;
        SessionReport {
            state: session.state(),
            failed_stage: session.failed_stage(),
            albums,
            logout_error: session.take_logout_error(),
        }
    }
}
