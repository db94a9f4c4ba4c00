/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum SmugMugError {
    #[error("Request network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Failed serializing to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication failed: no session id in the login response")]
    AuthenticationFailed(),

    #[error("API Response is malformed: {0}")]
    ResponseMalformed(String),

    #[error("Session has already been run")]
    SessionConsumed(),
}

impl SmugMugError {
    /// True when the request itself failed (network error or non-success HTTP status).
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
