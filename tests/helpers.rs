/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use smugbatch::v1::{ApiMethod, ClientOptions, Creds, SmugMugError, Transport};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

// Canned reply for one REST method
#[allow(dead_code)]
#[derive(Clone)]
pub(crate) enum Reply {
    Body(&'static str),
    ConnectionFailure,
}

/// Transport that answers from canned replies and records every request.
#[allow(dead_code)]
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: HashMap<ApiMethod, Reply>,
    requests: Mutex<Vec<(ApiMethod, Url)>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, method: ApiMethod, reply: Reply) -> Self {
        self.replies.insert(method, reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<(ApiMethod, Url)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn methods(&self) -> Vec<ApiMethod> {
        self.requests().into_iter().map(|(m, _)| m).collect()
    }
}

impl Transport for FakeTransport {
    async fn perform(&self, method: ApiMethod, url: &Url) -> Result<Bytes, SmugMugError> {
        self.requests.lock().unwrap().push((method, url.clone()));
        match self.replies.get(&method) {
            Some(Reply::Body(body)) => Ok(Bytes::from_static(body.as_bytes())),
            Some(Reply::ConnectionFailure) | None => Err(request_error()),
        }
    }
}

// A real reqwest error without touching the network: the url never parses.
fn request_error() -> SmugMugError {
    match reqwest::Client::new().get("not a url").build() {
        Err(err) => SmugMugError::Request(err),
        Ok(_) => panic!("request to an invalid url was built"),
    }
}

/// Value of `name` in the query of `url`
#[allow(dead_code)]
pub(crate) fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[allow(dead_code)]
pub(crate) fn get_live_settings() -> anyhow::Result<(Creds, ClientOptions)> {
    let email = std::env::var("SMUGMUG_EMAIL")?;
    let password = std::env::var("SMUGMUG_PASSWORD")?;
    let api_key = std::env::var("SMUGMUG_API_KEY")?;

    Ok((Creds::new(&email, &password), ClientOptions::new(&api_key)))
}
