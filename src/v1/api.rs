/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::SmugMugError;
use crate::v1::{ApiMethod, SessionId};
use bytes::Bytes;
use log::debug;
use url::Url;

// Root SmugMug API
pub const API_ORIGIN: &str = "https://api.smugmug.com";

// Path of the 1.2.0 REST endpoint under the origin
const REST_PATH: &str = "/hack/rest/1.2.0/";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("smugbatch/", env!("CARGO_PKG_VERSION"));

/// Query parameters for a REST method, apart from `method` and `APIKey`
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Performs a single request and hands back the complete response body.
pub trait Transport {
    fn perform(
        &self,
        method: ApiMethod,
        url: &Url,
    ) -> impl Future<Output = Result<Bytes, SmugMugError>> + Send;
}

impl<T: Transport + Sync> Transport for &T {
    fn perform(
        &self,
        method: ApiMethod,
        url: &Url,
    ) -> impl Future<Output = Result<Bytes, SmugMugError>> + Send {
        (**self).perform(method, url)
    }
}

/// Transport over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl HttpTransport {
    /// Creates the transport. `insecure` turns off certificate verification.
    pub fn new(insecure: bool) -> Result<Self, SmugMugError> {
        let https_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(Self { https_client })
    }
}

impl Transport for HttpTransport {
    async fn perform(&self, method: ApiMethod, url: &Url) -> Result<Bytes, SmugMugError> {
        debug!("{} request", method);
        let resp = self
            .https_client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.bytes().await?)
    }
}

/// Builds the request urls for the REST methods.
#[derive(Clone)]
pub struct Endpoints {
    base: Url,
    api_key: String,
}

impl Endpoints {
    pub fn new(origin: &str, api_key: &str) -> Result<Self, SmugMugError> {
        Ok(Self {
            base: Url::parse(origin)?.join(REST_PATH)?,
            api_key: api_key.into(),
        })
    }

    pub fn login(&self, creds: &Creds) -> Url {
        self.method_url(
            ApiMethod::LoginWithPassword,
            &[
                ("EmailAddress", creds.email.as_str()),
                ("Password", creds.password.as_str()),
            ],
        )
    }

    pub fn albums(&self, session_id: &SessionId) -> Url {
        self.method_url(ApiMethod::AlbumsGet, &[("SessionID", session_id.as_str())])
    }

    pub fn logout(&self, session_id: &SessionId) -> Url {
        self.method_url(ApiMethod::Logout, &[("SessionID", session_id.as_str())])
    }

    fn method_url(&self, method: ApiMethod, params: &ApiParams<'_>) -> Url {
        let method: &'static str = method.into();
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("method", method)
            .extend_pairs(params)
            .append_pair("APIKey", &self.api_key);
        url
    }
}

impl std::fmt::Debug for Endpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoints")
            .field("base", &self.base.as_str())
            .field("api_key", &"xxx")
            .finish()
    }
}

/// Account credentials used for `smugmug.login.withPassword`
#[derive(Default, Clone)]
pub struct Creds {
    email: String,
    password: String,
}

impl Creds {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("email", &self.email)
            .field("password", &"xxx")
            .finish()
    }
}
