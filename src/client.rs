// This file contains the implementation of the HarborClient struct,
// which handles communication with the Harbor management API: request
// construction against the base URL, CSRF token injection from the
// session cookie jar, and JSON response decoding.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Request, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::session::SessionState;

/// Fixed browser-like user agent; Harbor's web login endpoint rejects
/// clients it does not recognize as browsers.
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 Gecko/20100101 Firefox/50.0";

/// Header carrying the CSRF token on every request once the session
/// cookie has been issued.
const X_XSRF_TOKEN: HeaderName = HeaderName::from_static("x-xsrftoken");

/// Name of the session cookie holding the CSRF seed.
const XSRF_COOKIE: &str = "_xsrf";

/// Username and password used to populate the login form.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

pub struct HarborClientBuilder {
    address: String,
    credentials: Credentials,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl HarborClientBuilder {
    pub fn new(address: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            address: address.into(),
            credentials,
            timeout: None,
            accept_invalid_certs: false,
        }
    }

    /// Overall request timeout. The default leaves requests without a
    /// deadline, matching the underlying transport's default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Accept self-signed certificates, common on private Harbor
    /// deployments.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<HarborClient> {
        let base_url = Url::parse(&self.address)?;

        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder().cookie_provider(Arc::clone(&jar));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(Error::Network)?;

        Ok(HarborClient {
            base_url,
            credentials: self.credentials,
            http,
            jar,
            session: Mutex::new(SessionState::Unauthenticated),
        })
    }
}

/// Handle to one Harbor instance.
///
/// Owns the base URL, the credential pair, the HTTP client with its
/// persistent cookie jar, and the current session state. Create it once
/// per target server and reach the per-resource facades through
/// [`projects`](Self::projects), [`repositories`](Self::repositories)
/// and [`search`](Self::search).
#[derive(Debug)]
pub struct HarborClient {
    pub(crate) base_url: Url,
    pub(crate) credentials: Credentials,
    http: Client,
    jar: Arc<Jar>,
    pub(crate) session: Mutex<SessionState>,
}

impl HarborClient {
    pub fn new(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(address, Credentials::new(username, password)).build()
    }

    pub fn builder(address: impl Into<String>, credentials: Credentials) -> HarborClientBuilder {
        HarborClientBuilder::new(address, credentials)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative API path against the base URL using standard
    /// URL reference resolution.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Bodyless request with the fixed user agent.
    pub(crate) fn build_request(&self, method: Method, url: Url) -> Request {
        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        request
    }

    /// Request carrying a JSON-encoded body.
    pub(crate) fn build_json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Request> {
        let payload = serde_json::to_vec(body)?;
        let mut request = self.build_request(method, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(payload.into());
        Ok(request)
    }

    /// Sends a request, injecting the CSRF token first.
    ///
    /// The token is re-derived from the jar's current `_xsrf` cookie at
    /// the moment of sending; the jar itself is updated from any
    /// `Set-Cookie` headers on the response. A non-2xx status becomes
    /// [`Error::Status`] and the response body is discarded; a 401
    /// additionally drops the session back to unauthenticated.
    pub(crate) async fn execute(&self, mut request: Request) -> Result<Response> {
        if let Some(token) = self.csrf_token() {
            if let Ok(value) = HeaderValue::from_str(&token) {
                request.headers_mut().insert(X_XSRF_TOKEN, value);
            }
        }

        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await.map_err(Error::Network)?;
        let status = response.status();
        debug!(method = %method, url = %url, status = %status, "request completed");

        if status == StatusCode::UNAUTHORIZED {
            self.set_session_state(SessionState::Unauthenticated);
        }
        if !status.is_success() {
            return Err(Error::Status {
                method,
                url,
                status,
            });
        }

        Ok(response)
    }

    /// Sends a request and decodes the 2xx response body as JSON.
    pub(crate) async fn execute_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await.map_err(Error::Decode)
    }

    /// Current CSRF token, if the session cookie has been issued.
    ///
    /// The `_xsrf` cookie value is a `|`-delimited envelope whose first
    /// segment is the base64-encoded token.
    pub(crate) fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let cookies = header.to_str().ok()?;
        for pair in cookies.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next()? != XSRF_COOKIE {
                continue;
            }
            let value = parts.next().unwrap_or("");
            let seed = value.split('|').next().unwrap_or("");
            let decoded = STANDARD.decode(seed).ok()?;
            return String::from_utf8(decoded).ok();
        }
        None
    }

    pub(crate) fn set_session_state(&self, state: SessionState) {
        *self.session.lock().unwrap() = state;
    }
}
