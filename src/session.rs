//! Cookie-based session management for the Harbor web login.
//!
//! Harbor's login flow is the browser flow: an initial unauthenticated
//! call makes the server issue the `_xsrf` session cookie, the login
//! form is then posted with the decoded CSRF token attached, and the
//! resulting session cookie authenticates every later call. The session
//! state is tracked explicitly; it drops back to
//! [`SessionState::Unauthenticated`] whenever any request sees a 401.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use crate::client::HarborClient;
use crate::error::{Error, Result};

pub const HEALTH_PATH: &str = "api/health";
pub const LOGIN_PATH: &str = "c/login";
pub const AUTH_PING_PATH: &str = "api/users/current";

/// Authentication state of one client handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl HarborClient {
    /// Current session state.
    ///
    /// Transitions: [`login`](Self::login) succeeding moves to
    /// `Authenticated`; any response with status 401 moves back to
    /// `Unauthenticated`.
    pub fn session_state(&self) -> SessionState {
        *self.session.lock().unwrap()
    }

    /// GET `api/health` with no body. Its only purpose is to force the
    /// server to set the initial session cookie carrying the CSRF seed.
    pub async fn health_check(&self) -> Result<()> {
        let url = self.endpoint(HEALTH_PATH)?;
        let request = self.build_request(Method::GET, url);
        self.execute(request).await?;
        Ok(())
    }

    /// Logs in through the web form endpoint.
    ///
    /// Runs [`health_check`](Self::health_check) first so the `_xsrf`
    /// cookie exists, then posts `principal` and `password` as a
    /// URL-form-encoded body. No response body is decoded.
    pub async fn login(&self) -> Result<()> {
        self.health_check().await?;

        debug!(principal = %self.credentials.username, "logging in");

        let url = self.endpoint(LOGIN_PATH)?;
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("principal", &self.credentials.username)
            .append_pair("password", &self.credentials.password)
            .finish();

        let mut request = self.build_request(Method::POST, url);
        request.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        *request.body_mut() = Some(form.into());

        self.execute(request).await?;
        self.set_session_state(SessionState::Authenticated);
        Ok(())
    }

    /// Authentication probe run before every facade operation.
    ///
    /// GETs `api/users/current`; a 401 answer triggers exactly one
    /// [`login`](Self::login) attempt whose result is returned. Any
    /// other outcome of the probe, including a non-401 status error or
    /// a network failure, is returned as-is — callers must not issue
    /// their primary request after a probe failure.
    pub async fn ensure_authenticated(&self) -> Result<()> {
        let url = self.endpoint(AUTH_PING_PATH)?;
        let request = self.build_request(Method::GET, url);
        match self.execute(request).await {
            Ok(_) => Ok(()),
            Err(Error::Status { status, .. }) if status.as_u16() == 401 => self.login().await,
            Err(err) => Err(err),
        }
    }
}
