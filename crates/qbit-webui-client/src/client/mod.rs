//! The [`QbitClient`] facade: session handling and the generic request cycle.
//!
//! Typed wrappers for every endpoint live in the per-group submodules.

use std::fmt;

use tracing::{debug, instrument};
use url::Url;

use qbit_webui_types::{AddTorrent, Params, QbitError};

use crate::config::QbitConfig;
use crate::endpoint::{Auth, Endpoint};
use crate::endpoints;
use crate::request::{self, Credential, HttpRequest};
use crate::response::{self, Decoded, HttpResponse};
use crate::session::{self, Session};
use crate::transport::{ReqwestTransport, Transport};

mod app;
mod log;
mod rss;
mod search;
mod sync;
mod torrents;
mod transfer;

#[cfg(test)]
mod tests;

/// Client for the qBittorrent WebUI API v2.
///
/// All calls except [`QbitClient::login`] require a session cookie obtained by
/// logging in first; without one they fail with [`QbitError::Unauthorized`]
/// before anything is sent.
pub struct QbitClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_url: Url,
    session: Session,
}

impl QbitClient {
    /// Creates a client for the WebUI described by `config`, using `reqwest`.
    ///
    /// Does not log in.
    pub fn new(config: &QbitConfig) -> Result<Self, QbitError> {
        let base_url = config.base_url()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        debug!("Created client for {}", base_url);
        Ok(Self::from_parts(base_url, transport))
    }
}

impl<T: Transport> QbitClient<T> {
    /// Create a client with a custom transport.
    /// `base_url` is the WebUI root, e.g. `http://localhost:8080`.
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, QbitError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| QbitError::InvalidArgument(format!("invalid WebUI URL: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self::from_parts(base_url, transport))
    }

    fn from_parts(base_url: Url, transport: T) -> Self {
        Self {
            transport,
            base_url,
            session: Session::new(),
        }
    }

    /// WebUI root every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session cookie is held.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Current session cookie, e.g. to reuse it from another process.
    pub fn session_cookie(&self) -> Option<String> {
        self.session.cookie()
    }

    /// Replaces the session cookie without logging in.
    pub fn set_session_cookie(&self, cookie: Option<String>) {
        self.session.set_cookie(cookie);
    }

    /// Logs in and stores the `SID` cookie.
    ///
    /// Any previous session is dropped first, so a failed login always leaves
    /// the client logged out.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<(), QbitError> {
        self.session.clear();

        let endpoint = &endpoints::auth::LOGIN;
        let params = Params::new()
            .with("username", username)
            .with("password", password);
        let credential = self.credential(endpoint)?;
        let response = self.send_form(endpoint, &credential, &params).await?;
        response::check_status(endpoint, &params, &response)?;

        let sid = session::parse_sid(response.header_values("set-cookie"))
            .ok_or(QbitError::LoginFailed)?;
        self.session.set_cookie(Some(sid));
        debug!("Logged in");
        Ok(())
    }

    /// Logs out.
    ///
    /// The local cookie is dropped whatever the server answers.
    pub async fn logout(&self) -> Result<(), QbitError> {
        let endpoint = &endpoints::auth::LOGOUT;
        let credential = self.credential(endpoint)?;
        let params = Params::new();
        let result = match self.send_form(endpoint, &credential, &params).await {
            Ok(response) => response::check_status(endpoint, &params, &response),
            Err(e) => Err(e),
        };
        self.session.clear();
        debug!("Logged out");
        result
    }

    /// Calls any form-encoded endpoint and decodes the answer.
    ///
    /// Login, logout and `torrents/add` change the session or need a multipart
    /// body, so they are refused here; use [`QbitClient::login`],
    /// [`QbitClient::logout`] and [`QbitClient::torrents_add`] instead.
    pub async fn execute(&self, endpoint: &Endpoint, params: &Params) -> Result<Decoded, QbitError> {
        if endpoint.auth == Auth::Referer
            || *endpoint == endpoints::auth::LOGOUT
            || *endpoint == endpoints::torrents::ADD
        {
            return Err(QbitError::InvalidArgument(format!(
                "{endpoint} has a dedicated method and cannot be executed directly"
            )));
        }
        let credential = self.credential(endpoint)?;
        let response = self.send_form(endpoint, &credential, params).await?;
        response::interpret(endpoint, params, &response)
    }

    /// Uploads torrents or URLs through `torrents/add`.
    pub(crate) async fn upload(&self, torrent: &AddTorrent) -> Result<Decoded, QbitError> {
        let endpoint = &endpoints::torrents::ADD;
        let credential = self.credential(endpoint)?;
        let request = request::build_add_torrent(&self.base_url, endpoint, &credential, torrent)?;
        let response = self.dispatch(endpoint, request).await?;
        response::interpret(endpoint, &torrent.options().to_params(), &response)
    }

    fn credential(&self, endpoint: &Endpoint) -> Result<Credential, QbitError> {
        match endpoint.auth {
            Auth::Referer => Ok(Credential::Referer(request::referer(&self.base_url))),
            Auth::Cookie => self
                .session
                .cookie()
                .map(Credential::Cookie)
                .ok_or_else(QbitError::not_logged_in),
        }
    }

    async fn send_form(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        params: &Params,
    ) -> Result<HttpResponse, QbitError> {
        let request = request::build_form(&self.base_url, endpoint, credential, params)?;
        self.dispatch(endpoint, request).await
    }

    async fn dispatch(
        &self,
        endpoint: &Endpoint,
        request: HttpRequest,
    ) -> Result<HttpResponse, QbitError> {
        debug!("POST {endpoint}");
        let response = self.transport.send(request).await?;
        debug!("{endpoint} answered {}", response.status);
        Ok(response)
    }
}

impl<T: Transport> fmt::Debug for QbitClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QbitClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
