use thiserror::Error;

/// Error type for qBittorrent WebUI operations.
#[derive(Error, Debug)]
pub enum QbitError {
    /// No session cookie is held locally, or the server rejected the cookie with 403.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The login response was successful but carried no usable `SID` cookie.
    #[error("login failed: no auth cookie in response")]
    LoginFailed,

    /// The server banned the client IP after too many failed login attempts.
    #[error("too many failed login attempts: IP is banned, try later")]
    TooManyFailedLogins,

    /// The referenced resource does not exist on the server.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of resource, e.g. `torrent` or `search job`.
        resource: &'static str,
        /// Identifier that was looked up, e.g. the torrent hash.
        id: String,
    },

    /// The request was well formed but a server-side precondition failed.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// Malformed input, detected client-side or reported by the server.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with something the endpoint does not anticipate.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(#[from] UnexpectedResponse),

    /// Network-related errors (connection failures, timeouts, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// A torrent file could not be read for upload.
    #[error("file system error: {0}")]
    FileSystem(String),
}

/// Detail of a [`QbitError::UnexpectedResponse`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnexpectedResponse {
    /// Status code not covered by the endpoint's rules.
    #[error("status code {0}")]
    Status(u16),

    /// Body could not be parsed as JSON.
    #[error("invalid response JSON: {0}")]
    InvalidJson(String),
}

impl QbitError {
    /// Returned locally when a call needs a session and none is held.
    pub fn not_logged_in() -> Self {
        Self::Unauthorized("no auth cookie, login first".into())
    }

    /// Returned when the server answers 403 to a cookie-authenticated call.
    pub fn session_rejected() -> Self {
        Self::Unauthorized("server returned 403, login again".into())
    }
}
