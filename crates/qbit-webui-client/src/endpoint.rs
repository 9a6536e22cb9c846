//! Static description of a WebUI API method.

use std::fmt;

use qbit_webui_types::{Params, QbitError};

/// Status code every WebUI method answers on success.
pub const SUCCESS: u16 = 200;

/// First path segment after `/api/v2/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Group {
    Auth,
    App,
    Log,
    Sync,
    Transfer,
    Torrents,
    Rss,
    Search,
}

impl Group {
    /// Wire name of the group.
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Auth => "auth",
            Group::App => "app",
            Group::Log => "log",
            Group::Sync => "sync",
            Group::Transfer => "transfer",
            Group::Torrents => "torrents",
            Group::Rss => "rss",
            Group::Search => "search",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a request proves who sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// `Cookie: SID=...` from the current session. Fails locally when logged out.
    Cookie,
    /// `Referer: <origin>` only. Used by login, before a cookie exists.
    Referer,
}

/// How a successful response body turns into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Trimmed body text.
    String,
    /// Leading integer of the trimmed body, 0 when there is none.
    Int,
    /// Trimmed body is non-empty and not `0`.
    Bool,
    /// Body parsed as JSON.
    Json,
    /// Body discarded.
    None,
}

/// Error raised for a specific status code of a specific endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// The session cookie was rejected.
    Unauthorized,
    /// The client IP is banned after failed logins.
    TooManyFailedLogins,
    /// A resource named by request parameter `param` does not exist.
    NotFound {
        /// Kind of resource.
        resource: &'static str,
        /// Request parameter holding the identifier.
        param: &'static str,
    },
    /// Server-side precondition failed.
    OperationFailed(&'static str),
    /// The server rejected an argument, optionally the value of `param`.
    InvalidArgument {
        /// What was wrong.
        reason: &'static str,
        /// Request parameter whose value is appended to the message.
        param: Option<&'static str>,
    },
}

impl StatusRule {
    /// Builds the error for this rule, pulling identifiers from `params`.
    pub fn to_error(&self, params: &Params) -> QbitError {
        match *self {
            StatusRule::Unauthorized => QbitError::session_rejected(),
            StatusRule::TooManyFailedLogins => QbitError::TooManyFailedLogins,
            StatusRule::NotFound { resource, param } => QbitError::NotFound {
                resource,
                id: params.get(param).unwrap_or_default().to_string(),
            },
            StatusRule::OperationFailed(message) => QbitError::OperationFailed(message.into()),
            StatusRule::InvalidArgument { reason, param } => {
                match param.and_then(|p| params.get(p)) {
                    Some(value) => QbitError::InvalidArgument(format!("{reason}: {value}")),
                    None => QbitError::InvalidArgument(reason.into()),
                }
            }
        }
    }
}

/// A single WebUI API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path group.
    pub group: Group,
    /// Method name, the last path segment.
    pub name: &'static str,
    /// Credential attached to the request.
    pub auth: Auth,
    /// Decoding applied to a successful body.
    pub decoder: Decoder,
    /// Errors raised for specific status codes, checked before the success code.
    pub rules: &'static [(u16, StatusRule)],
}

impl Endpoint {
    /// A cookie-authenticated endpoint without special status codes.
    pub const fn new(group: Group, name: &'static str, decoder: Decoder) -> Self {
        Self {
            group,
            name,
            auth: Auth::Cookie,
            decoder,
            rules: &[],
        }
    }

    /// Sets the status-code rules.
    pub const fn with_rules(self, rules: &'static [(u16, StatusRule)]) -> Self {
        Self { rules, ..self }
    }

    /// Authenticates with `Referer` instead of the session cookie.
    pub const fn with_referer(self) -> Self {
        Self {
            auth: Auth::Referer,
            ..self
        }
    }

    /// Absolute request path, e.g. `/api/v2/torrents/info`.
    pub fn path(&self) -> String {
        format!("/api/v2/{}/{}", self.group, self.name)
    }

    /// The rule registered for `status`, if any.
    pub fn rule_for(&self, status: u16) -> Option<&StatusRule> {
        self.rules
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, rule)| rule)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.name)
    }
}
