//! Cookie-based WebUI session.

use std::fmt;

use parking_lot::RwLock;

/// Name of the session cookie issued by the WebUI on login.
pub(crate) const SID_COOKIE: &str = "SID";

/// Holds the `SID` cookie of the current WebUI session.
///
/// Created empty. Only login and logout mutate it; every authenticated request
/// copies the cookie out before it is sent.
#[derive(Default)]
pub struct Session {
    cookie: RwLock<Option<String>>,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `SID` value, if logged in.
    pub fn cookie(&self) -> Option<String> {
        self.cookie.read().clone()
    }

    /// Replaces the `SID` value. Empty values are treated as logged out.
    pub fn set_cookie(&self, cookie: Option<String>) {
        *self.cookie.write() = cookie.filter(|c| !c.is_empty());
    }

    /// Forgets the `SID` value.
    pub fn clear(&self) {
        *self.cookie.write() = None;
    }

    /// Whether a `SID` value is held.
    pub fn is_logged_in(&self) -> bool {
        self.cookie.read().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the cookie.
        write!(
            f,
            "Session(cookie=<{}>)",
            if self.is_logged_in() { "set" } else { "unset" }
        )
    }
}

/// Extracts the `SID` value from a list of `Set-Cookie` header values.
///
/// Only the leading `name=value` pair of each header is considered, the name is
/// matched case-insensitively and the value runs up to the first `;`.
pub(crate) fn parse_sid<'a, I>(set_cookie: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    set_cookie.into_iter().find_map(|header| {
        let pair = header.split(';').next()?;
        let (name, value) = pair.split_once('=')?;
        let value = value.trim();
        (name.trim().eq_ignore_ascii_case(SID_COOKIE) && !value.is_empty())
            .then(|| value.to_string())
    })
}
