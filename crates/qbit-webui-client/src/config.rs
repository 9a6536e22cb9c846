//! WebUI connection settings.

use std::{env, fmt, time::Duration};

use qbit_webui_types::QbitError;
use url::Url;

/// Connection settings for a qBittorrent WebUI.
#[derive(Clone, PartialEq, Eq)]
pub struct QbitConfig {
    /// Host name, optionally prefixed with a scheme (`https://seedbox.lan`).
    pub host: String,
    /// WebUI port.
    pub port: u16,
    /// WebUI user name.
    pub username: String,
    /// WebUI password.
    pub password: String,
    /// Timeout applied by the HTTP transport to every request.
    pub timeout: Duration,
}

impl Default for QbitConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 8080,
            username: "admin".into(),
            password: "adminadmin".into(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl QbitConfig {
    /// Reads the configuration from the environment, falling back to the
    /// defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: env::var("QBIT_HOST").unwrap_or(default.host),
            port: env::var("QBIT_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.port),
            username: env::var("QBIT_USERNAME").unwrap_or(default.username),
            password: env::var("QBIT_PASSWORD").unwrap_or(default.password),
            timeout: env::var("QBIT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.timeout),
        }
    }

    /// Root URL of the WebUI, e.g. `http://localhost:8080/`.
    pub fn base_url(&self) -> Result<Url, QbitError> {
        let raw = if self.host.contains("://") {
            format!("{}:{}/", self.host.trim_end_matches('/'), self.port)
        } else {
            format!("http://{}:{}/", self.host, self.port)
        };
        Url::parse(&raw)
            .map_err(|e| QbitError::InvalidArgument(format!("invalid WebUI URL {raw}: {e}")))
    }
}

impl fmt::Debug for QbitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials.
        write!(
            f,
            "QbitConfig(host=\"{}\", port={}, username=\"{}\", password=<{}>, timeout={:?})",
            self.host,
            self.port,
            self.username,
            if self.password.is_empty() {
                "unset"
            } else {
                "set"
            },
            self.timeout,
        )
    }
}
