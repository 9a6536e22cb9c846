//! `transfer/*` methods.

use serde_json::Value;

use qbit_webui_types::{Params, QbitError, join};

use super::QbitClient;
use crate::endpoints::transfer;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Global transfer statistics.
    pub async fn transfer_info(&self) -> Result<Value, QbitError> {
        self.execute(&transfer::INFO, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Whether alternative speed limits are enabled.
    ///
    /// The WebUI answers `1` when they are and `0` when normal limits apply.
    pub async fn transfer_speed_limits_mode(&self) -> Result<bool, QbitError> {
        self.execute(&transfer::SPEED_LIMITS_MODE, &Params::new())
            .await
            .map(Decoded::into_bool)
    }

    /// Switches between normal and alternative speed limits.
    pub async fn transfer_toggle_speed_limits_mode(&self) -> Result<(), QbitError> {
        self.execute(&transfer::TOGGLE_SPEED_LIMITS_MODE, &Params::new())
            .await?;
        Ok(())
    }

    /// Global download limit in bytes/s, `0` when unlimited.
    pub async fn transfer_download_limit(&self) -> Result<i64, QbitError> {
        self.execute(&transfer::DOWNLOAD_LIMIT, &Params::new())
            .await
            .map(Decoded::into_int)
    }

    /// Sets the global download limit in bytes/s.
    pub async fn transfer_set_download_limit(&self, limit: i64) -> Result<(), QbitError> {
        let params = Params::new().with("limit", limit);
        self.execute(&transfer::SET_DOWNLOAD_LIMIT, &params).await?;
        Ok(())
    }

    /// Global upload limit in bytes/s, `0` when unlimited.
    pub async fn transfer_upload_limit(&self) -> Result<i64, QbitError> {
        self.execute(&transfer::UPLOAD_LIMIT, &Params::new())
            .await
            .map(Decoded::into_int)
    }

    /// Sets the global upload limit in bytes/s.
    pub async fn transfer_set_upload_limit(&self, limit: i64) -> Result<(), QbitError> {
        let params = Params::new().with("limit", limit);
        self.execute(&transfer::SET_UPLOAD_LIMIT, &params).await?;
        Ok(())
    }

    /// Bans peers given as `host:port`.
    pub async fn transfer_ban_peers<I>(&self, peers: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("peers", join(peers, "|"));
        self.execute(&transfer::BAN_PEERS, &params).await?;
        Ok(())
    }
}
