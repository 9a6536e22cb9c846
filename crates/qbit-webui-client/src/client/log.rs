//! `log/*` methods.

use serde_json::Value;

use qbit_webui_types::{LogFilter, Params, QbitError};

use super::QbitClient;
use crate::endpoints::log;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Main log entries matching `filter`.
    pub async fn log_main(&self, filter: &LogFilter) -> Result<Value, QbitError> {
        self.execute(&log::MAIN, &filter.to_params())
            .await
            .map(Decoded::into_json)
    }

    /// Peer log entries newer than `last_known_id` (`-1` for all).
    pub async fn log_peers(&self, last_known_id: i64) -> Result<Value, QbitError> {
        let params = Params::new().with("last_known_id", last_known_id);
        self.execute(&log::PEERS, &params)
            .await
            .map(Decoded::into_json)
    }
}
