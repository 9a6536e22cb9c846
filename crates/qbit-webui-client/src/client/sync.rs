//! `sync/*` methods.

use serde_json::Value;

use qbit_webui_types::{Params, QbitError};

use super::QbitClient;
use crate::endpoints::sync;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Changes since response `rid`; `0` asks for a full update.
    pub async fn sync_maindata(&self, rid: i64) -> Result<Value, QbitError> {
        let params = Params::new().with("rid", rid);
        self.execute(&sync::MAINDATA, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Peer changes of torrent `hash` since response `rid`.
    pub async fn sync_torrent_peers(&self, hash: &str, rid: i64) -> Result<Value, QbitError> {
        let params = Params::new().with("hash", hash).with("rid", rid);
        self.execute(&sync::TORRENT_PEERS, &params)
            .await
            .map(Decoded::into_json)
    }
}
