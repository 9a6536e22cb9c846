//! `app/*` methods.

use serde_json::Value;

use qbit_webui_types::{Params, QbitError};

use super::QbitClient;
use crate::endpoints::app;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Application version, e.g. `v4.6.2`.
    pub async fn app_version(&self) -> Result<String, QbitError> {
        self.execute(&app::VERSION, &Params::new())
            .await
            .map(Decoded::into_string)
    }

    /// WebUI API version, e.g. `2.9.3`.
    pub async fn app_webapi_version(&self) -> Result<String, QbitError> {
        self.execute(&app::WEBAPI_VERSION, &Params::new())
            .await
            .map(Decoded::into_string)
    }

    /// Versions of the libraries qBittorrent was built with.
    pub async fn app_build_info(&self) -> Result<Value, QbitError> {
        self.execute(&app::BUILD_INFO, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Shuts the application down.
    pub async fn app_shutdown(&self) -> Result<(), QbitError> {
        self.execute(&app::SHUTDOWN, &Params::new()).await?;
        Ok(())
    }

    /// All application preferences.
    pub async fn app_preferences(&self) -> Result<Value, QbitError> {
        self.execute(&app::PREFERENCES, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Changes the preferences present in `preferences`, a JSON object.
    pub async fn app_set_preferences(&self, preferences: &Value) -> Result<(), QbitError> {
        if !preferences.is_object() {
            return Err(QbitError::InvalidArgument(
                "preferences must be a JSON object".into(),
            ));
        }
        let params = Params::new().with("json", preferences);
        self.execute(&app::SET_PREFERENCES, &params).await?;
        Ok(())
    }

    /// Default save path for new torrents.
    pub async fn app_default_save_path(&self) -> Result<String, QbitError> {
        self.execute(&app::DEFAULT_SAVE_PATH, &Params::new())
            .await
            .map(Decoded::into_string)
    }
}
