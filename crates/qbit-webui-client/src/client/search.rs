//! `search/*` methods.

use serde_json::Value;

use qbit_webui_types::{Params, QbitError, join};

use super::QbitClient;
use crate::endpoints::search;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Starts a search job and returns `{"id": ..}`.
    ///
    /// `plugins` may also be the single value `all` or `enabled`.
    pub async fn search_start<I>(
        &self,
        pattern: &str,
        plugins: I,
        category: &str,
    ) -> Result<Value, QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new()
            .with("pattern", pattern)
            .with("plugins", join(plugins, "|"))
            .with("category", category);
        self.execute(&search::START, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Stops job `id`.
    pub async fn search_stop(&self, id: i64) -> Result<(), QbitError> {
        let params = Params::new().with("id", id);
        self.execute(&search::STOP, &params).await?;
        Ok(())
    }

    /// Status of job `id`, or of every job when `None`.
    pub async fn search_status(&self, id: Option<i64>) -> Result<Value, QbitError> {
        let params = Params::new().with_opt("id", id);
        self.execute(&search::STATUS, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Results of job `id`; a negative `offset` counts from the end.
    pub async fn search_results(
        &self,
        id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Value, QbitError> {
        let params = Params::new()
            .with("id", id)
            .with_opt("limit", limit)
            .with_opt("offset", offset);
        self.execute(&search::RESULTS, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Stops job `id` and drops its results.
    pub async fn search_delete(&self, id: i64) -> Result<(), QbitError> {
        let params = Params::new().with("id", id);
        self.execute(&search::DELETE, &params).await?;
        Ok(())
    }

    /// Installed search plugins.
    pub async fn search_plugins(&self) -> Result<Value, QbitError> {
        self.execute(&search::PLUGINS, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Installs plugins from URLs or local file paths.
    pub async fn search_install_plugin<I>(&self, sources: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("sources", join(sources, "|"));
        self.execute(&search::INSTALL_PLUGIN, &params).await?;
        Ok(())
    }

    /// Uninstalls plugins by name.
    pub async fn search_uninstall_plugin<I>(&self, names: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("names", join(names, "|"));
        self.execute(&search::UNINSTALL_PLUGIN, &params).await?;
        Ok(())
    }

    /// Enables or disables plugins by name.
    pub async fn search_enable_plugin<I>(&self, names: I, enable: bool) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new()
            .with("names", join(names, "|"))
            .with("enable", enable);
        self.execute(&search::ENABLE_PLUGIN, &params).await?;
        Ok(())
    }

    /// Updates every installed plugin.
    pub async fn search_update_plugins(&self) -> Result<(), QbitError> {
        self.execute(&search::UPDATE_PLUGINS, &Params::new()).await?;
        Ok(())
    }
}
