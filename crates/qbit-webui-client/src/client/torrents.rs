//! `torrents/*` methods, including categories and tags.

use serde_json::Value;

use qbit_webui_types::{AddTorrent, Hashes, Params, QbitError, TorrentListParams, join};

use super::QbitClient;
use crate::endpoint::Endpoint;
use crate::endpoints::torrents;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Torrents matching `query`.
    pub async fn torrents_info(&self, query: &TorrentListParams) -> Result<Value, QbitError> {
        self.execute(&torrents::INFO, &query.to_params())
            .await
            .map(Decoded::into_json)
    }

    /// Generic properties of torrent `hash`.
    pub async fn torrents_properties(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::PROPERTIES, hash).await
    }

    /// Trackers of torrent `hash`.
    pub async fn torrents_trackers(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::TRACKERS, hash).await
    }

    /// Web seeds of torrent `hash`.
    pub async fn torrents_webseeds(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::WEBSEEDS, hash).await
    }

    /// Files of torrent `hash`.
    pub async fn torrents_files(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::FILES, hash).await
    }

    /// Per-piece download state of torrent `hash`.
    pub async fn torrents_piece_states(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::PIECE_STATES, hash).await
    }

    /// Piece hashes of torrent `hash`.
    pub async fn torrents_piece_hashes(&self, hash: &str) -> Result<Value, QbitError> {
        self.by_hash(&torrents::PIECE_HASHES, hash).await
    }

    /// Pauses the selected torrents.
    pub async fn torrents_pause(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::PAUSE, hashes).await
    }

    /// Resumes the selected torrents.
    pub async fn torrents_resume(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::RESUME, hashes).await
    }

    /// Removes torrents, and their downloaded data when `delete_files` is set.
    pub async fn torrents_delete(
        &self,
        hashes: impl Into<Hashes>,
        delete_files: bool,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("deleteFiles", delete_files);
        self.execute(&torrents::DELETE, &params).await?;
        Ok(())
    }

    /// Rechecks downloaded data of the selected torrents.
    pub async fn torrents_recheck(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::RECHECK, hashes).await
    }

    /// Reannounces the selected torrents to their trackers.
    pub async fn torrents_reannounce(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::REANNOUNCE, hashes).await
    }

    /// Adds torrents from URLs and/or uploads `.torrent` files.
    pub async fn torrents_add(&self, torrent: &AddTorrent) -> Result<(), QbitError> {
        self.upload(torrent).await?;
        Ok(())
    }

    /// Adds tracker URLs to torrent `hash`.
    pub async fn torrents_add_trackers<I>(&self, hash: &str, urls: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("hash", hash).with("urls", join(urls, "\n"));
        self.execute(&torrents::ADD_TRACKERS, &params).await?;
        Ok(())
    }

    /// Replaces tracker `orig_url` of torrent `hash` with `new_url`.
    pub async fn torrents_edit_tracker(
        &self,
        hash: &str,
        orig_url: &str,
        new_url: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with("origUrl", orig_url)
            .with("newUrl", new_url);
        self.execute(&torrents::EDIT_TRACKER, &params).await?;
        Ok(())
    }

    /// Removes tracker URLs from torrent `hash`.
    pub async fn torrents_remove_trackers<I>(&self, hash: &str, urls: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("hash", hash).with("urls", join(urls, "|"));
        self.execute(&torrents::REMOVE_TRACKERS, &params).await?;
        Ok(())
    }

    /// Adds peers given as `host:port` to the selected torrents.
    pub async fn torrents_add_peers<I>(
        &self,
        hashes: impl Into<Hashes>,
        peers: I,
    ) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("peers", join(peers, "|"));
        self.execute(&torrents::ADD_PEERS, &params).await?;
        Ok(())
    }

    /// Moves torrents one step up the queue. Needs queueing enabled.
    pub async fn torrents_increase_prio(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::INCREASE_PRIO, hashes).await
    }

    /// Moves torrents one step down the queue. Needs queueing enabled.
    pub async fn torrents_decrease_prio(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::DECREASE_PRIO, hashes).await
    }

    /// Moves torrents to the top of the queue. Needs queueing enabled.
    pub async fn torrents_top_prio(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::TOP_PRIO, hashes).await
    }

    /// Moves torrents to the bottom of the queue. Needs queueing enabled.
    pub async fn torrents_bottom_prio(&self, hashes: impl Into<Hashes>) -> Result<(), QbitError> {
        self.on_hashes(&torrents::BOTTOM_PRIO, hashes).await
    }

    /// Sets the priority of files `ids` of torrent `hash`
    /// (`0` skip, `1` normal, `6` high, `7` maximal).
    pub async fn torrents_file_prio(
        &self,
        hash: &str,
        ids: &[u32],
        priority: u8,
    ) -> Result<(), QbitError> {
        let ids = join(ids.iter().map(u32::to_string), "|");
        let params = Params::new()
            .with("hash", hash)
            .with("id", ids)
            .with("priority", priority);
        self.execute(&torrents::FILE_PRIO, &params).await?;
        Ok(())
    }

    /// Download limits of the selected torrents, keyed by hash.
    pub async fn torrents_download_limit(
        &self,
        hashes: impl Into<Hashes>,
    ) -> Result<Value, QbitError> {
        let params = Params::new().with("hashes", hashes.into());
        self.execute(&torrents::DOWNLOAD_LIMIT, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Sets the download limit of the selected torrents in bytes/s.
    pub async fn torrents_set_download_limit(
        &self,
        hashes: impl Into<Hashes>,
        limit: i64,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("limit", limit);
        self.execute(&torrents::SET_DOWNLOAD_LIMIT, &params).await?;
        Ok(())
    }

    /// Sets ratio and seeding time limits; `-2` uses the global limit, `-1` none.
    pub async fn torrents_set_share_limits(
        &self,
        hashes: impl Into<Hashes>,
        ratio_limit: f64,
        seeding_time_limit: i64,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("ratioLimit", ratio_limit)
            .with("seedingTimeLimit", seeding_time_limit);
        self.execute(&torrents::SET_SHARE_LIMITS, &params).await?;
        Ok(())
    }

    /// Upload limits of the selected torrents, keyed by hash.
    pub async fn torrents_upload_limit(&self, hashes: impl Into<Hashes>) -> Result<Value, QbitError> {
        let params = Params::new().with("hashes", hashes.into());
        self.execute(&torrents::UPLOAD_LIMIT, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Sets the upload limit of the selected torrents in bytes/s.
    pub async fn torrents_set_upload_limit(
        &self,
        hashes: impl Into<Hashes>,
        limit: i64,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("limit", limit);
        self.execute(&torrents::SET_UPLOAD_LIMIT, &params).await?;
        Ok(())
    }

    /// Moves the selected torrents to `location`.
    pub async fn torrents_set_location(
        &self,
        hashes: impl Into<Hashes>,
        location: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("location", location);
        self.execute(&torrents::SET_LOCATION, &params).await?;
        Ok(())
    }

    /// Renames torrent `hash`.
    pub async fn torrents_rename(&self, hash: &str, name: &str) -> Result<(), QbitError> {
        let params = Params::new().with("hash", hash).with("name", name);
        self.execute(&torrents::RENAME, &params).await?;
        Ok(())
    }

    /// Assigns `category` to the selected torrents; an empty string clears it.
    pub async fn torrents_set_category(
        &self,
        hashes: impl Into<Hashes>,
        category: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("category", category);
        self.execute(&torrents::SET_CATEGORY, &params).await?;
        Ok(())
    }

    /// All categories, keyed by name.
    pub async fn torrents_categories(&self) -> Result<Value, QbitError> {
        self.execute(&torrents::CATEGORIES, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Creates a category saving to `save_path` (empty for the default).
    pub async fn torrents_create_category(
        &self,
        category: &str,
        save_path: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("category", category)
            .with("savePath", save_path);
        self.execute(&torrents::CREATE_CATEGORY, &params).await?;
        Ok(())
    }

    /// Changes the save path of an existing category.
    pub async fn torrents_edit_category(
        &self,
        category: &str,
        save_path: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("category", category)
            .with("savePath", save_path);
        self.execute(&torrents::EDIT_CATEGORY, &params).await?;
        Ok(())
    }

    /// Deletes categories by name.
    pub async fn torrents_remove_categories<I>(&self, categories: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("categories", join(categories, "\n"));
        self.execute(&torrents::REMOVE_CATEGORIES, &params).await?;
        Ok(())
    }

    /// Adds tags to the selected torrents, creating missing ones.
    pub async fn torrents_add_tags<I>(
        &self,
        hashes: impl Into<Hashes>,
        tags: I,
    ) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.tag_torrents(&torrents::ADD_TAGS, hashes.into(), join(tags, ","))
            .await
    }

    /// Removes tags from the selected torrents; no tags removes all.
    pub async fn torrents_remove_tags<I>(
        &self,
        hashes: impl Into<Hashes>,
        tags: I,
    ) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.tag_torrents(&torrents::REMOVE_TAGS, hashes.into(), join(tags, ","))
            .await
    }

    /// All tag names.
    pub async fn torrents_tags(&self) -> Result<Value, QbitError> {
        self.execute(&torrents::TAGS, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Creates global tags.
    pub async fn torrents_create_tags<I>(&self, tags: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("tags", join(tags, ","));
        self.execute(&torrents::CREATE_TAGS, &params).await?;
        Ok(())
    }

    /// Deletes global tags.
    pub async fn torrents_delete_tags<I>(&self, tags: I) -> Result<(), QbitError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let params = Params::new().with("tags", join(tags, ","));
        self.execute(&torrents::DELETE_TAGS, &params).await?;
        Ok(())
    }

    /// Enables or disables automatic torrent management.
    pub async fn torrents_set_auto_management(
        &self,
        hashes: impl Into<Hashes>,
        enable: bool,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("enable", enable);
        self.execute(&torrents::SET_AUTO_MANAGEMENT, &params).await?;
        Ok(())
    }

    /// Flips sequential download of the selected torrents.
    pub async fn torrents_toggle_sequential_download(
        &self,
        hashes: impl Into<Hashes>,
    ) -> Result<(), QbitError> {
        self.on_hashes(&torrents::TOGGLE_SEQUENTIAL_DOWNLOAD, hashes)
            .await
    }

    /// Flips first/last piece priority of the selected torrents.
    pub async fn torrents_toggle_first_last_piece_prio(
        &self,
        hashes: impl Into<Hashes>,
    ) -> Result<(), QbitError> {
        self.on_hashes(&torrents::TOGGLE_FIRST_LAST_PIECE_PRIO, hashes)
            .await
    }

    /// Sets or clears force start.
    pub async fn torrents_set_force_start(
        &self,
        hashes: impl Into<Hashes>,
        value: bool,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("value", value);
        self.execute(&torrents::SET_FORCE_START, &params).await?;
        Ok(())
    }

    /// Sets or clears super seeding.
    pub async fn torrents_set_super_seeding(
        &self,
        hashes: impl Into<Hashes>,
        value: bool,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hashes", hashes.into())
            .with("value", value);
        self.execute(&torrents::SET_SUPER_SEEDING, &params).await?;
        Ok(())
    }

    /// Renames a file inside torrent `hash`.
    pub async fn torrents_rename_file(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), QbitError> {
        self.rename_path(&torrents::RENAME_FILE, hash, old_path, new_path)
            .await
    }

    /// Renames a folder inside torrent `hash`.
    pub async fn torrents_rename_folder(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), QbitError> {
        self.rename_path(&torrents::RENAME_FOLDER, hash, old_path, new_path)
            .await
    }

    async fn by_hash(&self, endpoint: &Endpoint, hash: &str) -> Result<Value, QbitError> {
        let params = Params::new().with("hash", hash);
        self.execute(endpoint, &params)
            .await
            .map(Decoded::into_json)
    }

    async fn on_hashes(
        &self,
        endpoint: &Endpoint,
        hashes: impl Into<Hashes>,
    ) -> Result<(), QbitError> {
        let params = Params::new().with("hashes", hashes.into());
        self.execute(endpoint, &params).await?;
        Ok(())
    }

    async fn tag_torrents(
        &self,
        endpoint: &Endpoint,
        hashes: Hashes,
        tags: String,
    ) -> Result<(), QbitError> {
        let params = Params::new().with("hashes", hashes).with("tags", tags);
        self.execute(endpoint, &params).await?;
        Ok(())
    }

    async fn rename_path(
        &self,
        endpoint: &Endpoint,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("hash", hash)
            .with("oldPath", old_path)
            .with("newPath", new_path);
        self.execute(endpoint, &params).await?;
        Ok(())
    }
}
