//! `rss/*` methods.

use serde_json::Value;

use qbit_webui_types::{Params, QbitError};

use super::QbitClient;
use crate::endpoints::rss;
use crate::response::Decoded;
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Creates folder `path`, e.g. `Linux\Distros`.
    pub async fn rss_add_folder(&self, path: &str) -> Result<(), QbitError> {
        let params = Params::new().with("path", path);
        self.execute(&rss::ADD_FOLDER, &params).await?;
        Ok(())
    }

    /// Subscribes to the feed at `url`, optionally stored at item `path`.
    pub async fn rss_add_feed(&self, url: &str, path: Option<&str>) -> Result<(), QbitError> {
        let params = Params::new().with("url", url).with_opt("path", path);
        self.execute(&rss::ADD_FEED, &params).await?;
        Ok(())
    }

    /// Removes a feed or folder.
    pub async fn rss_remove_item(&self, path: &str) -> Result<(), QbitError> {
        let params = Params::new().with("path", path);
        self.execute(&rss::REMOVE_ITEM, &params).await?;
        Ok(())
    }

    /// Moves a feed or folder to `dest_path`.
    pub async fn rss_move_item(&self, item_path: &str, dest_path: &str) -> Result<(), QbitError> {
        let params = Params::new()
            .with("itemPath", item_path)
            .with("destPath", dest_path);
        self.execute(&rss::MOVE_ITEM, &params).await?;
        Ok(())
    }

    /// The feed tree, with articles when `with_data` is set.
    pub async fn rss_items(&self, with_data: bool) -> Result<Value, QbitError> {
        let params = Params::new().with("withData", with_data);
        self.execute(&rss::ITEMS, &params)
            .await
            .map(Decoded::into_json)
    }

    /// Marks one article, or the whole item when `article_id` is `None`, as read.
    pub async fn rss_mark_as_read(
        &self,
        item_path: &str,
        article_id: Option<&str>,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("itemPath", item_path)
            .with_opt("articleId", article_id);
        self.execute(&rss::MARK_AS_READ, &params).await?;
        Ok(())
    }

    /// Fetches new articles for a feed or folder.
    pub async fn rss_refresh_item(&self, item_path: &str) -> Result<(), QbitError> {
        let params = Params::new().with("itemPath", item_path);
        self.execute(&rss::REFRESH_ITEM, &params).await?;
        Ok(())
    }

    /// Creates or replaces auto-downloading rule `rule_name`.
    ///
    /// `rule_def` must be a JSON object.
    pub async fn rss_set_rule(&self, rule_name: &str, rule_def: &Value) -> Result<(), QbitError> {
        if !rule_def.is_object() {
            return Err(QbitError::InvalidArgument(format!(
                "rule definition for {rule_name} must be a JSON object"
            )));
        }
        let params = Params::new()
            .with("ruleName", rule_name)
            .with("ruleDef", rule_def);
        self.execute(&rss::SET_RULE, &params).await?;
        Ok(())
    }

    /// Renames an auto-downloading rule.
    pub async fn rss_rename_rule(
        &self,
        rule_name: &str,
        new_rule_name: &str,
    ) -> Result<(), QbitError> {
        let params = Params::new()
            .with("ruleName", rule_name)
            .with("newRuleName", new_rule_name);
        self.execute(&rss::RENAME_RULE, &params).await?;
        Ok(())
    }

    /// Deletes an auto-downloading rule.
    pub async fn rss_remove_rule(&self, rule_name: &str) -> Result<(), QbitError> {
        let params = Params::new().with("ruleName", rule_name);
        self.execute(&rss::REMOVE_RULE, &params).await?;
        Ok(())
    }

    /// All auto-downloading rules, keyed by name.
    pub async fn rss_rules(&self) -> Result<Value, QbitError> {
        self.execute(&rss::RULES, &Params::new())
            .await
            .map(Decoded::into_json)
    }

    /// Articles matched by rule `rule_name`, keyed by feed.
    pub async fn rss_matching_articles(&self, rule_name: &str) -> Result<Value, QbitError> {
        let params = Params::new().with("ruleName", rule_name);
        self.execute(&rss::MATCHING_ARTICLES, &params)
            .await
            .map(Decoded::into_json)
    }
}
