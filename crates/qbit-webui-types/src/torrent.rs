//! Parameter records for the `torrents` group.

use std::path::PathBuf;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::{Hashes, Params, QbitError, join};

/// Characters left as-is when re-encoding a category name.
const CATEGORY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// State filter accepted by `torrents/info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TorrentFilter {
    All,
    Downloading,
    Seeding,
    Completed,
    Paused,
    Active,
    Inactive,
    Resumed,
    Stalled,
    StalledUploading,
    StalledDownloading,
    Errored,
}

impl TorrentFilter {
    /// Wire name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TorrentFilter::All => "all",
            TorrentFilter::Downloading => "downloading",
            TorrentFilter::Seeding => "seeding",
            TorrentFilter::Completed => "completed",
            TorrentFilter::Paused => "paused",
            TorrentFilter::Active => "active",
            TorrentFilter::Inactive => "inactive",
            TorrentFilter::Resumed => "resumed",
            TorrentFilter::Stalled => "stalled",
            TorrentFilter::StalledUploading => "stalled_uploading",
            TorrentFilter::StalledDownloading => "stalled_downloading",
            TorrentFilter::Errored => "errored",
        }
    }
}

impl std::str::FromStr for TorrentFilter {
    type Err = QbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s {
            "all" => TorrentFilter::All,
            "downloading" => TorrentFilter::Downloading,
            "seeding" => TorrentFilter::Seeding,
            "completed" => TorrentFilter::Completed,
            "paused" => TorrentFilter::Paused,
            "active" => TorrentFilter::Active,
            "inactive" => TorrentFilter::Inactive,
            "resumed" => TorrentFilter::Resumed,
            "stalled" => TorrentFilter::Stalled,
            "stalled_uploading" => TorrentFilter::StalledUploading,
            "stalled_downloading" => TorrentFilter::StalledDownloading,
            "errored" => TorrentFilter::Errored,
            other => {
                return Err(QbitError::InvalidArgument(format!(
                    "unknown torrent filter: {other}"
                )));
            }
        };
        Ok(filter)
    }
}

/// Query for `torrents/info`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentListParams {
    /// Only torrents in this state.
    pub filter: Option<TorrentFilter>,
    /// Only torrents in this category. An empty string selects uncategorized torrents.
    pub category: Option<String>,
    /// Field name to sort by.
    pub sort: Option<String>,
    /// Reverse the sort order.
    pub reverse: Option<bool>,
    /// Maximum number of torrents returned.
    pub limit: Option<i64>,
    /// Offset into the list; negative values count from the end.
    pub offset: Option<i64>,
    /// Only these torrents.
    pub hashes: Option<Hashes>,
}

impl TorrentListParams {
    /// Wire parameters for `torrents/info`.
    ///
    /// The category is percent-decoded and encoded again so callers may pass
    /// it either raw or already encoded.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("filter", self.filter.map(|f| f.as_str()))
            .with_opt("category", self.category.as_deref().map(reencode_category))
            .with_opt("sort", self.sort.as_deref())
            .with_opt("reverse", self.reverse)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("hashes", self.hashes.as_ref())
    }
}

fn reencode_category(category: &str) -> String {
    let decoded = percent_decode_str(category).decode_utf8_lossy();
    utf8_percent_encode(&decoded, CATEGORY_ENCODE_SET).to_string()
}

/// Optional settings for `torrents/add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTorrentOptions {
    /// Download folder.
    pub savepath: Option<String>,
    /// Cookie sent to download the `.torrent` file.
    pub cookie: Option<String>,
    /// Category for the torrent.
    pub category: Option<String>,
    /// Tags for the torrent, sent comma-separated. Empty means unset.
    pub tags: Vec<String>,
    /// Skip hash checking.
    pub skip_checking: Option<bool>,
    /// Add torrents in the paused state.
    pub paused: Option<bool>,
    /// Create the root folder.
    pub root_folder: Option<bool>,
    /// Rename torrent.
    pub rename: Option<String>,
    /// Upload speed limit in bytes/second.
    pub up_limit: Option<i64>,
    /// Download speed limit in bytes/second.
    pub dl_limit: Option<i64>,
    /// Share ratio limit.
    pub ratio_limit: Option<f64>,
    /// Seeding time limit in minutes.
    pub seeding_time_limit: Option<i64>,
    /// Use automatic torrent management.
    pub auto_tmm: Option<bool>,
    /// Download in sequential order.
    pub sequential_download: Option<bool>,
    /// Prioritize first and last pieces.
    pub first_last_piece_prio: Option<bool>,
}

impl AddTorrentOptions {
    /// Scalar form fields, in wire order.
    pub fn to_params(&self) -> Params {
        let tags = (!self.tags.is_empty()).then(|| join(&self.tags, ","));
        Params::new()
            .with_opt("savepath", self.savepath.as_deref())
            .with_opt("cookie", self.cookie.as_deref())
            .with_opt("category", self.category.as_deref())
            .with_opt("tags", tags)
            .with_opt("skip_checking", self.skip_checking)
            .with_opt("paused", self.paused)
            .with_opt("root_folder", self.root_folder)
            .with_opt("rename", self.rename.as_deref())
            .with_opt("upLimit", self.up_limit)
            .with_opt("dlLimit", self.dl_limit)
            .with_opt("ratioLimit", self.ratio_limit)
            .with_opt("seedingTimeLimit", self.seeding_time_limit)
            .with_opt("autoTMM", self.auto_tmm)
            .with_opt("sequentialDownload", self.sequential_download)
            .with_opt("firstLastPiecePrio", self.first_last_piece_prio)
    }
}

/// A validated `torrents/add` request: at least one URL or torrent file.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTorrent {
    urls: Vec<String>,
    torrents: Vec<PathBuf>,
    options: AddTorrentOptions,
}

impl AddTorrent {
    /// Creates the request, failing with [`QbitError::InvalidArgument`] when
    /// both `urls` and `torrents` are empty.
    pub fn new(
        urls: Vec<String>,
        torrents: Vec<PathBuf>,
        options: AddTorrentOptions,
    ) -> Result<Self, QbitError> {
        if urls.is_empty() && torrents.is_empty() {
            return Err(QbitError::InvalidArgument(
                "no torrents to add: both urls and torrent files are empty".into(),
            ));
        }
        Ok(Self {
            urls,
            torrents,
            options,
        })
    }

    /// Adds torrents from URLs or magnet links.
    pub fn from_urls<I, S>(urls: I) -> Result<Self, QbitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            urls.into_iter().map(Into::into).collect(),
            Vec::new(),
            AddTorrentOptions::default(),
        )
    }

    /// Uploads local `.torrent` files.
    pub fn from_files<I, P>(paths: I) -> Result<Self, QbitError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(
            Vec::new(),
            paths.into_iter().map(Into::into).collect(),
            AddTorrentOptions::default(),
        )
    }

    /// Replaces the optional settings.
    pub fn with_options(mut self, options: AddTorrentOptions) -> Self {
        self.options = options;
        self
    }

    /// URLs or magnet links to add.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Local `.torrent` files to upload.
    pub fn torrents(&self) -> &[PathBuf] {
        &self.torrents
    }

    /// Optional settings.
    pub fn options(&self) -> &AddTorrentOptions {
        &self.options
    }
}
