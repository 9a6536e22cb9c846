//! Descriptor table of every WebUI API v2 method.
//!
//! Entries are plain constants; [`ALL`] lists them in documentation order.

use crate::endpoint::{Decoder, Endpoint, Group, StatusRule};

const TORRENT_NOT_FOUND: StatusRule = StatusRule::NotFound {
    resource: "torrent",
    param: "hash",
};

const SEARCH_JOB_NOT_FOUND: StatusRule = StatusRule::NotFound {
    resource: "search job",
    param: "id",
};

const TORRENT_BY_HASH: &[(u16, StatusRule)] = &[(404, TORRENT_NOT_FOUND)];

const SEARCH_JOB_BY_ID: &[(u16, StatusRule)] = &[(404, SEARCH_JOB_NOT_FOUND)];

/// `auth/*`
pub mod auth {
    use super::*;

    const LOGIN_RULES: &[(u16, StatusRule)] = &[(403, StatusRule::TooManyFailedLogins)];

    /// Only endpoint authenticated by `Referer`.
    pub const LOGIN: Endpoint = Endpoint::new(Group::Auth, "login", Decoder::None)
        .with_referer()
        .with_rules(LOGIN_RULES);
    #[allow(missing_docs)]
    pub const LOGOUT: Endpoint = Endpoint::new(Group::Auth, "logout", Decoder::None);
}

/// `app/*`
#[allow(missing_docs)]
pub mod app {
    use super::*;

    const WEBAPI_VERSION_RULES: &[(u16, StatusRule)] = &[(403, StatusRule::Unauthorized)];

    pub const VERSION: Endpoint = Endpoint::new(Group::App, "version", Decoder::String);
    pub const WEBAPI_VERSION: Endpoint =
        Endpoint::new(Group::App, "webapiVersion", Decoder::String)
            .with_rules(WEBAPI_VERSION_RULES);
    pub const BUILD_INFO: Endpoint = Endpoint::new(Group::App, "buildInfo", Decoder::Json);
    pub const SHUTDOWN: Endpoint = Endpoint::new(Group::App, "shutdown", Decoder::None);
    pub const PREFERENCES: Endpoint = Endpoint::new(Group::App, "preferences", Decoder::Json);
    pub const SET_PREFERENCES: Endpoint =
        Endpoint::new(Group::App, "setPreferences", Decoder::None);
    pub const DEFAULT_SAVE_PATH: Endpoint =
        Endpoint::new(Group::App, "defaultSavePath", Decoder::String);
}

/// `log/*`
#[allow(missing_docs)]
pub mod log {
    use super::*;

    pub const MAIN: Endpoint = Endpoint::new(Group::Log, "main", Decoder::Json);
    pub const PEERS: Endpoint = Endpoint::new(Group::Log, "peers", Decoder::Json);
}

/// `sync/*`
#[allow(missing_docs)]
pub mod sync {
    use super::*;

    pub const MAINDATA: Endpoint = Endpoint::new(Group::Sync, "maindata", Decoder::Json);
    pub const TORRENT_PEERS: Endpoint =
        Endpoint::new(Group::Sync, "torrentPeers", Decoder::Json).with_rules(TORRENT_BY_HASH);
}

/// `transfer/*`
#[allow(missing_docs)]
pub mod transfer {
    use super::*;

    pub const INFO: Endpoint = Endpoint::new(Group::Transfer, "info", Decoder::Json);
    /// Answers `1` while alternative speed limits are active.
    pub const SPEED_LIMITS_MODE: Endpoint =
        Endpoint::new(Group::Transfer, "speedLimitsMode", Decoder::Bool);
    pub const TOGGLE_SPEED_LIMITS_MODE: Endpoint =
        Endpoint::new(Group::Transfer, "toggleSpeedLimitsMode", Decoder::None);
    pub const DOWNLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Transfer, "downloadLimit", Decoder::Int);
    pub const SET_DOWNLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Transfer, "setDownloadLimit", Decoder::None);
    pub const UPLOAD_LIMIT: Endpoint = Endpoint::new(Group::Transfer, "uploadLimit", Decoder::Int);
    pub const SET_UPLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Transfer, "setUploadLimit", Decoder::None);
    pub const BAN_PEERS: Endpoint = Endpoint::new(Group::Transfer, "banPeers", Decoder::None);
}

/// `torrents/*`, including categories and tags.
#[allow(missing_docs)]
pub mod torrents {
    use super::*;

    const ADD_RULES: &[(u16, StatusRule)] = &[(
        415,
        StatusRule::OperationFailed("torrent file is not valid"),
    )];

    const EDIT_TRACKER_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "tracker URL is not valid",
                param: Some("newUrl"),
            },
        ),
        (404, TORRENT_NOT_FOUND),
        (
            409,
            StatusRule::OperationFailed("new URL already exists or original URL was not found"),
        ),
    ];

    const REMOVE_TRACKERS_RULES: &[(u16, StatusRule)] = &[
        (404, TORRENT_NOT_FOUND),
        (
            409,
            StatusRule::OperationFailed("none of the given tracker URLs were found"),
        ),
    ];

    const ADD_PEERS_RULES: &[(u16, StatusRule)] = &[(
        400,
        StatusRule::InvalidArgument {
            reason: "none of the supplied peers are valid",
            param: Some("peers"),
        },
    )];

    const QUEUEING_RULES: &[(u16, StatusRule)] = &[(
        409,
        StatusRule::OperationFailed("torrent queueing is not enabled"),
    )];

    const FILE_PRIO_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "priority is invalid or a file id is not an integer",
                param: None,
            },
        ),
        (404, TORRENT_NOT_FOUND),
        (
            409,
            StatusRule::OperationFailed("torrent metadata is not downloaded or file id was not found"),
        ),
    ];

    const SET_LOCATION_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "save path is not valid",
                param: Some("location"),
            },
        ),
        (
            403,
            StatusRule::OperationFailed("no write access to the save path"),
        ),
        (
            409,
            StatusRule::OperationFailed("unable to create the save path directory"),
        ),
    ];

    const RENAME_RULES: &[(u16, StatusRule)] = &[
        (404, TORRENT_NOT_FOUND),
        (
            409,
            StatusRule::InvalidArgument {
                reason: "torrent name is not valid",
                param: Some("name"),
            },
        ),
    ];

    const SET_CATEGORY_RULES: &[(u16, StatusRule)] = &[(
        409,
        StatusRule::OperationFailed("category does not exist"),
    )];

    const CREATE_CATEGORY_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "category name is empty",
                param: Some("category"),
            },
        ),
        (
            409,
            StatusRule::InvalidArgument {
                reason: "category name is not valid",
                param: Some("category"),
            },
        ),
    ];

    const EDIT_CATEGORY_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "category name is empty",
                param: Some("category"),
            },
        ),
        (409, StatusRule::OperationFailed("category editing failed")),
    ];

    const RENAME_PATH_RULES: &[(u16, StatusRule)] = &[
        (
            400,
            StatusRule::InvalidArgument {
                reason: "new path is missing",
                param: None,
            },
        ),
        (404, TORRENT_NOT_FOUND),
        (
            409,
            StatusRule::OperationFailed("path is not valid or already in use"),
        ),
    ];

    pub const INFO: Endpoint = Endpoint::new(Group::Torrents, "info", Decoder::Json);
    pub const PROPERTIES: Endpoint =
        Endpoint::new(Group::Torrents, "properties", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const TRACKERS: Endpoint =
        Endpoint::new(Group::Torrents, "trackers", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const WEBSEEDS: Endpoint =
        Endpoint::new(Group::Torrents, "webseeds", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const FILES: Endpoint =
        Endpoint::new(Group::Torrents, "files", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const PIECE_STATES: Endpoint =
        Endpoint::new(Group::Torrents, "pieceStates", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const PIECE_HASHES: Endpoint =
        Endpoint::new(Group::Torrents, "pieceHashes", Decoder::Json).with_rules(TORRENT_BY_HASH);
    pub const PAUSE: Endpoint = Endpoint::new(Group::Torrents, "pause", Decoder::None);
    pub const RESUME: Endpoint = Endpoint::new(Group::Torrents, "resume", Decoder::None);
    pub const DELETE: Endpoint = Endpoint::new(Group::Torrents, "delete", Decoder::None);
    pub const RECHECK: Endpoint = Endpoint::new(Group::Torrents, "recheck", Decoder::None);
    pub const REANNOUNCE: Endpoint = Endpoint::new(Group::Torrents, "reannounce", Decoder::None);
    /// Multipart upload.
    pub const ADD: Endpoint =
        Endpoint::new(Group::Torrents, "add", Decoder::None).with_rules(ADD_RULES);
    pub const ADD_TRACKERS: Endpoint =
        Endpoint::new(Group::Torrents, "addTrackers", Decoder::None).with_rules(TORRENT_BY_HASH);
    pub const EDIT_TRACKER: Endpoint =
        Endpoint::new(Group::Torrents, "editTracker", Decoder::None).with_rules(EDIT_TRACKER_RULES);
    pub const REMOVE_TRACKERS: Endpoint =
        Endpoint::new(Group::Torrents, "removeTrackers", Decoder::None)
            .with_rules(REMOVE_TRACKERS_RULES);
    pub const ADD_PEERS: Endpoint =
        Endpoint::new(Group::Torrents, "addPeers", Decoder::None).with_rules(ADD_PEERS_RULES);
    pub const INCREASE_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "increasePrio", Decoder::None).with_rules(QUEUEING_RULES);
    pub const DECREASE_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "decreasePrio", Decoder::None).with_rules(QUEUEING_RULES);
    pub const TOP_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "topPrio", Decoder::None).with_rules(QUEUEING_RULES);
    pub const BOTTOM_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "bottomPrio", Decoder::None).with_rules(QUEUEING_RULES);
    pub const FILE_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "filePrio", Decoder::None).with_rules(FILE_PRIO_RULES);
    pub const DOWNLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Torrents, "downloadLimit", Decoder::Json);
    pub const SET_DOWNLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Torrents, "setDownloadLimit", Decoder::None);
    pub const SET_SHARE_LIMITS: Endpoint =
        Endpoint::new(Group::Torrents, "setShareLimits", Decoder::None);
    pub const UPLOAD_LIMIT: Endpoint = Endpoint::new(Group::Torrents, "uploadLimit", Decoder::Json);
    pub const SET_UPLOAD_LIMIT: Endpoint =
        Endpoint::new(Group::Torrents, "setUploadLimit", Decoder::None);
    /// Claims 403 for itself, so a rejected cookie surfaces as `OperationFailed` here.
    pub const SET_LOCATION: Endpoint =
        Endpoint::new(Group::Torrents, "setLocation", Decoder::None).with_rules(SET_LOCATION_RULES);
    pub const RENAME: Endpoint =
        Endpoint::new(Group::Torrents, "rename", Decoder::None).with_rules(RENAME_RULES);
    pub const SET_CATEGORY: Endpoint =
        Endpoint::new(Group::Torrents, "setCategory", Decoder::None).with_rules(SET_CATEGORY_RULES);
    pub const CATEGORIES: Endpoint = Endpoint::new(Group::Torrents, "categories", Decoder::Json);
    pub const CREATE_CATEGORY: Endpoint =
        Endpoint::new(Group::Torrents, "createCategory", Decoder::None)
            .with_rules(CREATE_CATEGORY_RULES);
    pub const EDIT_CATEGORY: Endpoint =
        Endpoint::new(Group::Torrents, "editCategory", Decoder::None)
            .with_rules(EDIT_CATEGORY_RULES);
    pub const REMOVE_CATEGORIES: Endpoint =
        Endpoint::new(Group::Torrents, "removeCategories", Decoder::None);
    pub const ADD_TAGS: Endpoint = Endpoint::new(Group::Torrents, "addTags", Decoder::None);
    pub const REMOVE_TAGS: Endpoint = Endpoint::new(Group::Torrents, "removeTags", Decoder::None);
    pub const TAGS: Endpoint = Endpoint::new(Group::Torrents, "tags", Decoder::Json);
    pub const CREATE_TAGS: Endpoint = Endpoint::new(Group::Torrents, "createTags", Decoder::None);
    pub const DELETE_TAGS: Endpoint = Endpoint::new(Group::Torrents, "deleteTags", Decoder::None);
    pub const SET_AUTO_MANAGEMENT: Endpoint =
        Endpoint::new(Group::Torrents, "setAutoManagement", Decoder::None);
    pub const TOGGLE_SEQUENTIAL_DOWNLOAD: Endpoint =
        Endpoint::new(Group::Torrents, "toggleSequentialDownload", Decoder::None);
    pub const TOGGLE_FIRST_LAST_PIECE_PRIO: Endpoint =
        Endpoint::new(Group::Torrents, "toggleFirstLastPiecePrio", Decoder::None);
    pub const SET_FORCE_START: Endpoint =
        Endpoint::new(Group::Torrents, "setForceStart", Decoder::None);
    pub const SET_SUPER_SEEDING: Endpoint =
        Endpoint::new(Group::Torrents, "setSuperSeeding", Decoder::None);
    pub const RENAME_FILE: Endpoint =
        Endpoint::new(Group::Torrents, "renameFile", Decoder::None).with_rules(RENAME_PATH_RULES);
    pub const RENAME_FOLDER: Endpoint =
        Endpoint::new(Group::Torrents, "renameFolder", Decoder::None).with_rules(RENAME_PATH_RULES);
}

/// `rss/*`
#[allow(missing_docs)]
pub mod rss {
    use super::*;

    const ADD_FOLDER_RULES: &[(u16, StatusRule)] =
        &[(409, StatusRule::OperationFailed("unable to add RSS folder"))];
    const ADD_FEED_RULES: &[(u16, StatusRule)] =
        &[(409, StatusRule::OperationFailed("unable to add RSS feed"))];
    const REMOVE_ITEM_RULES: &[(u16, StatusRule)] =
        &[(409, StatusRule::OperationFailed("unable to remove RSS item"))];
    const MOVE_ITEM_RULES: &[(u16, StatusRule)] =
        &[(409, StatusRule::OperationFailed("unable to move RSS item"))];

    pub const ADD_FOLDER: Endpoint =
        Endpoint::new(Group::Rss, "addFolder", Decoder::None).with_rules(ADD_FOLDER_RULES);
    pub const ADD_FEED: Endpoint =
        Endpoint::new(Group::Rss, "addFeed", Decoder::None).with_rules(ADD_FEED_RULES);
    pub const REMOVE_ITEM: Endpoint =
        Endpoint::new(Group::Rss, "removeItem", Decoder::None).with_rules(REMOVE_ITEM_RULES);
    pub const MOVE_ITEM: Endpoint =
        Endpoint::new(Group::Rss, "moveItem", Decoder::None).with_rules(MOVE_ITEM_RULES);
    pub const ITEMS: Endpoint = Endpoint::new(Group::Rss, "items", Decoder::Json);
    pub const MARK_AS_READ: Endpoint = Endpoint::new(Group::Rss, "markAsRead", Decoder::None);
    pub const REFRESH_ITEM: Endpoint = Endpoint::new(Group::Rss, "refreshItem", Decoder::None);
    pub const SET_RULE: Endpoint = Endpoint::new(Group::Rss, "setRule", Decoder::None);
    pub const RENAME_RULE: Endpoint = Endpoint::new(Group::Rss, "renameRule", Decoder::None);
    pub const REMOVE_RULE: Endpoint = Endpoint::new(Group::Rss, "removeRule", Decoder::None);
    pub const RULES: Endpoint = Endpoint::new(Group::Rss, "rules", Decoder::Json);
    pub const MATCHING_ARTICLES: Endpoint =
        Endpoint::new(Group::Rss, "matchingArticles", Decoder::Json);
}

/// `search/*`
#[allow(missing_docs)]
pub mod search {
    use super::*;

    const START_RULES: &[(u16, StatusRule)] = &[(
        409,
        StatusRule::OperationFailed("too many concurrent searches"),
    )];

    const RESULTS_RULES: &[(u16, StatusRule)] = &[
        (404, SEARCH_JOB_NOT_FOUND),
        (
            409,
            StatusRule::InvalidArgument {
                reason: "offset is out of range",
                param: Some("offset"),
            },
        ),
    ];

    pub const START: Endpoint =
        Endpoint::new(Group::Search, "start", Decoder::Json).with_rules(START_RULES);
    pub const STOP: Endpoint =
        Endpoint::new(Group::Search, "stop", Decoder::None).with_rules(SEARCH_JOB_BY_ID);
    pub const STATUS: Endpoint =
        Endpoint::new(Group::Search, "status", Decoder::Json).with_rules(SEARCH_JOB_BY_ID);
    pub const RESULTS: Endpoint =
        Endpoint::new(Group::Search, "results", Decoder::Json).with_rules(RESULTS_RULES);
    pub const DELETE: Endpoint =
        Endpoint::new(Group::Search, "delete", Decoder::None).with_rules(SEARCH_JOB_BY_ID);
    pub const PLUGINS: Endpoint = Endpoint::new(Group::Search, "plugins", Decoder::Json);
    pub const INSTALL_PLUGIN: Endpoint =
        Endpoint::new(Group::Search, "installPlugin", Decoder::None);
    pub const UNINSTALL_PLUGIN: Endpoint =
        Endpoint::new(Group::Search, "uninstallPlugin", Decoder::None);
    pub const ENABLE_PLUGIN: Endpoint = Endpoint::new(Group::Search, "enablePlugin", Decoder::None);
    pub const UPDATE_PLUGINS: Endpoint =
        Endpoint::new(Group::Search, "updatePlugins", Decoder::None);
}

/// Every endpoint, grouped as above.
pub const ALL: &[Endpoint] = &[
    auth::LOGIN,
    auth::LOGOUT,
    app::VERSION,
    app::WEBAPI_VERSION,
    app::BUILD_INFO,
    app::SHUTDOWN,
    app::PREFERENCES,
    app::SET_PREFERENCES,
    app::DEFAULT_SAVE_PATH,
    log::MAIN,
    log::PEERS,
    sync::MAINDATA,
    sync::TORRENT_PEERS,
    transfer::INFO,
    transfer::SPEED_LIMITS_MODE,
    transfer::TOGGLE_SPEED_LIMITS_MODE,
    transfer::DOWNLOAD_LIMIT,
    transfer::SET_DOWNLOAD_LIMIT,
    transfer::UPLOAD_LIMIT,
    transfer::SET_UPLOAD_LIMIT,
    transfer::BAN_PEERS,
    torrents::INFO,
    torrents::PROPERTIES,
    torrents::TRACKERS,
    torrents::WEBSEEDS,
    torrents::FILES,
    torrents::PIECE_STATES,
    torrents::PIECE_HASHES,
    torrents::PAUSE,
    torrents::RESUME,
    torrents::DELETE,
    torrents::RECHECK,
    torrents::REANNOUNCE,
    torrents::ADD,
    torrents::ADD_TRACKERS,
    torrents::EDIT_TRACKER,
    torrents::REMOVE_TRACKERS,
    torrents::ADD_PEERS,
    torrents::INCREASE_PRIO,
    torrents::DECREASE_PRIO,
    torrents::TOP_PRIO,
    torrents::BOTTOM_PRIO,
    torrents::FILE_PRIO,
    torrents::DOWNLOAD_LIMIT,
    torrents::SET_DOWNLOAD_LIMIT,
    torrents::SET_SHARE_LIMITS,
    torrents::UPLOAD_LIMIT,
    torrents::SET_UPLOAD_LIMIT,
    torrents::SET_LOCATION,
    torrents::RENAME,
    torrents::SET_CATEGORY,
    torrents::CATEGORIES,
    torrents::CREATE_CATEGORY,
    torrents::EDIT_CATEGORY,
    torrents::REMOVE_CATEGORIES,
    torrents::ADD_TAGS,
    torrents::REMOVE_TAGS,
    torrents::TAGS,
    torrents::CREATE_TAGS,
    torrents::DELETE_TAGS,
    torrents::SET_AUTO_MANAGEMENT,
    torrents::TOGGLE_SEQUENTIAL_DOWNLOAD,
    torrents::TOGGLE_FIRST_LAST_PIECE_PRIO,
    torrents::SET_FORCE_START,
    torrents::SET_SUPER_SEEDING,
    torrents::RENAME_FILE,
    torrents::RENAME_FOLDER,
    rss::ADD_FOLDER,
    rss::ADD_FEED,
    rss::REMOVE_ITEM,
    rss::MOVE_ITEM,
    rss::ITEMS,
    rss::MARK_AS_READ,
    rss::REFRESH_ITEM,
    rss::SET_RULE,
    rss::RENAME_RULE,
    rss::REMOVE_RULE,
    rss::RULES,
    rss::MATCHING_ARTICLES,
    search::START,
    search::STOP,
    search::STATUS,
    search::RESULTS,
    search::DELETE,
    search::PLUGINS,
    search::INSTALL_PLUGIN,
    search::UNINSTALL_PLUGIN,
    search::ENABLE_PLUGIN,
    search::UPDATE_PLUGINS,
];
