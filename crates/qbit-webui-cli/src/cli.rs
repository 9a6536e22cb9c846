use std::path::PathBuf;

use clap::{Parser, Subcommand};

use qbit_webui_types::TorrentFilter;

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// WebUI host, overrides QBIT_HOST.
    #[arg(long)]
    pub(crate) host: Option<String>,

    /// WebUI port, overrides QBIT_PORT.
    #[arg(long)]
    pub(crate) port: Option<u16>,

    /// Login name, overrides QBIT_USERNAME. The password is only read from QBIT_PASSWORD.
    #[arg(short, long)]
    pub(crate) username: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the application and WebUI API versions.
    Version,

    /// List torrents.
    List {
        /// State filter, e.g. downloading or stalled_uploading.
        #[arg(long)]
        filter: Option<TorrentFilter>,

        /// Only torrents in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Add torrents from URLs or magnet links and local .torrent files.
    Add {
        /// URL or magnet link, may be repeated.
        #[arg(long = "url")]
        urls: Vec<String>,

        /// Path of a .torrent file, may be repeated.
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// Download folder.
        #[arg(long)]
        savepath: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Add in paused state.
        #[arg(long, default_value_t = false)]
        paused: bool,
    },

    /// Pause torrents; `all` selects every torrent.
    Pause {
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Resume torrents; `all` selects every torrent.
    Resume {
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Remove torrents.
    Delete {
        #[arg(required = true)]
        hashes: Vec<String>,

        /// Also delete downloaded data.
        #[arg(long, default_value_t = false)]
        delete_files: bool,
    },

    /// Show global transfer statistics.
    Transfer,

    /// Dump application preferences.
    Preferences,
}
