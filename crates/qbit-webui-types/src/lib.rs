//! # qBittorrent WebUI Types
//!
//! This crate defines the error taxonomy and the parameter records shared by the
//! qBittorrent WebUI API client and the applications embedding it.

mod error;
mod params;
mod torrent;

pub use error::{QbitError, UnexpectedResponse};
pub use params::{Hashes, LogFilter, Params, join};
pub use torrent::{AddTorrent, AddTorrentOptions, TorrentFilter, TorrentListParams};
