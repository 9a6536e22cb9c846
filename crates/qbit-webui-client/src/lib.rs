//! # qBittorrent WebUI API client.
//!
//! usage:
//!
//! ```rust,ignore
//! use qbit_webui_client::{QbitClient, QbitConfig};
//! use qbit_webui_types::{AddTorrent, TorrentListParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QbitConfig::from_env();
//!     let client = QbitClient::new(&config)?;
//!     client.login(&config.username, &config.password).await?;
//!     client
//!         .torrents_add(&AddTorrent::from_files(["path/to/file.torrent"])?)
//!         .await?;
//!     let torrents = client.torrents_info(&TorrentListParams::default()).await?;
//!     println!("Torrents: {torrents:#}");
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```
//!
//! Every WebUI method is described by a constant [`Endpoint`] in [`endpoints`].
//! [`QbitClient::execute`] builds the request for any of them, sends it through
//! the injected [`Transport`] and interprets the response.
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod client;
mod config;
pub mod endpoint;
pub mod endpoints;
pub mod request;
pub mod response;
mod session;
pub mod transport;

#[cfg(test)]
mod testutil;

pub use client::QbitClient;
pub use config::QbitConfig;
pub use endpoint::{Auth, Decoder, Endpoint, Group, StatusRule};
pub use qbit_webui_types as types;
pub use response::{Decoded, HttpResponse};
pub use request::{Body, HttpRequest, Part};
pub use session::Session;
pub use transport::{ReqwestTransport, Transport};
