//! # qBittorrent WebUI command line
//!
//! ## Usage
//!
//! ```sh,ignore
//! QBIT_PASSWORD=secret cargo run --release --bin qbit -- --host localhost list --filter downloading
//! ```

use clap::Parser;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qbit_webui_client::{QbitClient, QbitConfig};
use qbit_webui_types::{AddTorrent, AddTorrentOptions, Hashes, QbitError, TorrentListParams};

use crate::cli::{Cli, Command};

mod cli;

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs one command and returns what should be printed, if anything.
async fn run(client: &QbitClient, command: Command) -> Result<Option<Value>, QbitError> {
    match command {
        Command::Version => {
            let version = client.app_version().await?;
            let webapi = client.app_webapi_version().await?;
            Ok(Some(json!({ "version": version, "webapi": webapi })))
        }
        Command::List { filter, category } => {
            let query = TorrentListParams {
                filter,
                category,
                ..Default::default()
            };
            client.torrents_info(&query).await.map(Some)
        }
        Command::Add {
            urls,
            files,
            savepath,
            category,
            paused,
        } => {
            let options = AddTorrentOptions {
                savepath,
                category,
                paused: paused.then_some(true),
                ..Default::default()
            };
            let torrent = AddTorrent::new(urls, files, options)?;
            client.torrents_add(&torrent).await?;
            info!("Torrents added");
            Ok(None)
        }
        Command::Pause { hashes } => {
            client.torrents_pause(selector(hashes)).await?;
            Ok(None)
        }
        Command::Resume { hashes } => {
            client.torrents_resume(selector(hashes)).await?;
            Ok(None)
        }
        Command::Delete {
            hashes,
            delete_files,
        } => {
            client
                .torrents_delete(selector(hashes), delete_files)
                .await?;
            Ok(None)
        }
        Command::Transfer => client.transfer_info().await.map(Some),
        Command::Preferences => client.app_preferences().await.map(Some),
    }
}

/// A single `all` argument selects every torrent.
fn selector(hashes: Vec<String>) -> Hashes {
    if hashes.len() == 1 && hashes[0] == "all" {
        Hashes::All
    } else {
        Hashes::List(hashes)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let mut config = QbitConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(username) = cli.username {
        config.username = username;
    }

    let client = QbitClient::new(&config)?;
    client.login(&config.username, &config.password).await?;
    info!("Logged in to {}", client.base_url());

    let result = run(&client, cli.command).await;

    if let Err(e) = client.logout().await {
        warn!("Logout failed: {e}");
    }

    if let Some(output) = result? {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
