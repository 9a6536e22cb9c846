//! Tests for the QbitClient.

use serde_json::json;

use qbit_webui_types::{
    AddTorrent, AddTorrentOptions, Hashes, Params, QbitError, TorrentFilter, TorrentListParams,
    UnexpectedResponse,
};

use crate::endpoints;
use crate::request::{Body, Part};
use crate::response::{Decoded, HttpResponse};
use crate::testutil::{
    client, form, logged_in_client, login_ok, ok, path, status, BASE_URL, SID,
};
use crate::transport::MockTransport;

#[tokio::test]
async fn test_call_without_cookie_is_unauthorized() {
    let mut mock = MockTransport::new();
    mock.expect_send().never();

    let client = client(mock);
    assert!(!client.is_logged_in());

    match client.app_version().await {
        Err(QbitError::Unauthorized(_)) => {}
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
    match client.logout().await {
        Err(QbitError::Unauthorized(_)) => {}
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn test_login_stores_cookie_and_sends_it() {
    let mut mock = MockTransport::new();

    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/auth/login")
        .times(1)
        .returning(|req| {
            assert_eq!(req.header("Referer"), Some("http://localhost:8080"));
            assert_eq!(req.header("Cookie"), None);
            assert_eq!(
                req.header("Content-Type"),
                Some("application/x-www-form-urlencoded")
            );
            assert_eq!(form(&req), "username=admin&password=adminadmin");
            Ok(login_ok("abc123"))
        });
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/app/version")
        .times(1)
        .returning(|req| {
            assert_eq!(req.header("Cookie"), Some("SID=abc123"));
            assert_eq!(req.header("Referer"), None);
            Ok(ok("v4.6.2\n"))
        });

    let client = client(mock);
    client.login("admin", "adminadmin").await.unwrap();
    assert!(client.is_logged_in());
    assert_eq!(client.session_cookie().as_deref(), Some("abc123"));

    assert_eq!(client.app_version().await.unwrap(), "v4.6.2");
}

#[tokio::test]
async fn test_login_banned() {
    let mut mock = MockTransport::new();
    mock.expect_send().returning(|_| Ok(status(403)));

    let client = client(mock);
    match client.login("admin", "wrong").await {
        Err(QbitError::TooManyFailedLogins) => {}
        other => panic!("Expected TooManyFailedLogins, got {other:?}"),
    }
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_without_sid_fails() {
    let mut mock = MockTransport::new();
    mock.expect_send().returning(|_| {
        Ok(ok("Fails.").with_header("Set-Cookie", "other=value; path=/"))
    });

    let client = client(mock);
    match client.login("admin", "wrong").await {
        Err(QbitError::LoginFailed) => {}
        other => panic!("Expected LoginFailed, got {other:?}"),
    }
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_unexpected_status() {
    let mut mock = MockTransport::new();
    mock.expect_send().returning(|_| Ok(status(500)));

    let client = client(mock);
    match client.login("admin", "adminadmin").await {
        Err(QbitError::UnexpectedResponse(UnexpectedResponse::Status(500))) => {}
        other => panic!("Expected Status(500), got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_login_drops_previous_session() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .returning(|_| Err(QbitError::Network("connection refused".into())));

    let client = logged_in_client(mock);
    assert!(client.is_logged_in());

    match client.login("admin", "adminadmin").await {
        Err(QbitError::Network(msg)) => assert_eq!(msg, "connection refused"),
        other => panic!("Expected Network, got {other:?}"),
    }
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/auth/logout")
        .times(1)
        .returning(|req| {
            assert_eq!(req.header("Cookie"), Some("SID=abc123"));
            Ok(ok(""))
        });

    let client = logged_in_client(mock);
    client.logout().await.unwrap();
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_logout_clears_cookie_on_network_error() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .times(1)
        .returning(|_| Err(QbitError::Network("timed out".into())));

    let client = logged_in_client(mock);
    assert!(matches!(
        client.logout().await,
        Err(QbitError::Network(_))
    ));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_logout_clears_cookie_on_unexpected_status() {
    let mut mock = MockTransport::new();
    mock.expect_send().times(1).returning(|_| Ok(status(500)));

    let client = logged_in_client(mock);
    assert!(matches!(
        client.logout().await,
        Err(QbitError::UnexpectedResponse(UnexpectedResponse::Status(500)))
    ));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_json_decoding() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/app/buildInfo")
        .returning(|_| Ok(ok(r#"{"a":1}"#)));
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/app/preferences")
        .returning(|_| Ok(ok("not-json")));

    let client = logged_in_client(mock);
    assert_eq!(client.app_build_info().await.unwrap(), json!({"a": 1}));

    match client.app_preferences().await {
        Err(QbitError::UnexpectedResponse(UnexpectedResponse::InvalidJson(body))) => {
            assert_eq!(body, "not-json");
        }
        other => panic!("Expected InvalidJson, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_body() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| {
            path(req) == "/api/v2/torrents/delete"
                && form(req) == "hashes=abc%7Cdef&deleteFiles=true"
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    let client = logged_in_client(mock);
    client.torrents_delete(["abc", "def"], true).await.unwrap();
}

#[tokio::test]
async fn test_pause_all() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/pause" && form(req) == "hashes=all")
        .times(1)
        .returning(|_| Ok(ok("")));

    let client = logged_in_client(mock);
    client.torrents_pause(Hashes::All).await.unwrap();
}

#[tokio::test]
async fn test_add_torrent_multipart() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/add")
        .times(1)
        .returning(|req| {
            assert_eq!(req.header("Cookie"), Some("SID=abc123"));
            match req.body {
                Body::Multipart(parts) => assert_eq!(
                    parts,
                    vec![
                        Part::File {
                            name: "torrents".into(),
                            path: "/data/ubuntu.torrent".into(),
                            filename: "ubuntu.torrent".into(),
                        },
                        Part::Text {
                            name: "savepath".into(),
                            value: "/downloads".into(),
                        },
                        Part::Text {
                            name: "tags".into(),
                            value: "linux,iso".into(),
                        },
                    ]
                ),
                Body::Form(_) => panic!("Expected multipart body"),
            }
            Ok(ok("Ok."))
        });

    let torrent = AddTorrent::from_files(["/data/ubuntu.torrent"])
        .unwrap()
        .with_options(AddTorrentOptions {
            savepath: Some("/downloads".into()),
            tags: vec!["linux".into(), "iso".into()],
            ..Default::default()
        });

    let client = logged_in_client(mock);
    client.torrents_add(&torrent).await.unwrap();
}

#[tokio::test]
async fn test_add_torrent_invalid_file() {
    let mut mock = MockTransport::new();
    mock.expect_send().returning(|_| Ok(status(415)));

    let client = logged_in_client(mock);
    let torrent = AddTorrent::from_urls(["magnet:?xt=urn:btih:abc"]).unwrap();
    match client.torrents_add(&torrent).await {
        Err(QbitError::OperationFailed(msg)) => assert!(msg.contains("not valid")),
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
}

#[test]
fn test_add_nothing_is_rejected() {
    match AddTorrent::new(Vec::new(), Vec::new(), AddTorrentOptions::default()) {
        Err(QbitError::InvalidArgument(_)) => {}
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trackers_not_found() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| form(req) == "hash=deadbeef")
        .returning(|_| Ok(HttpResponse::new(404, "Not Found")));

    let client = logged_in_client(mock);
    match client.torrents_trackers("deadbeef").await {
        Err(QbitError::NotFound { resource, id }) => {
            assert_eq!(resource, "torrent");
            assert_eq!(id, "deadbeef");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trackers_empty() {
    let mut mock = MockTransport::new();
    mock.expect_send().returning(|_| Ok(ok("[]")));

    let client = logged_in_client(mock);
    assert_eq!(client.torrents_trackers("abc").await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_forbidden_means_session_rejected() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/pause")
        .returning(|_| Ok(HttpResponse::new(403, "Forbidden")));
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/setLocation")
        .returning(|_| Ok(status(403)));

    let client = logged_in_client(mock);
    match client.torrents_pause("abc").await {
        Err(QbitError::Unauthorized(_)) => {}
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
    match client.torrents_set_location("abc", "/readonly").await {
        Err(QbitError::OperationFailed(msg)) => assert!(msg.contains("write access")),
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_integer_coercion() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/transfer/downloadLimit")
        .returning(|_| Ok(ok("1024")));
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/transfer/uploadLimit")
        .returning(|_| Ok(ok("abc")));

    let client = logged_in_client(mock);
    assert_eq!(client.transfer_download_limit().await.unwrap(), 1024);
    assert_eq!(client.transfer_upload_limit().await.unwrap(), 0);
}

#[tokio::test]
async fn test_speed_limits_mode() {
    let mut mock = MockTransport::new();
    mock.expect_send().times(1).returning(|_| Ok(ok("1")));

    let client = logged_in_client(mock);
    assert!(client.transfer_speed_limits_mode().await.unwrap());
}

#[tokio::test]
async fn test_set_preferences_requires_object() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| form(req) == "json=%7B%22dl_limit%22%3A100%7D")
        .times(1)
        .returning(|_| Ok(ok("")));

    let client = logged_in_client(mock);
    match client.app_set_preferences(&json!([1, 2])).await {
        Err(QbitError::InvalidArgument(_)) => {}
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    client
        .app_set_preferences(&json!({"dl_limit": 100}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rss_set_rule_requires_object() {
    let mut mock = MockTransport::new();
    mock.expect_send().never();

    let client = logged_in_client(mock);
    match client.rss_set_rule("tv", &json!("not an object")).await {
        Err(QbitError::InvalidArgument(msg)) => assert!(msg.contains("tv")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_errors() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/search/results")
        .returning(|_| Ok(status(409)));
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/search/stop")
        .returning(|_| Ok(status(404)));

    let client = logged_in_client(mock);
    match client.search_results(7, Some(10), Some(500)).await {
        Err(QbitError::InvalidArgument(msg)) => assert!(msg.ends_with("500")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    match client.search_stop(7).await {
        Err(QbitError::NotFound { resource, id }) => {
            assert_eq!(resource, "search job");
            assert_eq!(id, "7");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_status() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .returning(|_| Ok(HttpResponse::new(500, "Internal Server Error")));

    let client = logged_in_client(mock);
    match client.torrents_categories().await {
        Err(QbitError::UnexpectedResponse(UnexpectedResponse::Status(500))) => {}
        other => panic!("Expected Status(500), got {other:?}"),
    }
}

#[tokio::test]
async fn test_network_error_propagates() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .returning(|_| Err(QbitError::Network("connection reset".into())));

    let client = logged_in_client(mock);
    match client.sync_maindata(0).await {
        Err(QbitError::Network(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("Expected Network, got {other:?}"),
    }
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_torrent_list_query() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| {
            path(req) == "/api/v2/torrents/info"
                && form(req) == "filter=downloading&limit=5&hashes=a%7Cb"
        })
        .times(1)
        .returning(|_| Ok(ok(r#"[{"hash":"a"},{"hash":"b"}]"#)));

    let query = TorrentListParams {
        filter: Some(TorrentFilter::Downloading),
        limit: Some(5),
        hashes: Some(Hashes::from(["a", "b"])),
        ..Default::default()
    };
    let client = logged_in_client(mock);
    let torrents = client.torrents_info(&query).await.unwrap();
    assert_eq!(torrents.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_list_separators() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/addTrackers")
        .times(1)
        .returning(|req| {
            assert_eq!(form(&req), "hash=abc&urls=udp%3A%2F%2Fa%0Audp%3A%2F%2Fb");
            Ok(ok(""))
        });
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/createTags")
        .times(1)
        .returning(|req| {
            assert_eq!(form(&req), "tags=one%2Ctwo");
            Ok(ok(""))
        });
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/torrents/filePrio")
        .times(1)
        .returning(|req| {
            assert_eq!(form(&req), "hash=abc&id=0%7C3&priority=7");
            Ok(ok(""))
        });

    let client = logged_in_client(mock);
    client
        .torrents_add_trackers("abc", ["udp://a", "udp://b"])
        .await
        .unwrap();
    client.torrents_create_tags(["one", "two"]).await.unwrap();
    client.torrents_file_prio("abc", &[0, 3], 7).await.unwrap();
}

#[tokio::test]
async fn test_execute_any_endpoint() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/log/peers" && form(req) == "last_known_id=12")
        .returning(|_| Ok(ok("[]")));

    let client = logged_in_client(mock);
    let params = Params::new().with("last_known_id", 12);
    let decoded = client
        .execute(&endpoints::log::PEERS, &params)
        .await
        .unwrap();
    assert_eq!(decoded, Decoded::Json(json!([])));
}

#[test]
fn test_base_url_is_normalized() {
    let client = crate::QbitClient::with_transport("http://nas.local:8080/qbt", MockTransport::new())
        .unwrap();
    assert_eq!(client.base_url().as_str(), "http://nas.local:8080/qbt/");

    let client = crate::QbitClient::with_transport(BASE_URL, MockTransport::new()).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    client.set_session_cookie(Some(SID.to_string()));
    assert!(format!("{client:?}").contains("cookie=<set>"));
    assert!(!format!("{client:?}").contains(SID));
}

#[test]
fn test_invalid_base_url() {
    assert!(matches!(
        crate::QbitClient::with_transport("not a url", MockTransport::new()),
        Err(QbitError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_execute_refuses_session_and_upload_endpoints() {
    let mut mock = MockTransport::new();
    mock.expect_send().never();

    let client = logged_in_client(mock);
    for endpoint in [
        &endpoints::auth::LOGIN,
        &endpoints::auth::LOGOUT,
        &endpoints::torrents::ADD,
    ] {
        let params = Params::new().with("savepath", "/x");
        match client.execute(endpoint, &params).await {
            Err(QbitError::InvalidArgument(msg)) => assert!(msg.contains(&endpoint.to_string())),
            other => panic!("Expected InvalidArgument for {endpoint}, got {other:?}"),
        }
    }
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_search_results_conflict_without_offset() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| form(req) == "id=7")
        .returning(|_| Ok(status(409)));

    let client = logged_in_client(mock);
    match client.search_results(7, None, None).await {
        Err(QbitError::InvalidArgument(msg)) => assert_eq!(msg, "offset is out of range"),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_conflicts_map_to_operation_failed() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/search/start")
        .times(1)
        .returning(|_| Ok(status(409)));
    mock.expect_send()
        .withf(|req| path(req) == "/api/v2/rss/addFeed")
        .times(1)
        .returning(|req| {
            assert_eq!(form(&req), "url=http%3A%2F%2Ffeeds.example%2Frss");
            Ok(status(409))
        });

    let client = logged_in_client(mock);
    match client.search_start("ubuntu", ["all"], "all").await {
        Err(QbitError::OperationFailed(msg)) => assert!(msg.contains("concurrent searches")),
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
    match client.rss_add_feed("http://feeds.example/rss", None).await {
        Err(QbitError::OperationFailed(msg)) => assert!(msg.contains("RSS feed")),
        other => panic!("Expected OperationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_speed_limits_mode_normal() {
    let mut mock = MockTransport::new();
    mock.expect_send().times(1).returning(|_| Ok(ok("0")));

    let client = logged_in_client(mock);
    assert!(!client.transfer_speed_limits_mode().await.unwrap());
}
