//! Integration tests using wiremock to simulate the Depscian API.

use depscian::{Client, ConfigOption, Error, API_KEY_HEADER};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

/// Serves one connection with a hand-written status line, which wiremock
/// cannot customize.
async fn raw_status_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let body = "upstream unavailable";
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/v2", addr)
}

async fn client_for(mock_server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(format!("{}/v2", mock_server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_status_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": 28})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let status = client.status().get().await.unwrap();

    assert_eq!(status["servers"], 28);
}

#[tokio::test]
async fn test_server_scoped_endpoints() {
    let mock_server = MockServer::start().await;

    for (endpoint, marker) in [
        ("/v2/admins", "admins"),
        ("/v2/families", "families"),
        ("/v2/fractions", "fractions"),
        ("/v2/ghetto", "ghetto"),
        ("/v2/leaders", "leaders"),
        ("/v2/subleaders", "subleaders"),
        ("/v2/map", "map"),
        ("/v2/online", "online"),
        ("/v2/sobes", "sobes"),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("serverId", "5"))
            .and(header(API_KEY_HEADER, API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": marker})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server).await;

    assert_eq!(client.admins().get(5).await.unwrap()["kind"], "admins");
    assert_eq!(client.families().list(5).await.unwrap()["kind"], "families");
    assert_eq!(client.fractions().list(5).await.unwrap()["kind"], "fractions");
    assert_eq!(client.ghetto().get(5).await.unwrap()["kind"], "ghetto");
    assert_eq!(
        client.leadership().get_leaders(5).await.unwrap()["kind"],
        "leaders"
    );
    assert_eq!(
        client.leadership().get_subleaders(5).await.unwrap()["kind"],
        "subleaders"
    );
    assert_eq!(client.map().get(5).await.unwrap()["kind"], "map");
    assert_eq!(client.online().get(5).await.unwrap()["kind"], "online");
    assert_eq!(client.sobes().get(5).await.unwrap()["kind"], "sobes");
}

#[tokio::test]
async fn test_family_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/family"))
        .and(query_param("serverId", "3"))
        .and(query_param("famId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "name": "Corleone"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let family = client.families().get(3, 42).await.unwrap();

    assert_eq!(family["name"], "Corleone");
}

#[tokio::test]
async fn test_fraction_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/fraction"))
        .and(query_param("serverId", "3"))
        .and(query_param("fractionId", "lspd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let members = client.fractions().get_members(3, "lspd").await.unwrap();

    assert_eq!(members["members"], json!([]));
}

#[tokio::test]
async fn test_player_find_into_typed_view() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Player {
        nickname: String,
        level: u32,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/player/find"))
        .and(query_param("serverId", "1"))
        .and(query_param("nickname", "Nick Name"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"nickname": "Nick Name", "level": 9})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let found = client.player().find(1, "Nick Name").await.unwrap();
    let player: Player = found.parse().unwrap();

    assert_eq!(
        player,
        Player {
            nickname: "Nick Name".to_string(),
            level: 9
        }
    );
}

#[tokio::test]
async fn test_api_key_sent_on_every_endpoint() {
    let mock_server = MockServer::start().await;

    // Anything without the key falls through to wiremock's default 404.
    Mock::given(method("GET"))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    client.status().get().await.unwrap();
    client.online().get(1).await.unwrap();
    client.player().find(1, "Someone").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in requests {
        assert_eq!(request.headers.get("x-api-key").unwrap(), API_KEY);
    }
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/player/find"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Player not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client.player().find(1, "Ghost").await;

    match result {
        Err(Error::NotFound) => {}
        _ => panic!("Expected NotFound, got {:?}", result),
    }
}

#[tokio::test]
async fn test_empty_success_body_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/family"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.families().get(1, 7).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_undecodable_success_body_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/online"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.online().get(1).await.unwrap_err();
    assert!(err.is_not_found());

    // The raw envelope still shows what came back.
    let raw = client
        .api()
        .get_online_list(&depscian::api::ServerParams { server_id: 1 })
        .await
        .unwrap();
    assert!(raw.body.is_none());
    assert_eq!(raw.raw_body, "<html>maintenance</html>");
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/map"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.map().get(1).await.unwrap_err();

    assert!(err.to_string().contains("Internal Server Error"));
    match err {
        Error::Status {
            status,
            raw_response,
            ..
        } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(raw_response, "Server error");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/admins"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid API key"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.admins().get(1).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_connection_failure_is_execution_error() {
    let client = Client::builder(API_KEY)
        .base_url("http://127.0.0.1:1/v2")
        .build()
        .unwrap();

    let err = client.status().get().await.unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_timeout_option_is_enforced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(
        API_KEY,
        [
            ConfigOption::base_url(format!("{}/v2", mock_server.uri())),
            ConfigOption::timeout(Duration::from_millis(100)),
        ],
    )
    .unwrap();

    let err = client.status().get().await.unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_custom_http_client_timeout_replaces_earlier_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let custom = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let client = Client::builder(API_KEY)
        .base_url(format!("{}/v2", mock_server.uri()))
        .timeout(Duration::from_secs(5))
        .http_client(custom)
        .build()
        .unwrap();

    assert_eq!(client.timeout(), None);

    // The custom client's 100ms wins over the discarded 5s.
    let err = client.status().get().await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_custom_http_client_still_gets_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/sobes"))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder(API_KEY)
        .http_client(reqwest::Client::new())
        .base_url(format!("{}/v2", mock_server.uri()))
        .build()
        .unwrap();

    let sobes = client.sobes().get(2).await.unwrap();
    assert_eq!(*sobes, json!([]));
}

#[tokio::test]
async fn test_caller_deadline_cancels_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/ghetto"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    // The caller's own deadline yields tokio's error, not a classified one.
    let result = tokio::time::timeout(Duration::from_millis(100), client.ghetto().get(1)).await;
    let elapsed = result.unwrap_err();
    assert_eq!(elapsed.to_string(), "deadline has elapsed");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/online"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"players": 10})))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let mut handles = Vec::new();
    for server_id in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.online().get(server_id).await
        }));
    }

    for handle in handles {
        let online = handle.await.unwrap().unwrap();
        assert_eq!(online["players"], 10);
    }
}

#[tokio::test]
async fn test_status_error_keeps_server_reason_phrase() {
    let base_url = raw_status_server("503 Down For Maintenance").await;
    let client = Client::builder(API_KEY).base_url(base_url).build().unwrap();

    let err = client.online().get(1).await.unwrap_err();

    assert_eq!(err.to_string(), "unexpected status: 503 Down For Maintenance");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert_eq!(err.raw_response(), Some("upstream unavailable"));
}

#[tokio::test]
async fn test_status_error_for_nonstandard_code() {
    let base_url = raw_status_server("520 Origin Error").await;
    let client = Client::builder(API_KEY).base_url(base_url).build().unwrap();

    let err = client.map().get(1).await.unwrap_err();

    match err {
        Error::Status {
            status,
            status_text,
            ..
        } => {
            assert_eq!(status.as_u16(), 520);
            assert_eq!(status_text, "520 Origin Error");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}
