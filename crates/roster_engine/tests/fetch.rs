use std::time::Duration;

use pretty_assertions::assert_eq;
use roster_core::CharacterStatus;
use roster_engine::{CatalogFetcher, CatalogSettings, FailureKind, ReqwestCatalogClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn character_json(id: u64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth", "url": "" },
        "location": { "name": "Earth", "url": "" },
        "image": format!("https://example.com/avatar/{id}.jpeg"),
        "episode": ["https://example.com/episode/1"],
        "url": format!("https://example.com/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn page_body(characters: Vec<Value>, next: Option<&str>) -> String {
    json!({
        "info": {
            "count": characters.len(),
            "pages": 42,
            "next": next,
            "prev": null
        },
        "results": characters
    })
    .to_string()
}

fn settings_for(server: &MockServer) -> CatalogSettings {
    CatalogSettings {
        base_url: server.uri(),
        ..CatalogSettings::default()
    }
}

#[tokio::test]
async fn fetch_parses_records_and_the_has_next_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            page_body(
                vec![
                    character_json(1, "Rick Sanchez", "Alive"),
                    character_json(3, "Summer Smith", "unknown"),
                ],
                Some("https://example.com/api/character?page=2"),
            ),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = ReqwestCatalogClient::new(settings_for(&server));
    let page = client.fetch_page(1).await.expect("fetch ok");

    assert!(page.has_next);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].name, "Rick Sanchez");
    assert_eq!(page.records[0].status, CharacterStatus::Alive);
    assert_eq!(page.records[1].status, CharacterStatus::Unknown);
    assert_eq!(page.records[1].episode_refs.len(), 1);
}

#[tokio::test]
async fn last_page_reports_no_next() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            page_body(vec![character_json(9, "Mr. Meeseeks", "Alive")], None),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = ReqwestCatalogClient::new(settings_for(&server));
    let page = client.fetch_page(3).await.expect("fetch ok");
    assert!(!page.has_next);
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestCatalogClient::new(settings_for(&server));
    let err = client.fetch_page(999).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(page_body(Vec::new(), None), "application/json"),
        )
        .mount(&server)
        .await;

    let settings = CatalogSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestCatalogClient::new(settings);
    let err = client.fetch_page(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn malformed_payload_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let client = ReqwestCatalogClient::new(settings_for(&server));
    let err = client.fetch_page(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn page_zero_is_rejected_before_any_request() {
    let client = ReqwestCatalogClient::new(CatalogSettings::default());
    let err = client.fetch_page(0).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPage);
}
