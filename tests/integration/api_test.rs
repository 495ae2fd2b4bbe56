//! NASA client integration tests against wiremock

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::*;
use cosmos_explorer::egui_app::NasaClient;
use cosmos_explorer::shared::ApiError;

#[tokio::test]
async fn test_fetch_apod_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(APOD_PATH))
        .and(query_param("api_key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(apod_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let apod = client.fetch_apod().await.unwrap();

    assert_eq!(apod.title, "Pillars of Creation");
    assert_eq!(apod.date, "2024-01-15");
    assert_eq!(apod.media_type.as_deref(), Some("image"));
    assert_eq!(apod.copyright, None);
}

#[tokio::test]
async fn test_fetch_apod_status_error() {
    let server = MockServer::start().await;
    mount_status(&server, APOD_PATH, 429).await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let err = client.fetch_apod().await.unwrap_err();

    assert_matches!(err, ApiError::Status(429));
    assert_eq!(err.to_string(), "HTTP error! Status: 429");
}

#[tokio::test]
async fn test_fetch_apod_malformed_body() {
    let server = MockServer::start().await;
    mount_json(&server, APOD_PATH, serde_json::json!({ "title": "no url" })).await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    assert_matches!(client.fetch_apod().await, Err(ApiError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_galaxies_sends_search_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "galaxy"))
        .and(query_param("media_type", "image"))
        .and(query_param("page_size", "10"))
        .and(query_param("year_start", "2018"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let cards = client.fetch_galaxies().await.unwrap();

    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Andromeda Galaxy", "Whirlpool Galaxy", "NGC 1300"]);
    assert_eq!(cards[0].image_url, "https://images-assets.nasa.gov/m31.jpg");
    assert_eq!(cards[1].display_date(), "2020-08-30");
}

#[tokio::test]
async fn test_fetch_galaxies_empty_collection() {
    let server = MockServer::start().await;
    mount_json(&server, SEARCH_PATH, serde_json::json!({ "collection": { "items": [] } })).await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    assert!(client.fetch_galaxies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_home_feed_success() {
    let server = healthy_server().await;
    let client = NasaClient::new(&mock_config(&server)).unwrap();

    let feed = client.fetch_home_feed().await.unwrap();
    assert_eq!(feed.apod.title, "Pillars of Creation");
    assert_eq!(feed.galaxies.len(), 3);
}

#[tokio::test]
async fn test_home_feed_fails_when_either_fetch_fails() {
    let server = MockServer::start().await;
    mount_json(&server, APOD_PATH, apod_body()).await;
    mount_status(&server, SEARCH_PATH, 500).await;

    let client = NasaClient::new(&mock_config(&server)).unwrap();
    assert_matches!(client.fetch_home_feed().await, Err(ApiError::Status(500)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = NasaClient::new(&closed_port_config()).unwrap();
    assert_matches!(client.fetch_apod().await, Err(ApiError::Transport(_)));
}
