//! Home screen load: greeting, joint fetch, failure alert

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use wiremock::MockServer;

use crate::common::*;
use cosmos_explorer::egui_app::home::{load_home, HomeLoadError, HomeScreen, LOAD_FAILED};
use cosmos_explorer::egui_app::types::Alert;
use cosmos_explorer::egui_app::{NasaClient, ReadCounter};

#[tokio::test]
async fn test_load_home_reads_greeting_and_feed() {
    let server = healthy_server().await;
    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let sessions = memory_sessions().await;
    sessions.register(sample_registration()).await.unwrap();

    let data = load_home(&sessions, &client).await.unwrap();
    assert_eq!(data.first_name, "Carl");
    assert_eq!(data.feed.galaxies.len(), 3);
}

#[tokio::test]
async fn test_load_home_without_profile_has_empty_name() {
    let server = healthy_server().await;
    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let sessions = memory_sessions().await;

    let data = load_home(&sessions, &client).await.unwrap();
    assert_eq!(data.first_name, "");
}

#[tokio::test]
async fn test_load_home_fails_on_apod_error() {
    let server = MockServer::start().await;
    mount_status(&server, APOD_PATH, 503).await;
    mount_json(&server, SEARCH_PATH, search_body()).await;
    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let sessions = memory_sessions().await;

    assert_matches!(load_home(&sessions, &client).await, Err(HomeLoadError::Api(_)));
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

fn poll_until_loaded(screen: &mut HomeScreen) -> Option<Alert> {
    for _ in 0..400 {
        let alert = screen.poll();
        if !screen.is_loading() {
            return alert;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("home screen never finished loading");
}

#[test]
fn test_screen_loads_and_counts_reads() {
    let rt = runtime();
    let server = rt.block_on(healthy_server());
    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let sessions = rt.block_on(memory_sessions());

    let mut screen = HomeScreen::start(rt.handle(), sessions, client);
    assert!(screen.is_loading());
    assert_eq!(poll_until_loaded(&mut screen), None);

    let mut counter = ReadCounter::new();
    screen.toggle_description(&mut counter);
    screen.toggle_galaxy(2, &mut counter);
    assert_eq!(counter.count(), 2);
    assert_eq!(screen.galaxy_text(2).as_deref(), Some("A barred spiral galaxy in Eridanus."));
}

#[test]
fn test_screen_failure_raises_alert() {
    let rt = runtime();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        mount_json(&server, APOD_PATH, apod_body()).await;
        mount_status(&server, SEARCH_PATH, 500).await;
        server
    });
    let client = NasaClient::new(&mock_config(&server)).unwrap();
    let sessions = rt.block_on(memory_sessions());

    let mut screen = HomeScreen::start(rt.handle(), sessions, client);
    assert_eq!(poll_until_loaded(&mut screen), Some(Alert::error(LOAD_FAILED)));
    assert!(screen.feed().is_none());
}
