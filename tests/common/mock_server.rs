//! Mock NASA endpoints
//!
//! wiremock servers serving canned picture-of-the-day and image-search
//! bodies, and a [`Config`] pointing the client at them.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cosmos_explorer::egui_app::Config;
use cosmos_explorer::shared::config::{AppConfig, MIN_BCRYPT_COST};

pub const APOD_PATH: &str = "/planetary/apod";
pub const SEARCH_PATH: &str = "/search";
pub const TEST_API_KEY: &str = "TEST_KEY";

/// Client configuration aimed at `server`
pub fn mock_config(server: &MockServer) -> Config {
    let builder = AppConfig::builder()
        .apod_url(format!("{}{}", server.uri(), APOD_PATH))
        .images_url(format!("{}{}", server.uri(), SEARCH_PATH))
        .api_key(TEST_API_KEY)
        .http_timeout_secs(5)
        .bcrypt_cost(MIN_BCRYPT_COST);
    Config::with_builder(builder).expect("Invalid mock configuration")
}

/// Client configuration aimed at a local port nothing listens on
pub fn closed_port_config() -> Config {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a free port");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);

    let base = format!("http://127.0.0.1:{}", port);
    let builder = AppConfig::builder()
        .apod_url(format!("{}{}", base, APOD_PATH))
        .images_url(format!("{}{}", base, SEARCH_PATH))
        .api_key(TEST_API_KEY)
        .http_timeout_secs(5)
        .bcrypt_cost(MIN_BCRYPT_COST);
    Config::with_builder(builder).expect("Invalid closed-port configuration")
}

pub fn apod_body() -> Value {
    json!({
        "url": "https://apod.nasa.gov/apod/image/2401/pillars.jpg",
        "title": "Pillars of Creation",
        "date": "2024-01-15",
        "explanation": "Towers of cold gas and dust rise from a stellar nursery in the Eagle Nebula. ".repeat(4),
        "media_type": "image",
        "hdurl": "https://apod.nasa.gov/apod/image/2401/pillars_hd.jpg",
        "service_version": "v1"
    })
}

/// Three complete items and one without links
pub fn search_body() -> Value {
    json!({
        "collection": {
            "version": "1.0",
            "items": [
                {
                    "links": [{ "href": "https://images-assets.nasa.gov/m31.jpg", "rel": "preview" }],
                    "data": [{
                        "title": "Andromeda Galaxy",
                        "date_created": "2019-04-12T00:00:00Z",
                        "description": "The nearest large spiral galaxy to the Milky Way.",
                        "nasa_id": "m31"
                    }]
                },
                {
                    "links": [{ "href": "https://images-assets.nasa.gov/m51.jpg" }],
                    "data": [{
                        "title": "Whirlpool Galaxy",
                        "date_created": "2020-08-30T12:30:00Z",
                        "description": "An interacting grand-design spiral galaxy."
                    }]
                },
                {
                    "data": [{
                        "title": "No preview",
                        "date_created": "2021-01-01T00:00:00Z",
                        "description": "Missing links."
                    }]
                },
                {
                    "links": [{ "href": "https://images-assets.nasa.gov/ngc1300.jpg" }],
                    "data": [{
                        "title": "NGC 1300",
                        "date_created": "2018-02-02T00:00:00Z",
                        "description": "A barred spiral galaxy in Eridanus."
                    }]
                }
            ]
        }
    })
}

/// Serve `body` with 200 on `route`
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve an empty body with `status` on `route`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Both endpoints answering successfully
pub async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(&server, APOD_PATH, apod_body()).await;
    mount_json(&server, SEARCH_PATH, search_body()).await;
    server
}
