//! Integration tests
//!
//! Storage, NASA client, home load and configuration against in-memory
//! stores and wiremock servers.

#[path = "../common/mod.rs"]
mod common;

mod api_test;
mod auth_flow_test;
mod config_test;
mod home_test;
