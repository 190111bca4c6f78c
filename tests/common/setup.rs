use std::sync::Arc;

use reqwest::Client;

use gemini_relay::config::Config;
use gemini_relay::service::RelayService;

pub fn create_test_config(api_base_url: &str) -> Config {
    let mut config = Config::new("test-key");
    config.api_base_url = api_base_url.to_string();
    config
}

pub fn create_test_service(api_base_url: &str) -> Arc<RelayService> {
    let config = create_test_config(api_base_url);
    Arc::new(RelayService::new(Client::new(), &config))
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
