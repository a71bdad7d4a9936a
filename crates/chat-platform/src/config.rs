//! Startup configuration.
//!
//! The backend base URL comes from, first match wins:
//!   1. `<meta name="chat-backend-url" content="...">` in the host page
//!   2. the `CHAT_BACKEND_URL` environment variable at build time
//!   3. the built-in default

use chat_types::config::ClientConfig;

pub const BACKEND_META_NAME: &str = "chat-backend-url";

/// Read the configuration from the page and build environment.
/// Call once at startup.
pub fn load_config() -> ClientConfig {
    let from_page = page_meta(BACKEND_META_NAME);
    let config = resolve_config(from_page.as_deref(), option_env!("CHAT_BACKEND_URL"));
    log::info!("Chat endpoint: {}", config.endpoint());
    config
}

/// Pick the first non-blank base URL source.
pub fn resolve_config(from_page: Option<&str>, from_build: Option<&str>) -> ClientConfig {
    let base = [from_page, from_build]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty());
    match base {
        Some(url) => ClientConfig::with_backend(url),
        None => ClientConfig::default(),
    }
}

fn page_meta(name: &str) -> Option<String> {
    // Not running inside a page (worker, node test runner)
    web_sys::window()?;
    let selector = format!("meta[name=\"{}\"]", name);
    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_types::config::DEFAULT_BACKEND_URL;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(None, None);
        assert_eq!(config.backend_base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_resolve_prefers_page_over_build() {
        let config = resolve_config(Some("https://page.example"), Some("https://build.example"));
        assert_eq!(config.backend_base_url, "https://page.example");
    }

    #[test]
    fn test_resolve_skips_blank_sources() {
        let config = resolve_config(Some("  "), Some("https://build.example/"));
        assert_eq!(config.endpoint(), "https://build.example/chat");
    }
}
