//! Deployment base paths, fixed at compile time.
//!
//! `PUBLIC_URL` is the path the app is served from (e.g. `/whodunit` on a
//! shared host) and `WHODUNIT_API_BASE` the origin of the generation API.
//! Both default to same-origin root.

use whodunit_game::ClientSettings;

/// Base path for the router (e.g., `/whodunit` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Client settings for this build.
#[must_use]
pub fn client_settings() -> ClientSettings {
    settings_with_api_base(option_env!("WHODUNIT_API_BASE").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn settings_with_api_base(base: &str) -> ClientSettings {
    ClientSettings::default().with_api_base(base)
}
