//! Application configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the app can start with zero
//! configuration.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Display name of the signed-in user.
    /// Env: `CAMPFIRE_USER`
    /// Default: `"You"`
    pub current_user: String,

    /// Maximum number of entries in the dashboard activity feed.
    /// Env: `CAMPFIRE_FEED_LIMIT`
    /// Default: `10`
    pub feed_limit: usize,

    /// Whether store operations simulate 200-500 ms backend latency.
    /// Env: `CAMPFIRE_SIMULATE_LATENCY` (true/false)
    /// Default: `true`
    pub simulate_latency: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_user: "You".to_string(),
            feed_limit: 10,
            simulate_latency: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(user) = std::env::var("CAMPFIRE_USER") {
            if !user.is_empty() {
                config.current_user = user;
            }
        }

        if let Ok(val) = std::env::var("CAMPFIRE_FEED_LIMIT") {
            if let Ok(n) = val.parse::<usize>() {
                config.feed_limit = n;
            } else {
                tracing::warn!(value = %val, "Invalid CAMPFIRE_FEED_LIMIT, using default");
            }
        }

        if let Ok(val) = std::env::var("CAMPFIRE_SIMULATE_LATENCY") {
            config.simulate_latency = parse_flag(&val);
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

/// Everything except "false"/"0" counts as enabled.
fn parse_flag(val: &str) -> bool {
    val != "false" && val != "0"
}
