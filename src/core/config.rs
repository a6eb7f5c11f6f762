//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Runtime settings for the SSR binary. Everything has a default so a bare
/// `cargo leptos serve` works without an .env file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive.
    /// Example: studyflow=debug,tower_http=warn
    pub log_filter: String,

    /// Serve pre-built .br/.gz variants of bundle assets when present.
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        let log_filter = std::env::var("STUDYFLOW_LOG").unwrap_or_else(|_| "info".to_string());
        let precompressed_assets = std::env::var("STUDYFLOW_PRECOMPRESSED")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        Self {
            log_filter,
            precompressed_assets,
        }
    }
}
