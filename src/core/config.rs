use std::env;

pub const DEFAULT_OPENAI_API_HOSTNAME: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60 * 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    // A blank key is treated the same as a missing one
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub demo_mode: bool,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Build the config from any key/value source. `Default` uses the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_hostname = lookup("TUTOR_OPENAI_HOST")
            .unwrap_or_else(|| DEFAULT_OPENAI_API_HOSTNAME.to_string());
        let openai_api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
        let openai_model =
            lookup("TUTOR_OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
        let demo_mode = lookup("DEMO_MODE").is_some_and(|v| v == "true");
        let request_timeout_secs = lookup("TUTOR_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            demo_mode,
            request_timeout_secs,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}
