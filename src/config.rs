use std::{env, fmt, time::Duration};

use tracing::warn;

use crate::prompt::Persona;

pub const DEFAULT_UPSTREAM_URL: &str = "https://chatgpt-42.p.rapidapi.com/gpt4o";
pub const DEFAULT_UPSTREAM_HOST: &str = "chatgpt-42.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, resolved once at start-up and shared read-only
/// with every request.
#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Checked per request; `None` turns every enhance call into a
    /// configuration error instead of failing start-up.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub upstream_host: String,
    pub timeout_ms: u64,
    pub system_prompt: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Unparseable or zero
    /// numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("RAPIDAPI_KEY");

        let upstream_url = lookup("RAPIDAPI_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_host =
            lookup("RAPIDAPI_HOST").unwrap_or_else(|| DEFAULT_UPSTREAM_HOST.to_string());

        let timeout_ms = lookup("ENHANCE_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let system_prompt = match lookup("ENHANCE_SYSTEM_PROMPT") {
            Some(text) if !text.trim().is_empty() => text,
            _ => persona(lookup("ENHANCE_PERSONA")).system_prompt().to_string(),
        };

        Self {
            port,
            api_key,
            upstream_url,
            upstream_host,
            timeout_ms,
            system_prompt,
        }
    }

    /// Returns the API key only when it is set to something non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_host: DEFAULT_UPSTREAM_HOST.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            system_prompt: Persona::default().system_prompt().to_string(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("upstream_url", &self.upstream_url)
            .field("upstream_host", &self.upstream_host)
            .field("timeout_ms", &self.timeout_ms)
            .field("system_prompt_len", &self.system_prompt.len())
            .finish()
    }
}

fn persona(name: Option<String>) -> Persona {
    let Some(name) = name else {
        return Persona::default();
    };

    name.parse::<Persona>().unwrap_or_else(|err| {
        warn!(error = %err, fallback = %Persona::default(), "ignoring ENHANCE_PERSONA");
        Persona::default()
    })
}
