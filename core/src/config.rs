use anyhow::Context;

/// Gateway configuration, resolved from the process environment once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub watson: WatsonConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the Watson Assistant v2 service
#[derive(Debug, Clone)]
pub struct WatsonConfig {
    pub api_key: String,
    pub service_url: String,
    pub assistant_id: String,

    /// Disables TLS certificate verification toward the provider.
    /// Off unless the operator opts in via WATSON_ACCEPT_INVALID_CERTS.
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Required variables: `WATSON_API_KEY`, `WATSON_URL`,
    /// `WATSON_ASSISTANT_ID`, `PORT`. Optional: `HOST` (defaults to
    /// 0.0.0.0), `WATSON_ACCEPT_INVALID_CERTS` (defaults to false).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port_raw = require(&lookup, "PORT")?;
        let port = port_raw
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", port_raw))?;

        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port,
            },
            watson: WatsonConfig {
                api_key: require(&lookup, "WATSON_API_KEY")?,
                service_url: require(&lookup, "WATSON_URL")?,
                assistant_id: require(&lookup, "WATSON_ASSISTANT_ID")?,
                accept_invalid_certs: lookup("WATSON_ACCEPT_INVALID_CERTS")
                    .map(|value| truthy(&value))
                    .unwrap_or(false),
            },
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => anyhow::bail!("required environment variable {} is not set", key),
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
