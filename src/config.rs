use std::env;
use anyhow::{Context, Result};
use redis::IntoConnectionInfo;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        redis_url
            .as_str()
            .into_connection_info()
            .context("REDIS_URL must be a valid redis:// or rediss:// URL")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            redis_url,
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}", redact_password(&self.redis_url));
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

/// Masks the password of a connection URL for logging.
fn redact_password(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    if url.password().is_some() && url.set_password(Some("***")).is_err() {
        return "<redacted>".to_string();
    }

    url.to_string()
}
