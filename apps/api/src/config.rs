use anyhow::{Context, Result};

/// Which of the two configured models a generation step runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheaper, faster model used by most steps.
    Fast,
    /// Higher-capability model reserved for steps that synthesize prior outputs.
    Heavy,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub fast_model: String,
    pub heavy_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            fast_model: std::env::var("OPENAI_FAST_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            heavy_model: std::env::var("OPENAI_HEAVY_MODEL")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Resolves a tier to its configured model identifier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Heavy => &self.heavy_model,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
