//! Process configuration, read once at startup from flags or environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::explain::openai::OpenAiConfig;

/// Telecalc API server.
#[derive(Parser, Debug, Clone)]
#[command(name = "telecalc-api", about = "Telecom calculators with plain-language explanations")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: SocketAddr,

    /// The single browser origin allowed to call the API.
    #[arg(long, env = "ALLOWED_ORIGIN", default_value = "http://localhost:5174")]
    pub allowed_origin: String,

    /// API key for the text generation service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    /// Chat model used for explanations.
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    /// Completion length cap.
    #[arg(long, env = "OPENAI_MAX_TOKENS", default_value_t = 400)]
    pub max_tokens: u32,

    /// Sampling temperature; the service default applies when unset.
    #[arg(long, env = "OPENAI_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Optional system message sent ahead of every prompt.
    #[arg(long, env = "OPENAI_SYSTEM_PROMPT")]
    pub system_prompt: Option<String>,

    /// Timeout for one text generation call, in seconds.
    #[arg(long, env = "OPENAI_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn openai(&self) -> OpenAiConfig {
        OpenAiConfig {
            api_key: self.openai_api_key.clone(),
            base_url: self.openai_base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system_prompt: self.system_prompt.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let cfg = Config::try_parse_from(["telecalc-api", "--openai-api-key", "sk-test"]).unwrap();
        assert_eq!(cfg.max_tokens, 400);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.temperature.is_none());

        let openai = cfg.openai();
        assert_eq!(openai.api_key, "sk-test");
        assert_eq!(openai.timeout, Duration::from_secs(30));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "telecalc-api",
            "--openai-api-key",
            "sk-test",
            "--listen-addr",
            "127.0.0.1:9000",
            "--model",
            "gpt-4o-mini",
            "--temperature",
            "0.5",
            "--system-prompt",
            "You are a helpful telecom design assistant.",
        ])
        .unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.openai().model, "gpt-4o-mini");
        assert_eq!(cfg.temperature, Some(0.5));
        assert!(cfg.system_prompt.is_some());
    }
}
