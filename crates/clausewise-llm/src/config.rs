use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://ollama:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for the Ollama server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Without a trailing slash.
    pub base_url: String,
    pub model: String,
    /// Per-request timeout for generation calls.
    pub timeout: Duration,
    pub enabled: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            enabled: true,
        }
    }
}

impl LlmConfig {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64, enabled: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
            enabled,
        }
    }

    /// Read `OLLAMA_BASE_URL`, `OLLAMA_MODEL`, `OLLAMA_TIMEOUT` and `OLLAMA_ENABLED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    ///
    /// Only the exact value `false` (any case) disables the client. An
    /// unparsable timeout falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("OLLAMA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout_secs = match lookup("OLLAMA_TIMEOUT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid OLLAMA_TIMEOUT, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };
        let enabled = lookup("OLLAMA_ENABLED").is_none_or(|v| !v.eq_ignore_ascii_case("false"));
        Self::new(&base_url, &model, timeout_secs, enabled)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = LlmConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LlmConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn overrides_and_trims_trailing_slash() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("OLLAMA_BASE_URL", "http://localhost:11434/"),
            ("OLLAMA_MODEL", "mistral"),
            ("OLLAMA_TIMEOUT", "30"),
        ]));
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.enabled);
    }

    #[test]
    fn only_false_disables() {
        assert!(!LlmConfig::from_lookup(lookup(&[("OLLAMA_ENABLED", "FALSE")])).enabled);
        assert!(LlmConfig::from_lookup(lookup(&[("OLLAMA_ENABLED", "0")])).enabled);
        assert!(LlmConfig::from_lookup(lookup(&[("OLLAMA_ENABLED", "no")])).enabled);
    }

    #[test]
    fn bad_timeout_uses_default() {
        let config = LlmConfig::from_lookup(lookup(&[("OLLAMA_TIMEOUT", "soon")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
