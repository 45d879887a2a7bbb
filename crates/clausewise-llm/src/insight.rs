use serde::{Deserialize, Serialize};

/// Plain-English commentary produced for a single analysis.
///
/// All fields are empty and `enhanced` is false when the model was disabled
/// or unreachable. Individual fields may still be empty on an enhanced
/// insight when the matching generation call failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmInsight {
    pub plain_summary: String,
    pub overall_verdict: String,
    pub negotiation_tips: Vec<String>,
    pub plain_red_flags: Vec<String>,
    pub user_questions: Vec<String>,
    pub model_used: String,
    pub enhanced: bool,
}

/// Health report for the configured Ollama server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmStatus {
    pub available: bool,
    pub model: String,
    /// True when any installed model name contains the configured model.
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub all_models: Vec<String>,
    #[serde(default)]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LlmStatus {
    pub(crate) fn unavailable(model: &str, reason: impl Into<String>) -> Self {
        Self {
            available: false,
            model: model.to_string(),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_insight_is_not_enhanced() {
        let insight = LlmInsight::default();
        assert!(!insight.enhanced);
        assert!(insight.plain_summary.is_empty());
        assert!(insight.negotiation_tips.is_empty());
    }

    #[test]
    fn unavailable_status_serialises_reason() {
        let status = LlmStatus::unavailable("llama3.2", "HTTP 503");
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["available"], false);
        assert_eq!(value["reason"], "HTTP 503");
        assert_eq!(value["model"], "llama3.2");
    }

    #[test]
    fn available_status_omits_reason() {
        let status = LlmStatus {
            available: true,
            model: "llama3.2".into(),
            model_loaded: true,
            all_models: vec!["llama3.2:latest".into()],
            base_url: "http://ollama:11434".into(),
            reason: None,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert!(value.get("reason").is_none());
        assert_eq!(value["all_models"][0], "llama3.2:latest");
    }
}
