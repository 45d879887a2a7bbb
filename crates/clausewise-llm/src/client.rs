//! HTTP client for a local Ollama server.

use std::time::Duration;

use clausewise_core::{ComparisonEnhancement, ComparisonResult, Enhancement, MultiCompareResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::insight::{LlmInsight, LlmStatus};
use crate::parse::{parse_json_object, parse_list};
use crate::prompts;

/// Reachability checks give up much sooner than generation calls.
const PING_TIMEOUT: Duration = Duration::from_secs(4);

const MAX_TIPS: usize = 5;
const MAX_CONCERNS: usize = 4;
const MAX_QUESTIONS: usize = 4;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
    top_p: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            num_predict: 800,
            top_p: 0.9,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

/// Ollama client.
///
/// The high-level calls ([`enhance`](Self::enhance),
/// [`compare_opinion`](Self::compare_opinion),
/// [`multi_compare_pick`](Self::multi_compare_pick)) never fail: a disabled
/// or unreachable server yields an un-enhanced value.
pub struct OllamaClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Self {
        let config = LlmConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(LlmConfig::from_env())
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        if !self.config.enabled {
            return Err(LlmError::Disabled);
        }
        let url = format!("{}/api/tags", self.config.base_url);
        debug!(url = %url, "checking ollama");
        let resp = self.client.get(&url).timeout(PING_TIMEOUT).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let tags: TagsResponse = resp.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// True when the client is enabled and the server answers.
    pub async fn is_available(&self) -> bool {
        self.list_models().await.is_ok()
    }

    pub async fn status(&self) -> LlmStatus {
        let model = &self.config.model;
        match self.list_models().await {
            Ok(all_models) => LlmStatus {
                available: true,
                model: model.clone(),
                model_loaded: all_models.iter().any(|name| name.contains(model.as_str())),
                all_models,
                base_url: self.config.base_url.clone(),
                reason: None,
            },
            Err(LlmError::Disabled) => {
                LlmStatus::unavailable(model, "Disabled via OLLAMA_ENABLED=false")
            }
            Err(LlmError::Server { status, .. }) => {
                LlmStatus::unavailable(model, format!("HTTP {status}"))
            }
            Err(e) => LlmStatus::unavailable(model, e.to_string()),
        }
    }

    /// Run one non-streaming generation and return the trimmed reply.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, LlmError> {
        if !self.config.enabled {
            return Err(LlmError::Disabled);
        }
        let url = format!("{}/api/generate", self.config.base_url);
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions::default(),
            system,
        };

        debug!(url = %url, prompt_chars = prompt.len(), "generating");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let reply: GenerateResponse = resp.json().await?;
        Ok(reply.response.trim().to_string())
    }

    /// Generation for the best-effort paths: failures are logged and dropped.
    async fn generate_or_skip(&self, prompt: &str) -> Option<String> {
        match self.generate(prompt, Some(prompts::SYSTEM_PROMPT)).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(error = %e, model = %self.config.model, "generation failed");
                None
            }
        }
    }

    /// Produce plain-English commentary for one analysed document.
    pub async fn enhance(
        &self,
        text: &str,
        doc_type: &str,
        risk_level: &str,
        risk_score: u32,
    ) -> LlmInsight {
        if !self.config.enabled || !self.is_available().await {
            info!("language model unavailable, skipping enhancement");
            return LlmInsight::default();
        }

        let summary_prompt = prompts::summary(text, doc_type);
        let verdict_prompt = prompts::verdict(text, doc_type, risk_level, risk_score);
        let tips_prompt = prompts::negotiation_tips(text, doc_type);
        let concerns_prompt = prompts::concerns(text, doc_type);
        let questions_prompt = prompts::questions(text, doc_type);

        let (summary, verdict, tips, concerns, questions) = tokio::join!(
            self.generate_or_skip(&summary_prompt),
            self.generate_or_skip(&verdict_prompt),
            self.generate_or_skip(&tips_prompt),
            self.generate_or_skip(&concerns_prompt),
            self.generate_or_skip(&questions_prompt),
        );

        let as_list = |reply: Option<String>, max| {
            reply.map(|r| parse_list(&r, max)).unwrap_or_default()
        };
        let insight = LlmInsight {
            plain_summary: summary.unwrap_or_default(),
            overall_verdict: verdict.unwrap_or_default(),
            negotiation_tips: as_list(tips, MAX_TIPS),
            plain_red_flags: as_list(concerns, MAX_CONCERNS),
            user_questions: as_list(questions, MAX_QUESTIONS),
            model_used: self.config.model.clone(),
            enhanced: true,
        };
        info!(
            model = %insight.model_used,
            tips = insight.negotiation_tips.len(),
            concerns = insight.plain_red_flags.len(),
            questions = insight.user_questions.len(),
            "enhancement complete"
        );
        insight
    }

    /// Ask which of two compared documents is fairer.
    ///
    /// A structured `{"better", "reason"}` reply is rendered as
    /// `"<better>: <reason>"`; anything else is kept verbatim.
    pub async fn compare_opinion(&self, result: &ComparisonResult) -> ComparisonEnhancement {
        if !self.config.enabled || !self.is_available().await {
            return ComparisonEnhancement::default();
        }
        let Some(reply) = self
            .generate_or_skip(&prompts::comparison_opinion(result))
            .await
        else {
            return ComparisonEnhancement::default();
        };
        let opinion = render_opinion(&reply);
        ComparisonEnhancement {
            enhanced: !opinion.is_empty(),
            model: self.config.model.clone(),
            opinion,
        }
    }

    /// Ask the model to recommend one document from a ranking.
    pub async fn multi_compare_pick(&self, result: &MultiCompareResult) -> Enhancement {
        if !self.config.enabled || !self.is_available().await {
            return Enhancement::default();
        }
        match self
            .generate_or_skip(&prompts::multi_compare_pick(result))
            .await
        {
            Some(pick) if !pick.is_empty() => Enhancement {
                pick,
                model: self.config.model.clone(),
                enhanced: true,
            },
            _ => Enhancement::default(),
        }
    }
}

fn render_opinion(reply: &str) -> String {
    let structured = parse_json_object(reply).and_then(|value| {
        let better = value.get("better")?.as_str()?.trim().to_string();
        let reason = value.get("reason")?.as_str()?.trim().to_string();
        Some(if better.is_empty() {
            reason
        } else {
            format!("{better}: {reason}")
        })
    });
    structured.unwrap_or_else(|| reply.trim().to_string())
}
