use std::time::Duration;

use anyhow::Result;
use handlebars::Handlebars;
use http::StatusCode;
use serde_json::Value;

use super::error::TutorError;
use super::normalize::TutorRequest;
use super::prompt::{render_demo_answer, system_prompt, templates};
use crate::core::AppConfig;
use crate::openai::{Message, Role, completion};

pub const TEMPERATURE: f64 = 0.3;
pub const NO_ANSWER: &str = "No answer";
pub const GENERIC_UPSTREAM_ERROR: &str = "upstream error";

/// Answers a normalized tutor request, either from the demo template
/// or with a single call to an OpenAI compatible chat completions
/// API. Holds no per-request state so one instance is shared by all
/// requests.
pub struct Gateway {
    http: reqwest::Client,
    templates: Handlebars<'static>,
    api_hostname: String,
    api_key: Option<String>,
    model: String,
    demo_mode: bool,
    timeout: Duration,
}

impl Gateway {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            templates: templates(),
            api_hostname: config.openai_api_hostname.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            demo_mode: config.demo_mode,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    pub async fn answer(&self, request: &TutorRequest) -> Result<String, TutorError> {
        if self.demo_mode {
            tracing::debug!("Demo mode, answering without a completion call");
            return Ok(render_demo_answer(&self.templates, &request.question)?);
        }

        if request.question.is_empty() {
            return Err(TutorError::EmptyQuestion);
        }

        let api_key = self.api_key.as_deref().ok_or(TutorError::MissingApiKey)?;

        let messages = completion_messages(request);
        tracing::debug!(
            "Requesting completion from {} with {} messages",
            self.model,
            messages.len()
        );

        let resp = completion(
            &self.http,
            &messages,
            &self.api_hostname,
            api_key,
            &self.model,
            TEMPERATURE,
            self.timeout,
        )
        .await?;

        if !resp.status.is_success() {
            return Err(TutorError::Upstream {
                status: resp.status.as_u16(),
                message: upstream_error_message(resp.status, &resp.body),
            });
        }

        Ok(answer_from_completion(&resp.body))
    }
}

/// The full message sequence sent upstream: the tutor instructions,
/// the conversation so far, then the question.
pub fn completion_messages(request: &TutorRequest) -> Vec<Message> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(Message::new(Role::System, system_prompt()));
    messages.extend(request.history.iter().cloned());
    messages.push(Message::new(Role::User, &request.question));
    messages
}

/// Pick the most specific error message available: the provider's own
/// `error.message`, then the status line, then a fixed string.
pub fn upstream_error_message(status: StatusCode, body: &Value) -> String {
    if let Some(msg) = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
    {
        return msg.to_string();
    }

    if let Some(reason) = status.canonical_reason() {
        return format!("{} {}", status.as_u16(), reason);
    }

    GENERIC_UPSTREAM_ERROR.to_string()
}

pub fn answer_from_completion(body: &Value) -> String {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .unwrap_or(NO_ANSWER)
        .to_string()
}
