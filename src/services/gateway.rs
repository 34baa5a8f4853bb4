//! Translation gateway
//!
//! The translation service is an opaque collaborator: text in, text or an
//! error out. The default implementation talks to the public Google
//! translate endpoint.

use crate::config::GatewayConfig;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Anything that can translate text between two language codes
pub trait TranslationGateway: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, GatewayError>;
}

pub struct GoogleGateway {
    client: Client,
    endpoint: String,
}

impl GoogleGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl TranslationGateway for GoogleGateway {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body: Value = response.json()?;
        parse_response(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The payload looks like `[[["Hello", "Привет", ...], ...], null, "ru"]`.
pub fn parse_response(body: &Value) -> Result<String, GatewayError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| GatewayError::Decode("missing translation segments".to_string()))?;

    let translated = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect::<String>();

    Ok(translated)
}
