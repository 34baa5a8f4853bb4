//! Translator panel state
//!
//! Input/output text, the current language direction, and the errors shown
//! in place of the output. The gateway call itself lives in the job runner;
//! this type only decides what a request is and what its outcome means.

use super::history::TranslationRecord;
use super::language::Language;
use crate::services::{RequestId, TranslationOutcome, TranslationRequest};
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long the copy tooltip stays up
pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Error: enter text to translate")]
    EmptyInput,
    #[error("Translation error: {reason}")]
    GatewayFailure { reason: String },
}

#[derive(Debug)]
pub struct TranslatorSession {
    pub source: Language,
    pub target: Language,
    pub input: String,
    pub output: String,
    /// Message shown over the output field
    pub error: Option<String>,
    pending: Option<RequestId>,
    copy_notice: Option<(String, Instant)>,
}

impl Default for TranslatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorSession {
    pub fn new() -> Self {
        Self {
            source: Language::Russian,
            target: Language::Aleut,
            input: String::new(),
            output: String::new(),
            error: None,
            pending: None,
            copy_notice: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the input and build a gateway request.
    ///
    /// On empty input the error message is set and no request is produced.
    pub fn prepare_request(&mut self) -> Result<TranslationRequest, TranslateError> {
        let text = self.input.trim();
        if text.is_empty() {
            let err = TranslateError::EmptyInput;
            self.output.clear();
            self.error = Some(err.to_string());
            return Err(err);
        }

        Ok(TranslationRequest {
            text: text.to_string(),
            source: self.source,
            target: self.target,
        })
    }

    /// Mark a submitted request as the one whose result we wait for
    pub fn begin(&mut self, id: RequestId) {
        self.pending = Some(id);
        self.error = None;
        self.output.clear();
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Apply a finished request.
    ///
    /// Returns the history record on success. Outcomes for anything but the
    /// awaited request are ignored.
    pub fn complete(&mut self, outcome: TranslationOutcome) -> Option<TranslationRecord> {
        if self.pending != Some(outcome.id) {
            log::debug!("Ignoring stale translation #{}", outcome.id);
            return None;
        }
        self.pending = None;

        let failure = match outcome.result {
            Ok(text) if !text.trim().is_empty() => {
                self.output = text.clone();
                self.error = None;
                return Some(TranslationRecord {
                    source_lang: outcome.request.source.name().to_string(),
                    input_text: outcome.request.text,
                    target_lang: outcome.request.target.name().to_string(),
                    translated_text: text,
                });
            }
            Ok(_) => TranslateError::GatewayFailure {
                reason: "the service returned no text".to_string(),
            },
            Err(e) => TranslateError::GatewayFailure {
                reason: e.to_string(),
            },
        };

        log::warn!("{}", failure);
        self.output.clear();
        self.error = Some(failure.to_string());
        None
    }

    /// Swap the direction; texts swap too when either field has content
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);

        let input = self.input.trim().to_string();
        let output = self.output.trim().to_string();
        if !input.is_empty() || !output.is_empty() {
            self.input = output;
            self.output = input;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.on_input_changed();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.on_input_changed();
        }
    }

    /// A result for the old input must not land in the output
    fn on_input_changed(&mut self) {
        self.pending = None;
        self.error = None;
        self.output.clear();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.error = None;
    }

    /// Fill both fields from a history card
    pub fn load_record(&mut self, record: &TranslationRecord) {
        self.input = record.input_text.clone();
        self.output = record.translated_text.clone();
        self.error = None;
    }

    pub fn show_copy_notice(&mut self, message: &str, now: Instant) {
        self.copy_notice = Some((message.to_string(), now));
    }

    /// The tooltip text, if it has not expired yet
    pub fn copy_notice(&self, now: Instant) -> Option<&str> {
        self.copy_notice
            .as_ref()
            .filter(|(_, shown)| now.duration_since(*shown) < COPY_NOTICE_DURATION)
            .map(|(message, _)| message.as_str())
    }

    pub fn expire_copy_notice(&mut self, now: Instant) {
        if self.copy_notice(now).is_none() {
            self.copy_notice = None;
        }
    }
}
