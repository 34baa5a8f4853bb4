//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Translation gateway (HTTP)
//! - Background execution of translation requests
//! - System clipboard

pub mod clipboard;
pub mod gateway;
pub mod job_runner;

pub use clipboard::{Clipboard, SystemClipboard};
pub use gateway::{GoogleGateway, TranslationGateway};
pub use job_runner::{JobRunner, RequestId, TranslationOutcome, TranslationRequest};
