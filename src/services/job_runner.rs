//! Background translation runner
//!
//! Runs gateway calls on a worker thread so the UI loop never blocks.
//! At most one request is in flight: submitting a new one cancels the
//! previous request, and a cancelled request never reports a result.

use super::gateway::{GatewayError, TranslationGateway};
use crate::model::language::Language;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

#[derive(Debug)]
pub struct TranslationOutcome {
    pub id: RequestId,
    pub request: TranslationRequest,
    pub result: Result<String, GatewayError>,
}

struct PendingJob {
    id: RequestId,
    request: TranslationRequest,
    receiver: Receiver<TranslationOutcome>,
    cancelled: Arc<AtomicBool>,
    start_instant: Instant,
}

pub struct JobRunner {
    gateway: Arc<dyn TranslationGateway>,
    job: Option<PendingJob>,
    next_id: RequestId,
}

impl JobRunner {
    pub fn new(gateway: Arc<dyn TranslationGateway>) -> Self {
        Self {
            gateway,
            job: None,
            next_id: 1,
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.job.is_some()
    }

    /// Spawn a request, superseding any request still in flight
    pub fn spawn(&mut self, request: TranslationRequest) -> RequestId {
        self.cancel();

        let id = self.next_id;
        self.next_id += 1;

        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let gateway = Arc::clone(&self.gateway);
        let worker_cancelled = Arc::clone(&cancelled);
        let worker_request = request.clone();

        log::info!(
            "Translation #{} submitted ({} -> {}, {} chars)",
            id,
            request.source.code(),
            request.target.code(),
            request.text.chars().count()
        );

        thread::spawn(move || {
            let result = gateway.translate(
                &worker_request.text,
                worker_request.source.code(),
                worker_request.target.code(),
            );

            if worker_cancelled.load(Ordering::SeqCst) {
                log::debug!("Translation #{} finished after cancellation, dropped", id);
                return;
            }

            let _ = tx.send(TranslationOutcome {
                id,
                request: worker_request,
                result,
            });
        });

        self.job = Some(PendingJob {
            id,
            request,
            receiver: rx,
            cancelled,
            start_instant: Instant::now(),
        });

        id
    }

    /// Take the result of the in-flight request if it has arrived
    pub fn poll(&mut self) -> Option<TranslationOutcome> {
        let job = self.job.as_ref()?;

        let outcome = match job.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => TranslationOutcome {
                id: job.id,
                request: job.request.clone(),
                result: Err(GatewayError::Decode(
                    "translation worker stopped unexpectedly".to_string(),
                )),
            },
        };

        if let Some(job) = self.job.take() {
            log::info!(
                "Translation #{} completed in {:.2}s ({})",
                job.id,
                job.start_instant.elapsed().as_secs_f64(),
                if outcome.result.is_ok() { "ok" } else { "failed" }
            );
        }
        Some(outcome)
    }

    /// Cancel the in-flight request, returns whether there was one
    pub fn cancel(&mut self) -> bool {
        match self.job.take() {
            Some(job) => {
                job.cancelled.store(true, Ordering::SeqCst);
                log::info!("Translation #{} cancelled", job.id);
                true
            }
            None => false,
        }
    }
}
