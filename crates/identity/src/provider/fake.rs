//! Deterministic capability fakes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ResolverError;

use super::traits::{EntityRecognizer, EntitySpan, GenerationRequest, TextGenerator};

/// An entity recognizer that returns fixed spans, or always fails.
pub struct FakeEntityRecognizer {
    spans: Option<Vec<EntitySpan>>,
    calls: AtomicUsize,
}

impl FakeEntityRecognizer {
    /// Return the given spans on every call.
    pub fn with_spans(spans: Vec<EntitySpan>) -> Self {
        Self {
            spans: Some(spans),
            calls: AtomicUsize::new(0),
        }
    }

    /// Return one `ORG` span per name.
    pub fn with_orgs(orgs: &[&str]) -> Self {
        Self::with_spans(orgs.iter().map(|o| EntitySpan::org(*o)).collect())
    }

    /// Fail every call with a capability error.
    pub fn failing() -> Self {
        Self {
            spans: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityRecognizer for FakeEntityRecognizer {
    fn id(&self) -> &'static str {
        "FAKE_NER"
    }

    async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.spans
            .clone()
            .ok_or_else(|| ResolverError::capability("FAKE_NER", "model unavailable"))
    }
}

/// A text generator that returns a fixed response, or always fails.
pub struct FakeTextGenerator {
    response: Option<String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl FakeTextGenerator {
    /// Return `response` on every call.
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Fail every call with a timeout.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    fn id(&self) -> &'static str {
        "FAKE_GENERATIVE"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.response.clone().ok_or_else(|| ResolverError::Timeout {
            capability: "FAKE_GENERATIVE".to_string(),
        })
    }
}
