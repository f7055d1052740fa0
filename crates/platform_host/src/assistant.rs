//! Generative-text assistant contracts and in-process adapters.
//!
//! The terminal `ask` command and the assistant panel both send a free-text prompt plus a short
//! system instruction and expect free text back. The service is a black box: every failure mode
//! (missing credential, network error, timeout, malformed reply) is reported as an `Err(String)`
//! that the requesting app renders inline.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`AssistantService`].
pub type AssistantFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Request timeout applied when callers do not pick one.
pub const DEFAULT_ASSISTANT_TIMEOUT_MS: u32 = 20_000;

/// One prompt sent to the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    /// User-authored prompt text.
    pub prompt: String,
    /// Persona/system instruction sent alongside the prompt.
    pub system_instruction: String,
    /// Upper bound for the whole request, in milliseconds.
    pub timeout_ms: u32,
}

impl AssistantRequest {
    /// Creates a request with the default timeout.
    pub fn new(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            timeout_ms: DEFAULT_ASSISTANT_TIMEOUT_MS,
        }
    }
}

/// Host service for outbound generative-text requests.
pub trait AssistantService {
    /// Sends `request` and resolves with the reply text.
    fn generate<'a>(
        &'a self,
        request: &'a AssistantRequest,
    ) -> AssistantFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Assistant adapter for builds without a configured backend.
pub struct NoopAssistantService;

impl AssistantService for NoopAssistantService {
    fn generate<'a>(
        &'a self,
        _request: &'a AssistantRequest,
    ) -> AssistantFuture<'a, Result<String, String>> {
        Box::pin(async { Err("assistant service is not configured".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Assistant adapter that replays queued replies in order and records every request.
///
/// Once the queue is empty each call fails, which makes exhaustion visible in tests.
pub struct ScriptedAssistantService {
    replies: Rc<RefCell<VecDeque<Result<String, String>>>>,
    requests: Rc<RefCell<Vec<AssistantRequest>>>,
}

impl ScriptedAssistantService {
    /// Creates a service that answers with `replies` in order.
    pub fn new(replies: impl IntoIterator<Item = Result<String, String>>) -> Self {
        Self {
            replies: Rc::new(RefCell::new(replies.into_iter().collect())),
            requests: Rc::default(),
        }
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<AssistantRequest> {
        self.requests.borrow().clone()
    }
}

impl AssistantService for ScriptedAssistantService {
    fn generate<'a>(
        &'a self,
        request: &'a AssistantRequest,
    ) -> AssistantFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("scripted assistant has no replies left".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn scripted_service_replays_in_order_then_fails() {
        let service = ScriptedAssistantService::new([
            Ok("first".to_string()),
            Err("offline".to_string()),
        ]);
        let request = AssistantRequest::new("hi", "be brief");

        assert_eq!(block_on(service.generate(&request)), Ok("first".to_string()));
        assert_eq!(block_on(service.generate(&request)), Err("offline".to_string()));
        assert!(block_on(service.generate(&request)).is_err());
        assert_eq!(service.requests().len(), 3);
        assert_eq!(service.requests()[0].timeout_ms, DEFAULT_ASSISTANT_TIMEOUT_MS);
    }

    #[test]
    fn noop_service_reports_missing_backend() {
        let request = AssistantRequest::new("hi", "");
        let err = block_on(NoopAssistantService.generate(&request)).unwrap_err();
        assert!(err.contains("not configured"));
    }
}
