use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use varnan_site::client::AsyncContactClient;
use varnan_site::error::{ContactApiError, ContactApiResult};
use varnan_site::models::ContactSubmission;

/// Scripted answer for one submit call.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Created,
    Status { status: u16, message: Option<String> },
    UnexpectedStatus(u16),
    Network,
}

impl MockResponse {
    fn into_result(self) -> ContactApiResult<()> {
        match self {
            MockResponse::Created => Ok(()),
            MockResponse::Status { status, message } => {
                Err(ContactApiError::ApiError { status, message })
            }
            MockResponse::UnexpectedStatus(status) => {
                Err(ContactApiError::UnexpectedStatus(status))
            }
            MockResponse::Network => Err(ContactApiError::HttpError(
                "Connection failed".to_string(),
            )),
        }
    }
}

/// Mock contact client for testing.
///
/// Answers from a queue of scripted responses (falling back to `Created`)
/// and records every submission it receives. When gated, each call waits
/// for [`MockContactClient::release`] before answering.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactClient {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockContactClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            submissions: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// A client whose calls block until released.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn respond_with(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Let one held call answer.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Default for MockContactClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<()> {
        self.submissions.lock().unwrap().push(submission.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Created);
        response.into_result()
    }
}
