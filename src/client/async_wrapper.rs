//! Async wrapper around synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ContactClient;
use crate::error::{ContactApiError, ContactApiResult};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for submitting the contact form.
///
/// The form controller only talks to this trait, so tests can swap in a
/// scripted implementation.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<()>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &ContactClient {
        &self.client
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<()> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
