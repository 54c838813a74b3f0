//! Basic metrics instrumentation for tracking submissions.
//!
//! Provides counters for the contact form lifecycle and duration tracking for
//! the HTTP requests it makes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for the contact form and its API client.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submit attempts, valid or not
    submissions_attempted_total: Arc<AtomicU64>,

    /// Submit attempts stopped by field validation
    submissions_rejected_total: Arc<AtomicU64>,

    /// Submissions the API accepted
    submissions_sent_total: Arc<AtomicU64>,

    /// Submissions that reached the network and failed
    submissions_failed_total: Arc<AtomicU64>,

    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_attempted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_sent_total: Arc::new(AtomicU64::new(0)),
            submissions_failed_total: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_submission_attempt(&self) {
        self.submissions_attempted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_sent(&self) {
        self.submissions_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_failed(&self) {
        self.submissions_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_attempted_total: self.submissions_attempted_total.load(Ordering::Relaxed),
            submissions_rejected_total: self.submissions_rejected_total.load(Ordering::Relaxed),
            submissions_sent_total: self.submissions_sent_total.load(Ordering::Relaxed),
            submissions_failed_total: self.submissions_failed_total.load(Ordering::Relaxed),
            http_requests_total: self.http_requests_total.load(Ordering::Relaxed),
            http_duration_avg_ms: self.http_duration_avg_ms(),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.submissions_attempted_total.store(0, Ordering::Relaxed);
        self.submissions_rejected_total.store(0, Ordering::Relaxed);
        self.submissions_sent_total.store(0, Ordering::Relaxed);
        self.submissions_failed_total.store(0, Ordering::Relaxed);
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub submissions_attempted_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_sent_total: u64,
    pub submissions_failed_total: u64,
    pub http_requests_total: u64,
    pub http_duration_avg_ms: f64,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "submissions: {} attempted, {} rejected, {} sent, {} failed | http: {} requests, {:.1}ms avg",
            self.submissions_attempted_total,
            self.submissions_rejected_total,
            self.submissions_sent_total,
            self.submissions_failed_total,
            self.http_requests_total,
            self.http_duration_avg_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.record_submission_attempt();
        metrics.record_submission_attempt();
        metrics.record_submission_rejected();
        metrics.record_submission_sent();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_attempted_total, 2);
        assert_eq!(summary.submissions_rejected_total, 1);
        assert_eq!(summary.submissions_sent_total, 1);
        assert_eq!(summary.submissions_failed_total, 0);
    }

    #[test]
    fn test_http_duration_average() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_duration_avg_ms(), 0.0);

        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(300));
        assert_eq!(metrics.http_duration_avg_ms(), 200.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let clone = metrics.clone();
        clone.record_submission_failed();
        assert_eq!(metrics.summary().submissions_failed_total, 1);

        metrics.reset();
        assert_eq!(clone.summary().submissions_failed_total, 0);
    }
}
