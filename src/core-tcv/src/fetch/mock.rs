//! Scripted transport for testing
//!
//! Serves canned responses per URL without touching the network, and records
//! every request it receives.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Method, StatusCode};

use crate::errors::Result;
use crate::fetch::{RawResponse, Transport};

/// Mock transport for testing
///
/// Each URL has a queue of responses, served in order. The last queued
/// response repeats for any further requests, so a single 429 entry means
/// "always rate limited". Unknown URLs answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, VecDeque<RawResponse>>>,
    requests: Mutex<Vec<(Method, String, Option<String>)>>,
}

impl MockTransport {
    /// Create a new mock with no routes
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_response(url, RawResponse::new(StatusCode::OK, body))
    }

    /// Queue an empty response with the given status
    pub fn with_status(self, url: &str, status: StatusCode) -> Self {
        self.with_response(url, RawResponse::new(status, ""))
    }

    /// Queue an arbitrary response
    pub fn with_response(self, url: &str, response: RawResponse) -> Self {
        self.add_response(url, response);
        self
    }

    /// Add a response to the URL's queue
    pub fn add_response(&self, url: &str, response: RawResponse) {
        self.routes
            .lock()
            .expect("mock routes lock poisoned")
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// URLs requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .iter()
            .map(|(_, url, _)| url.clone())
            .collect()
    }

    /// How many requests were sent to the URL
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .iter()
            .filter(|(_, requested, _)| requested == url)
            .count()
    }

    /// User-Agent header of the most recent request
    pub fn last_user_agent(&self) -> Option<String> {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .last()
            .and_then(|(_, _, agent)| agent.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, method: &Method, url: &str, headers: &HeaderMap) -> Result<RawResponse> {
        let agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .push((method.clone(), url.to_string(), agent));

        let mut routes = self.routes.lock().expect("mock routes lock poisoned");
        let response = match routes.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or_else(|| RawResponse::new(StatusCode::NOT_FOUND, "")))
    }
}
