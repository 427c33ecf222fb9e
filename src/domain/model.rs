use reqwest::{StatusCode, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response head, captured before the body is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub version: Version,
    pub content_length: Option<u64>,
}

impl From<&reqwest::Response> for ResponseMeta {
    fn from(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            version: response.version(),
            content_length: response.content_length(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub url: String,
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
}

impl FetchOutcome {
    pub fn body_length(&self) -> usize {
        self.body.len()
    }
}

/// What the orchestrator does when one fetch task fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure, abort the remaining tasks and stop.
    #[default]
    FailFast,
    /// Report every failure and join every task before stopping.
    KeepGoing,
}
