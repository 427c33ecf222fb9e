use crate::domain::model::{FailurePolicy, FetchOutcome, FetchRequest, ResponseMeta};
use crate::utils::error::FetchError;

/// Sink for per-request progress. Called concurrently from every fetch task.
pub trait Reporter: Send + Sync + 'static {
    fn accessing(&self, request: &FetchRequest);
    fn response_received(&self, request: &FetchRequest, meta: &ResponseMeta);
    fn report(&self, outcome: &FetchOutcome);
    fn report_failure(&self, error: &FetchError);
}

pub trait ConfigProvider: Send + Sync {
    fn urls(&self) -> &[String];
    fn quiet(&self) -> bool;
    fn insecure(&self) -> bool;
    fn failure_policy(&self) -> FailurePolicy;
}
