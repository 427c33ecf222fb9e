use crate::core::transport::TransportHandle;
use crate::core::{FailurePolicy, FetchOutcome, FetchRequest, Reporter, ResponseMeta};
use crate::utils::error::{FetchError, Result};
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Fans out one task per URL over a shared transport and joins them all.
pub struct ConcurrentFetcher<R: Reporter> {
    transport: TransportHandle,
    reporter: Arc<R>,
    policy: FailurePolicy,
}

impl<R: Reporter> ConcurrentFetcher<R> {
    pub fn new(transport: TransportHandle, reporter: Arc<R>) -> Self {
        Self {
            transport,
            reporter,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the number of tasks that completed successfully.
    ///
    /// There is no cap on in-flight tasks; every URL, duplicates included,
    /// gets its own request.
    pub async fn fetch_all(&self, urls: &[String]) -> Result<usize> {
        if urls.is_empty() {
            tracing::debug!("no urls to fetch");
            return Ok(0);
        }

        let mut tasks = JoinSet::new();
        for url in urls {
            let request = FetchRequest::new(url.clone());
            self.reporter.accessing(&request);

            let client = self.transport.client().clone();
            let reporter = Arc::clone(&self.reporter);
            tasks.spawn(fetch_one(client, request, reporter));
        }

        let mut completed = 0;
        let mut first_failure = None;

        while let Some(joined) = tasks.join_next().await {
            let result = joined
                .map_err(|e| FetchError::TaskError {
                    message: e.to_string(),
                })
                .and_then(|task_result| task_result);

            match result {
                Ok(()) => completed += 1,
                Err(err) => {
                    self.reporter.report_failure(&err);
                    match self.policy {
                        FailurePolicy::FailFast => {
                            tasks.abort_all();
                            return Err(err);
                        }
                        FailurePolicy::KeepGoing => {
                            first_failure.get_or_insert(err);
                        }
                    }
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(completed),
        }
    }
}

async fn fetch_one<R: Reporter>(client: Client, request: FetchRequest, reporter: Arc<R>) -> Result<()> {
    let response = client
        .get(&request.url)
        .send()
        .await
        .map_err(|source| FetchError::RequestError {
            url: request.url.clone(),
            source,
        })?;

    let meta = ResponseMeta::from(&response);
    reporter.response_received(&request, &meta);

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::BodyError {
            url: request.url.clone(),
            source,
        })?;

    reporter.report(&FetchOutcome {
        url: request.url,
        meta,
        body: body.to_vec(),
    });

    Ok(())
}
