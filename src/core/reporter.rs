use crate::core::{FetchOutcome, FetchRequest, Reporter, ResponseMeta};
use crate::utils::error::FetchError;
use tracing::{dispatcher, Dispatch};

/// Writes outcomes through the logging handle it was built with, not through
/// whatever subscriber happens to be current on the calling thread.
#[derive(Clone)]
pub struct LogReporter {
    dispatch: Dispatch,
    quiet: bool,
}

impl LogReporter {
    pub fn new(dispatch: Dispatch, quiet: bool) -> Self {
        Self { dispatch, quiet }
    }
}

impl Reporter for LogReporter {
    fn accessing(&self, request: &FetchRequest) {
        dispatcher::with_default(&self.dispatch, || {
            tracing::info!(url = %request.url, "accessing url");
        });
    }

    fn response_received(&self, request: &FetchRequest, meta: &ResponseMeta) {
        dispatcher::with_default(&self.dispatch, || {
            tracing::info!(
                url = %request.url,
                status = meta.status.as_u16(),
                version = ?meta.version,
                content_length = ?meta.content_length,
                "response received"
            );
        });
    }

    fn report(&self, outcome: &FetchOutcome) {
        dispatcher::with_default(&self.dispatch, || {
            if self.quiet {
                tracing::info!(
                    url = %outcome.url,
                    length = outcome.body_length(),
                    "request body bytes"
                );
            } else {
                tracing::info!(
                    url = %outcome.url,
                    body = %String::from_utf8_lossy(&outcome.body),
                    "request body"
                );
            }
        });
    }

    fn report_failure(&self, error: &FetchError) {
        dispatcher::with_default(&self.dispatch, || {
            tracing::error!(
                error = %error,
                category = ?error.category(),
                suggestion = error.recovery_suggestion(),
                "fetch failed"
            );
        });
    }
}
