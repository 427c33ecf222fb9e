use crate::core::fetcher::ConcurrentFetcher;
use crate::core::transport::{configure, TransportConfig};
use crate::core::trust::TrustStoreBuilder;
use crate::core::{ConfigProvider, Reporter};
use crate::utils::error::Result;
use std::sync::Arc;

/// One run: trust store, then transport, then every fetch.
pub struct FetchEngine<C: ConfigProvider, R: Reporter> {
    config: C,
    reporter: Arc<R>,
    trust: TrustStoreBuilder,
}

impl<C: ConfigProvider, R: Reporter> FetchEngine<C, R> {
    pub fn new(config: C, reporter: Arc<R>, trust: TrustStoreBuilder) -> Self {
        Self {
            config,
            reporter,
            trust,
        }
    }

    pub async fn run(&self) -> Result<usize> {
        let fetcher = self.prepare().inspect_err(|e| self.reporter.report_failure(e))?;

        // Request failures are reported by the fetcher itself.
        let completed = fetcher.fetch_all(self.config.urls()).await?;
        tracing::debug!(completed, "all fetch tasks finished");
        Ok(completed)
    }

    fn prepare(&self) -> Result<ConcurrentFetcher<R>> {
        let trust_store = self.trust.build()?;
        let transport = configure(&TransportConfig::new(trust_store, self.config.insecure()))?;

        Ok(ConcurrentFetcher::new(transport, Arc::clone(&self.reporter))
            .with_policy(self.config.failure_policy()))
    }
}
