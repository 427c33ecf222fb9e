use crate::core::trust::TrustStore;
use crate::utils::error::{FetchError, Result};
use reqwest::{Certificate, Client};

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub trust_store: TrustStore,
    pub skip_verification: bool,
}

impl TransportConfig {
    pub fn new(trust_store: TrustStore, skip_verification: bool) -> Self {
        Self {
            trust_store,
            skip_verification,
        }
    }
}

/// Shared HTTP client for one run. Connections are released when the handle
/// is dropped.
#[derive(Debug)]
pub struct TransportHandle {
    client: Client,
    skip_verification: bool,
    anchors: usize,
}

impl TransportHandle {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn skip_verification(&self) -> bool {
        self.skip_verification
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors
    }
}

impl Drop for TransportHandle {
    fn drop(&mut self) {
        tracing::debug!("transport closed");
    }
}

/// Only the trust store's anchors are trusted; the client's bundled roots
/// are turned off. HTTP/2 is negotiated through ALPN where the server offers it.
pub fn configure(config: &TransportConfig) -> Result<TransportHandle> {
    let mut builder = Client::builder()
        .use_rustls_tls()
        .tls_built_in_root_certs(false)
        .danger_accept_invalid_certs(config.skip_verification);

    for anchor in config.trust_store.anchors() {
        let cert = Certificate::from_der(anchor.as_ref()).map_err(FetchError::TransportError)?;
        builder = builder.add_root_certificate(cert);
    }

    let client = builder.build().map_err(FetchError::TransportError)?;

    if config.skip_verification {
        tracing::warn!("certificate verification disabled");
    }
    tracing::debug!(
        anchors = config.trust_store.anchor_count(),
        "transport configured"
    );

    Ok(TransportHandle {
        client,
        skip_verification: config.skip_verification,
        anchors: config.trust_store.anchor_count(),
    })
}
