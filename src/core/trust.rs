use crate::utils::error::{FetchError, Result};
use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;
use std::fs;
use std::path::{Path, PathBuf};

pub const CA_CERT_DIR: &str = "security";
pub const CA_CERT_FILE: &str = "ca.pem";

const PEM_CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Platform trust anchors plus exactly one custom root.
#[derive(Debug, Clone)]
pub struct TrustStore {
    platform: Vec<CertificateDer<'static>>,
    custom: CertificateDer<'static>,
}

impl TrustStore {
    pub fn platform_anchors(&self) -> &[CertificateDer<'static>] {
        &self.platform
    }

    pub fn custom_anchor(&self) -> &CertificateDer<'static> {
        &self.custom
    }

    pub fn anchors(&self) -> impl Iterator<Item = &CertificateDer<'static>> {
        self.platform.iter().chain(std::iter::once(&self.custom))
    }

    pub fn anchor_count(&self) -> usize {
        self.platform.len() + 1
    }
}

#[derive(Debug, Clone)]
pub struct TrustStoreBuilder {
    ca_path: PathBuf,
    platform: Option<Vec<CertificateDer<'static>>>,
}

impl TrustStoreBuilder {
    pub fn new(ca_path: impl Into<PathBuf>) -> Self {
        Self {
            ca_path: ca_path.into(),
            platform: None,
        }
    }

    /// `<dir>/security/ca.pem`
    pub fn for_dir(dir: &Path) -> Self {
        Self::new(dir.join(CA_CERT_DIR).join(CA_CERT_FILE))
    }

    pub fn from_working_dir() -> Result<Self> {
        let dir = std::env::current_dir().map_err(FetchError::WorkingDirError)?;
        Ok(Self::for_dir(&dir))
    }

    /// Use these anchors instead of the ones installed on the host.
    pub fn with_platform_anchors(mut self, anchors: Vec<CertificateDer<'static>>) -> Self {
        self.platform = Some(anchors);
        self
    }

    pub fn build(&self) -> Result<TrustStore> {
        let candidates = match &self.platform {
            Some(anchors) => anchors.clone(),
            None => load_platform_anchors()?,
        };

        // Only keep what rustls would accept, so the transport builder
        // never trips over a platform certificate later.
        let mut roots = RootCertStore::empty();
        let mut platform = Vec::with_capacity(candidates.len());
        for cert in candidates {
            match roots.add(cert.clone()) {
                Ok(()) => platform.push(cert),
                Err(e) => tracing::debug!(error = %e, "skipping unusable platform certificate"),
            }
        }

        let custom = self.load_custom_anchor()?;
        roots
            .add(custom.clone())
            .map_err(|e| FetchError::CertificateParseError {
                path: self.ca_path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            platform = platform.len(),
            ca_path = %self.ca_path.display(),
            "trust store built"
        );

        Ok(TrustStore { platform, custom })
    }

    fn load_custom_anchor(&self) -> Result<CertificateDer<'static>> {
        let raw = fs::read(&self.ca_path).map_err(|source| FetchError::CertificateReadError {
            path: self.ca_path.clone(),
            source,
        })?;

        let parse_error = |reason: String| FetchError::CertificateParseError {
            path: self.ca_path.clone(),
            reason,
        };

        let blocks = pem::parse_many(&raw).map_err(|e| parse_error(e.to_string()))?;
        let mut certs = blocks
            .into_iter()
            .filter(|block| block.tag() == PEM_CERTIFICATE_TAG);

        let cert = certs
            .next()
            .ok_or_else(|| parse_error("no CERTIFICATE block found".to_string()))?;
        if certs.next().is_some() {
            return Err(parse_error(
                "expected exactly one CERTIFICATE block".to_string(),
            ));
        }

        Ok(CertificateDer::from(cert.into_contents()))
    }
}

fn load_platform_anchors() -> Result<Vec<CertificateDer<'static>>> {
    let loaded = rustls_native_certs::load_native_certs();

    if loaded.certs.is_empty() && !loaded.errors.is_empty() {
        let message = loaded
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::PlatformCertsError { message });
    }

    for error in &loaded.errors {
        tracing::warn!(error = %error, "some platform certificates could not be read");
    }

    Ok(loaded.certs)
}
