use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| FetchError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}

/// An empty list is valid; it makes for a run with nothing to fetch.
pub fn validate_urls(field_name: &str, urls: &[String]) -> Result<()> {
    urls.iter().try_for_each(|url| validate_url(field_name, url))
}
