pub mod cli;

use crate::core::{ConfigProvider, FailurePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_urls, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "trustfetch")]
#[command(about = "Fetch URLs concurrently over TLS, trusting an extra root from security/ca.pem")]
pub struct CliConfig {
    #[arg(short = 'v', help = "verbose")]
    pub verbose: bool,

    #[arg(short = 'q', help = "don't print the data")]
    pub quiet: bool,

    #[arg(long, help = "skip certificate verification")]
    pub insecure: bool,

    #[arg(long, help = "keep fetching the remaining urls after a failure")]
    pub keep_going: bool,

    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

impl CliConfig {
    /// Parses the process arguments, accepting `-insecure` style long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(cli::normalize_args(std::env::args()))
    }
}

impl ConfigProvider for CliConfig {
    fn urls(&self) -> &[String] {
        &self.urls
    }

    fn quiet(&self) -> bool {
        self.quiet
    }

    fn insecure(&self) -> bool {
        self.insecure
    }

    fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_urls("urls", &self.urls)
    }
}
