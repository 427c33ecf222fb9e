pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::{
    engine::FetchEngine,
    fetcher::ConcurrentFetcher,
    reporter::LogReporter,
    transport::{configure, TransportConfig, TransportHandle},
    trust::{TrustStore, TrustStoreBuilder},
};
pub use utils::error::{FetchError, Result};
