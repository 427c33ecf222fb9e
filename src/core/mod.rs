pub mod engine;
pub mod fetcher;
pub mod reporter;
pub mod transport;
pub mod trust;

pub use crate::domain::model::{FailurePolicy, FetchOutcome, FetchRequest, ResponseMeta};
pub use crate::domain::ports::{ConfigProvider, Reporter};
pub use crate::utils::error::Result;
