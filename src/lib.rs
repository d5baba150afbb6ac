pub mod dataset;
pub mod digest;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod storage;

pub use dataset::{Dataset, NBA_ALL_ELO_DESTINATION, NBA_ALL_ELO_URL};
pub use error::{FetchError, Result};
pub use fetcher::{fetch_dataset, FetchReport, Fetcher, COMPLETION_NOTICE};
