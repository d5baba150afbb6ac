use std::path::PathBuf;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, Result};

pub const NBA_ALL_ELO_URL: &str =
    "https://raw.githubusercontent.com/fivethirtyeight/data/master/nba-elo/nbaallelo.csv";

/// Resolved against the working directory of the process.
pub const NBA_ALL_ELO_DESTINATION: &str = "../data/nba_all_elo.csv";

/// A remote file and the local path it is saved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub url: String,
    pub destination: PathBuf,
}

impl Dataset {
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
        }
    }

    /// FiveThirtyEight's complete NBA Elo history.
    pub fn nba_all_elo() -> Self {
        Self::new(NBA_ALL_ELO_URL, NBA_ALL_ELO_DESTINATION)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(FetchError::InvalidDataset("url is empty".to_string()));
        }

        let url = Url::parse(&self.url)
            .map_err(|e| FetchError::InvalidDataset(format!("url {:?}: {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidDataset(format!(
                "unsupported url scheme: {}",
                url.scheme()
            )));
        }

        if self.destination.file_name().is_none() {
            return Err(FetchError::InvalidDataset(format!(
                "destination {:?} does not name a file",
                self.destination
            )));
        }

        Ok(())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::nba_all_elo()
    }
}
