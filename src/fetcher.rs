use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dataset::Dataset;
use crate::digest::HashingWriter;
use crate::download;
use crate::error::{FetchError, Result};
use crate::storage::AtomicFile;

pub const COMPLETION_NOTICE: &str = "Download ready.";

/// Outcome of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    pub url: String,
    pub destination: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

pub struct Fetcher {
    dataset: Dataset,
}

impl Fetcher {
    pub fn new(dataset: Dataset) -> Result<Self> {
        dataset.validate()?;
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Downloads the dataset and replaces the destination with it.
    ///
    /// Nothing on disk changes unless the whole body was received and
    /// written.
    pub fn fetch(&self) -> Result<FetchReport> {
        let url = self.dataset.url.as_str();
        let destination = self.dataset.destination.as_path();

        let client = download::client()?;
        let mut response = download::get(&client, url)?;

        let file = AtomicFile::create(destination)?;
        let mut writer = HashingWriter::new(file);
        download::stream_body(&mut response, &mut writer, url, destination)?;

        let (file, bytes, sha256) = writer.finish();
        file.commit()?;

        log::info!("Download completed: {} bytes", bytes);
        Ok(FetchReport {
            url: url.to_string(),
            destination: destination.to_path_buf(),
            bytes,
            sha256,
        })
    }

    /// Fetches, then writes the completion notice to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<FetchReport> {
        let report = self.fetch()?;

        writeln!(out, "{}", COMPLETION_NOTICE)
            .and_then(|_| out.flush())
            .map_err(FetchError::Notice)?;

        Ok(report)
    }
}

/// Downloads `url` to `destination` without printing anything.
pub fn fetch_dataset(url: &str, destination: &Path) -> Result<FetchReport> {
    Fetcher::new(Dataset::new(url, destination))?.fetch()
}
