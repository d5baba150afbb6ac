use std::io::{self, Read, Write};
use std::path::Path;

use reqwest::blocking::{Client, Response};

use crate::error::{FetchError, Result};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Blocking client with no overall request timeout; the body can take as
/// long as it takes.
pub fn client() -> Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(FetchError::Client)
}

/// Sends the GET and rejects any non-2xx response before the body is read.
pub fn get(client: &Client, url: &str) -> Result<Response> {
    log::info!("Downloading from {}", url);

    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Download failed with status: {}", status);
        return Err(FetchError::Transfer {
            url: url.to_string(),
            status,
        });
    }

    log::debug!(
        "Response {} with content length {:?}",
        status,
        response.content_length()
    );
    Ok(response)
}

/// Copies `body` into `sink` chunk by chunk. Read failures are reported
/// against `url`, write failures against `path`.
pub fn stream_body<R: Read, W: Write>(
    body: &mut R,
    sink: &mut W,
    url: &str,
    path: &Path,
) -> Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let n = match body.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FetchError::Body {
                    url: url.to_string(),
                    source,
                })
            }
        };

        sink.write_all(&buf[..n])
            .map_err(|e| FetchError::storage(path, e))?;
        total += n as u64;
    }

    sink.flush().map_err(|e| FetchError::storage(path, e))?;
    Ok(total)
}
