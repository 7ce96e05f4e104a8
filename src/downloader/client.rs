// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::downloader::traits::{Downloader, ProgressFn};
use crate::error::InstallError;

/// Plain HTTP(S) downloader. No retries and no request timeout.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ffi-installer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Downloader for HttpClient {
    async fn download(
        &self,
        url: &str,
        output_path: &Path,
        progress: ProgressFn<'_>,
    ) -> Result<(), InstallError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| InstallError::network(url, e))?;

        let total = response.content_length();
        debug!(url = %url, total_bytes = ?total, "Response received");

        let mut file = tokio::fs::File::create(output_path)
            .await
            .map_err(|e| InstallError::filesystem(output_path, e))?;

        let mut received: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| InstallError::network(url, e))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| InstallError::filesystem(output_path, e))?;
            received += chunk.len() as u64;
            progress(received, total);
        }

        file.flush()
            .await
            .map_err(|e| InstallError::filesystem(output_path, e))?;

        debug!(url = %url, path = %output_path.display(), bytes = received, "Download completed");
        Ok(())
    }
}
