// SPDX-License-Identifier: GPL-3.0-only
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::downloader::traits::{Downloader, ProgressFn};
use crate::error::InstallError;

/// Downloads archives into a cache directory, skipping any file already there.
pub struct Fetcher {
    downloader: Arc<dyn Downloader>,
    download_dir: PathBuf,
}

impl Fetcher {
    pub fn new(downloader: Arc<dyn Downloader>, download_dir: PathBuf) -> Self {
        Self {
            downloader,
            download_dir,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Returns `true` when `local_path` was freshly downloaded and `false`
    /// when it already existed. Existence is the only check made.
    pub async fn ensure_downloaded(
        &self,
        url: &str,
        local_path: &Path,
        progress: ProgressFn<'_>,
    ) -> Result<bool, InstallError> {
        if !self.download_dir.is_dir() {
            info!(dir = %self.download_dir.display(), "Download directory does not exist, creating it");
            tokio::fs::create_dir_all(&self.download_dir)
                .await
                .map_err(|e| InstallError::filesystem(&self.download_dir, e))?;
        }

        if local_path.is_file() {
            info!(path = %local_path.display(), "Archive exists, skipping download");
            return Ok(false);
        }

        info!(url = %url, "Downloading archive");
        self.downloader.download(url, local_path, progress).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingDownloader;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_download_dir() {
        let temp_dir = TempDir::new().unwrap();
        let download_dir = temp_dir.path().join("downloads~");
        let downloader = Arc::new(RecordingDownloader::new(b"archive".to_vec()));
        let fetcher = Fetcher::new(downloader.clone(), download_dir.clone());

        let local_path = download_dir.join("ffi-linux-x86_64.zip");
        let fresh = fetcher
            .ensure_downloaded("http://host/v1/ffi-linux-x86_64.zip", &local_path, &mut |_, _| {})
            .await
            .unwrap();

        assert!(fresh);
        assert!(download_dir.is_dir());
        assert_eq!(std::fs::read(&local_path).unwrap(), b"archive");
        assert_eq!(downloader.requests(), vec!["http://host/v1/ffi-linux-x86_64.zip".to_string()]);
    }

    #[tokio::test]
    async fn test_existing_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let download_dir = temp_dir.path().to_path_buf();
        let local_path = download_dir.join("ffi-macos-arm64.zip");
        std::fs::write(&local_path, b"stale but cached").unwrap();

        let downloader = Arc::new(RecordingDownloader::new(b"new".to_vec()));
        let fetcher = Fetcher::new(downloader.clone(), download_dir);

        let fresh = fetcher
            .ensure_downloaded("http://host/v1/ffi-macos-arm64.zip", &local_path, &mut |_, _| {})
            .await
            .unwrap();

        assert!(!fresh);
        assert!(downloader.requests().is_empty());
        assert_eq!(std::fs::read(&local_path).unwrap(), b"stale but cached");
    }

    #[tokio::test]
    async fn test_download_error_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/ffi-windows-arm64.zip")
            .with_status(500)
            .create_async()
            .await;

        let client = Arc::new(crate::downloader::HttpClient::new().unwrap());
        let fetcher = Fetcher::new(client, temp_dir.path().to_path_buf());
        let local_path = temp_dir.path().join("ffi-windows-arm64.zip");
        let url = format!("{}/v1/ffi-windows-arm64.zip", server.url());

        let result = fetcher.ensure_downloaded(&url, &local_path, &mut |_, _| {}).await;

        assert!(matches!(result, Err(InstallError::Network { .. })));
        mock.assert_async().await;
    }
}
