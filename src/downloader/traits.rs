// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::path::Path;

use crate::error::InstallError;

/// Called after every received chunk with `(bytes_received, total_bytes)`.
/// `total_bytes` is `None` when the server did not announce a length.
pub type ProgressFn<'a> = &'a mut (dyn FnMut(u64, Option<u64>) + Send);

#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch `url` into `output_path`, reporting each chunk to `progress`
    async fn download(
        &self,
        url: &str,
        output_path: &Path,
        progress: ProgressFn<'_>,
    ) -> Result<(), InstallError>;
}
