// SPDX-License-Identifier: GPL-3.0-only
mod config;
mod downloader;
mod error;
mod extractor;
mod installer;
mod logging;
mod targets;
#[cfg(test)]
mod test_helpers;

use std::sync::Arc;
use tracing::info;

use config::{Config, VersionDescriptor};
use downloader::{print_progress, Downloader, Fetcher, HttpClient};
use extractor::ZipExtractor;
use installer::InstallService;
use logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    setup_logging(&config.log_level)?;

    info!("Starting ffi-installer v{}", env!("CARGO_PKG_VERSION"));

    // Nothing touches the network before the version file is read
    let release = VersionDescriptor::load(&config.version_file)?;

    let downloader: Arc<dyn Downloader> = Arc::new(HttpClient::new()?);
    let service = InstallService::new(
        Fetcher::new(downloader, config.download_dir.clone()),
        Arc::new(ZipExtractor::new()),
        config.plugins_dir.clone(),
    );

    let mut progress = print_progress;
    let summary = service.install_all(&release, &mut progress).await?;

    info!(
        installed = summary.installed.len(),
        skipped = summary.skipped.len(),
        plugins_dir = %config.plugins_dir.display(),
        "Native plugins up to date"
    );
    Ok(())
}
