// SPDX-License-Identifier: GPL-3.0-only
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::VersionDescriptor;
use crate::downloader::{Fetcher, ProgressFn};
use crate::error::InstallError;
use crate::extractor::Extractor;
use crate::targets::{all_targets, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Archive was downloaded and extracted
    Installed,
    /// Archive was already cached; nothing was done
    Skipped,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub installed: Vec<Target>,
    pub skipped: Vec<Target>,
}

pub struct InstallService {
    fetcher: Fetcher,
    extractor: Arc<dyn Extractor>,
    plugins_dir: PathBuf,
}

impl InstallService {
    pub fn new(fetcher: Fetcher, extractor: Arc<dyn Extractor>, plugins_dir: PathBuf) -> Self {
        Self {
            fetcher,
            extractor,
            plugins_dir,
        }
    }

    /// Fetch one target's archive and extract it if it was freshly downloaded.
    ///
    /// A cached archive is never re-extracted, even when its plugin directory
    /// is missing.
    pub async fn install_target(
        &self,
        release: &VersionDescriptor,
        target: &Target,
        progress: ProgressFn<'_>,
    ) -> Result<TargetOutcome, InstallError> {
        let url = release.archive_url(target);
        let archive_path = target.cache_path(self.fetcher.download_dir());

        if !self.fetcher.ensure_downloaded(&url, &archive_path, progress).await? {
            return Ok(TargetOutcome::Skipped);
        }

        let dest = target.destination(&self.plugins_dir);
        self.extractor.extract_zip(archive_path, dest).await?;

        Ok(TargetOutcome::Installed)
    }

    /// Install every target in order, stopping at the first failure
    pub async fn install_all(
        &self,
        release: &VersionDescriptor,
        progress: ProgressFn<'_>,
    ) -> Result<InstallSummary, InstallError> {
        info!(url = %release.url, tag = %release.tag, "Installing native plugins");

        let mut summary = InstallSummary::default();
        for target in all_targets() {
            match self.install_target(release, &target, &mut *progress).await? {
                TargetOutcome::Installed => summary.installed.push(target),
                TargetOutcome::Skipped => summary.skipped.push(target),
            }
        }

        Ok(summary)
    }
}
