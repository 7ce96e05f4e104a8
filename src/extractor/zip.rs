// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::InstallError;
use crate::extractor::traits::Extractor;

pub struct ZipExtractor;

impl ZipExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| InstallError::filesystem(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), InstallError> {
    Ok(())
}

fn extract_all(archive_path: &Path, dest: &Path) -> Result<usize, InstallError> {
    let file = File::open(archive_path)
        .map_err(|e| InstallError::archive(archive_path, ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| InstallError::archive(archive_path, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| InstallError::archive(archive_path, e))?;
        let outpath = match entry.enclosed_name() {
            Some(path) => dest.join(path),
            None => {
                warn!(entry = %entry.name(), "Skipping archive entry outside destination");
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)
                .map_err(|e| InstallError::filesystem(&outpath, e))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InstallError::filesystem(parent, e))?;
            }
        }
        let mut outfile =
            File::create(&outpath).map_err(|e| InstallError::filesystem(&outpath, e))?;
        std::io::copy(&mut entry, &mut outfile)
            .map_err(|e| InstallError::archive(archive_path, ZipError::Io(e)))?;

        if let Some(mode) = entry.unix_mode() {
            set_mode(&outpath, mode)?;
        }

        debug!(path = %outpath.display(), "Extracted");
        written += 1;
    }

    Ok(written)
}

#[async_trait]
impl Extractor for ZipExtractor {
    async fn extract_zip(&self, archive_path: PathBuf, dest: PathBuf) -> Result<(), InstallError> {
        info!(archive = %archive_path.display(), dest = %dest.display(), "Unzipping archive");

        tokio::fs::create_dir_all(&dest)
            .await
            .map_err(|e| InstallError::filesystem(&dest, e))?;

        let archive_path_clone = archive_path.clone();
        let dest_clone = dest.clone();

        let files = tokio::task::spawn_blocking(move || extract_all(&archive_path_clone, &dest_clone))
            .await
            .map_err(|e| {
                InstallError::archive(&archive_path, ZipError::Io(std::io::Error::other(e)))
            })??;

        info!(archive = %archive_path.display(), files, "Unzipped archive");
        Ok(())
    }
}
