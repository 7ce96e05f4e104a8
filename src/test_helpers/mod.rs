// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::downloader::{Downloader, ProgressFn};
use crate::error::InstallError;
use crate::extractor::Extractor;

/// Build an in-memory ZIP archive from `(name, contents)` pairs
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    std::fs::write(path, build_zip(entries)).unwrap();
}

/// Downloader that writes a fixed body and remembers every requested URL
pub struct RecordingDownloader {
    body: Vec<u8>,
    requests: Mutex<Vec<String>>,
}

impl RecordingDownloader {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Downloader for RecordingDownloader {
    async fn download(
        &self,
        url: &str,
        output_path: &Path,
        progress: ProgressFn<'_>,
    ) -> Result<(), InstallError> {
        self.requests.lock().unwrap().push(url.to_string());
        std::fs::write(output_path, &self.body)
            .map_err(|e| InstallError::filesystem(output_path, e))?;
        let len = self.body.len() as u64;
        progress(len, Some(len));
        Ok(())
    }
}

/// Extractor that only records what it was asked to extract
#[derive(Default)]
pub struct RecordingExtractor {
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingExtractor {
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Extractor for RecordingExtractor {
    async fn extract_zip(&self, archive_path: PathBuf, dest: PathBuf) -> Result<(), InstallError> {
        self.calls.lock().unwrap().push((archive_path, dest));
        Ok(())
    }
}
