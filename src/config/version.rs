// SPDX-License-Identifier: GPL-3.0-only
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use std::path::Path;

use crate::error::InstallError;
use crate::targets::Target;

/// Everything outside the RFC 3986 unreserved set is escaped, `/` included.
const TAG_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Deserialize)]
struct VersionFile {
    ffi: VersionDescriptor,
}

/// Release the native archives are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionDescriptor {
    /// Base URL of the artifact host
    pub url: String,

    /// Release tag, used as a single path segment
    pub tag: String,
}

impl VersionDescriptor {
    pub fn new(url: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tag: tag.into(),
        }
    }

    /// Read the `[ffi]` table of a version file
    pub fn load(path: &Path) -> Result<Self, InstallError> {
        let contents = std::fs::read_to_string(path).map_err(|e| InstallError::Configuration {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, InstallError> {
        let file: VersionFile = toml::from_str(contents).map_err(|e| InstallError::Configuration {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(file.ffi)
    }

    pub fn escaped_tag(&self) -> String {
        utf8_percent_encode(&self.tag, TAG_ESCAPE).to_string()
    }

    /// `<url>/<escaped tag>/ffi-<platform>-<arch>.zip`
    pub fn archive_url(&self, target: &Target) -> String {
        format!("{}/{}/{}", self.url, self.escaped_tag(), target.archive_name())
    }
}
