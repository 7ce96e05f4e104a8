// SPDX-License-Identifier: GPL-3.0-only
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Version descriptor holding the release URL and tag
    pub version_file: PathBuf,

    /// Directory where downloaded archives are cached
    pub download_dir: PathBuf,

    /// Root under which each `ffi-<platform>-<arch>` plugin is extracted
    pub plugins_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load settings from the defaults with environment variable overrides
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(val) = lookup("FFI_VERSION_FILE") {
            config.version_file = PathBuf::from(val);
        }
        if let Some(val) = lookup("FFI_DOWNLOAD_DIR") {
            config.download_dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("FFI_PLUGINS_DIR") {
            config.plugins_dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("FFI_LOG_LEVEL") {
            config.log_level = val;
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from("version.toml"),
            download_dir: PathBuf::from("downloads~"),
            plugins_dir: PathBuf::from("Runtime/Plugins"),
            log_level: String::from("info"),
        }
    }
}
