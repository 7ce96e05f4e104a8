// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Linux,
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Armv7,
    Arm64,
    SimArm64,
    X86_64,
}

impl Platform {
    /// Platforms in the order they are installed
    pub const ALL: [Platform; 5] = [
        Platform::Android,
        Platform::Ios,
        Platform::Macos,
        Platform::Linux,
        Platform::Windows,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }

    /// Architectures a prebuilt archive is published for
    pub fn architectures(&self) -> &'static [Arch] {
        match self {
            Platform::Android => &[Arch::Armv7, Arch::Arm64, Arch::X86_64],
            Platform::Ios => &[Arch::Arm64, Arch::SimArm64],
            Platform::Linux => &[Arch::X86_64],
            Platform::Macos | Platform::Windows => &[Arch::Arm64, Arch::X86_64],
        }
    }
}

impl Arch {
    pub fn name(&self) -> &'static str {
        match self {
            Arch::Armv7 => "armv7",
            Arch::Arm64 => "arm64",
            Arch::SimArm64 => "sim-arm64",
            Arch::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single platform/architecture pair with its own archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub platform: Platform,
    pub arch: Arch,
}

impl Target {
    pub fn new(platform: Platform, arch: Arch) -> Self {
        Self { platform, arch }
    }

    /// Name of the plugin directory, e.g. `ffi-android-arm64`
    pub fn plugin_name(&self) -> String {
        format!("ffi-{}-{}", self.platform, self.arch)
    }

    /// Name of the published archive, e.g. `ffi-android-arm64.zip`
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.plugin_name())
    }

    pub fn cache_path(&self, download_dir: &Path) -> PathBuf {
        download_dir.join(self.archive_name())
    }

    pub fn destination(&self, plugins_dir: &Path) -> PathBuf {
        plugins_dir.join(self.plugin_name())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.arch)
    }
}

/// Every target, platform by platform
pub fn all_targets() -> Vec<Target> {
    Platform::ALL
        .iter()
        .flat_map(|platform| {
            platform
                .architectures()
                .iter()
                .map(move |arch| Target::new(*platform, *arch))
        })
        .collect()
}
