// SPDX-License-Identifier: GPL-3.0-only
#[allow(clippy::module_inception)]
pub mod config;
pub mod version;

pub use config::Config;
pub use version::VersionDescriptor;
