// SPDX-License-Identifier: GPL-3.0-only
pub mod platform;

pub use platform::{all_targets, Arch, Platform, Target};
