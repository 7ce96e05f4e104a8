// SPDX-License-Identifier: GPL-3.0-only
pub mod client;
pub mod fetcher;
pub mod progress;
pub mod traits;

pub use client::HttpClient;
pub use fetcher::Fetcher;
pub use progress::print_progress;
pub use traits::{Downloader, ProgressFn};
