// SPDX-License-Identifier: GPL-3.0-only
use std::io::Write;

/// Percentage of `received` over `total`, rounded to two decimals
pub fn percent_complete(received: u64, total: Option<u64>) -> Option<f64> {
    match total {
        Some(total) if total > 0 => {
            let percent = received as f64 / total as f64 * 100.0;
            Some((percent * 100.0).round() / 100.0)
        }
        _ => None,
    }
}

/// Console progress: rewrites a single line on stdout and ends it once the
/// transfer is complete.
pub fn print_progress(received: u64, total: Option<u64>) {
    let Some(percent) = percent_complete(received, total) else {
        return;
    };

    let mut stdout = std::io::stdout().lock();
    // Progress output is best effort
    let _ = write!(stdout, "{percent:.2}\r");
    if total == Some(received) {
        let _ = writeln!(stdout);
    }
    let _ = stdout.flush();
}
