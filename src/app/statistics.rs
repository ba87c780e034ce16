//! End-of-run statistics.

use log::{info, warn};
use std::path::Path;
use strum::IntoEnumIterator;

use crate::error_handling::{FilterStats, RejectReason};

/// Logs the summary line, the output destinations and the per-reason rejection counts.
///
/// `outputs` pairs each written file with its format label (`TXT`, `JSON`, `CSV`).
pub fn print_final_statistics(
    stats: &FilterStats,
    custom_filter: bool,
    outputs: &[(&Path, &str)],
    elapsed_seconds: f64,
) {
    let accepted = stats.accepted();
    if accepted == 0 {
        warn!("No urls found");
    } else if custom_filter {
        info!("{} urls processed", accepted);
    } else {
        info!("{} unique urls found", accepted);
    }

    if accepted > 0 {
        for (path, format) in outputs {
            info!("Urls written to {} ({})", path.display(), format);
        }
    }

    print_rejection_statistics(stats);
    info!("Elapsed time: {:.3}s", elapsed_seconds);
}

/// Logs how many lines each check dropped.
pub fn print_rejection_statistics(stats: &FilterStats) {
    let total = stats.total_rejections();
    if total == 0 {
        return;
    }

    info!("Rejected lines ({} total):", total);
    for reason in RejectReason::iter() {
        let count = stats.get_rejection_count(reason);
        if count > 0 {
            info!("   {}: {}", reason.as_str(), count);
        }
    }
    if stats.upgrades() > 0 {
        info!("   https variants kept alongside http: {}", stats.upgrades());
    }
}
