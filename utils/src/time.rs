//! Time formatting helpers for voting windows.

use govlens_types::Timestamp;

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Describe a voting window relative to `now`, e.g. "ends in 2d 4h" or
/// "ended 3h 12m ago".
pub fn format_window(start: Timestamp, end: Timestamp, now: Timestamp) -> String {
    if now < start {
        format!("starts in {}", format_duration(now.elapsed_since(start)))
    } else if now <= end {
        format!("ends in {}", format_duration(now.elapsed_since(end)))
    } else {
        format!("ended {} ago", format_duration(end.elapsed_since(now)))
    }
}
