//! Scan statistics and human-scaled throughput reporting
//!
//! The summary line format here is stable output consumed by people and
//! scripts alike; change it only with care.

use std::fmt;
use std::time::Duration;

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a byte quantity for the summary line.
///
/// Scales into KB/MB/GB with one decimal once the value strictly exceeds
/// the corresponding power of 1024, and prints a truncated integer count
/// of bytes below that. Applied identically to totals and rates.
pub fn format_bytes(x: f64) -> String {
    if x > GB {
        format!("{:.1}GB", x / GB)
    } else if x > MB {
        format!("{:.1}MB", x / MB)
    } else if x > KB {
        format!("{:.1}KB", x / KB)
    } else {
        format!("{} bytes", x as u64)
    }
}

/// Outcome of a successful verification scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Total bytes read from the candidate file
    pub bytes_read: u64,
    /// Number of blocks compared
    pub blocks_read: u64,
    /// Wall clock from just before the first read to just after the last
    pub elapsed: Duration,
}

impl ScanReport {
    /// Read throughput in bytes per second; 0.0 when no time elapsed
    pub fn bytes_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_read as f64 / secs
        } else {
            0.0
        }
    }

    /// Blocks compared per second; 0.0 when no time elapsed
    pub fn blocks_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.blocks_read as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Verified {}, {}/sec ({} reads, {} reads/sec)",
            format_bytes(self.bytes_read as f64),
            format_bytes(self.bytes_per_sec()),
            self.blocks_read,
            self.blocks_per_sec() as u64,
        )
    }
}
