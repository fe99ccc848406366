//! Classification of combined memory and swap headroom.
//!
//! Everything here is a pure function of its inputs; reading the OS and
//! printing the result live elsewhere.

pub mod perfdata;
pub mod status;
pub mod thresholds;

pub use perfdata::PerfDatum;
pub use status::{Status, StatusLevel};
pub use thresholds::Thresholds;

use crate::system::snapshot::{MemorySnapshot, SwapSnapshot};

pub const MEM_USED_LABEL: &str = "MEM USED";
pub const SWAP_USED_LABEL: &str = "SWAP USED";
pub const TOT_FREE_LABEL: &str = "TOT FREE";

pub const INVERTED_THRESHOLDS_MESSAGE: &str = "Warning must be greater than critical";
pub const ZERO_CAPACITY_MESSAGE: &str = "Combined memory and swap capacity is zero";
pub const UNKNOWN_STATE_MESSAGE: &str = "Unknown state";

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub status: Status,
    /// `None` when memory and swap together report no capacity.
    pub total_free_percent: Option<f64>,
    pub perf_data: [PerfDatum; 3],
}

/// Available RAM plus free swap, as a share of combined capacity.
///
/// Free never counts for more than the capacity it was read from, so the
/// result stays within 0..=100.
pub fn total_free_percent(memory: &MemorySnapshot, swap: &SwapSnapshot) -> Option<f64> {
    let capacity = u128::from(memory.total_bytes) + u128::from(swap.total_bytes);
    if capacity == 0 {
        return None;
    }
    let free = u128::from(memory.available_bytes.min(memory.total_bytes))
        + u128::from(swap.free_bytes.min(swap.total_bytes));
    Some(free as f64 / capacity as f64 * 100.0)
}

pub fn evaluate(
    memory: &MemorySnapshot,
    swap: &SwapSnapshot,
    thresholds: &Thresholds,
) -> Evaluation {
    let total_free = total_free_percent(memory, swap);
    tracing::debug!(total_free_percent = ?total_free, "derived total free");

    let perf_data = [
        PerfDatum::percent(MEM_USED_LABEL, memory.used_percent),
        PerfDatum::percent(SWAP_USED_LABEL, swap.used_percent),
        PerfDatum::percent(TOT_FREE_LABEL, total_free.unwrap_or(f64::NAN))
            .with_thresholds(thresholds.warn_percent, thresholds.crit_percent),
    ];

    let status = classify(total_free, thresholds);
    tracing::debug!(level = %status.level, reason = status.message(), "classified");

    Evaluation {
        status,
        total_free_percent: total_free,
        perf_data,
    }
}

/// First matching rule wins. Readings exactly on a threshold are not
/// classified and fall through to UNKNOWN.
pub fn classify(total_free: Option<f64>, thresholds: &Thresholds) -> Status {
    let warn = thresholds.warn_percent;
    let crit = thresholds.crit_percent;

    if thresholds.is_inverted() {
        return Status::with_message(StatusLevel::Unknown, INVERTED_THRESHOLDS_MESSAGE);
    }
    let Some(free) = total_free else {
        return Status::with_message(StatusLevel::Unknown, ZERO_CAPACITY_MESSAGE);
    };

    if free > warn {
        Status::new(StatusLevel::Ok)
    } else if free < warn && free > crit {
        Status::new(StatusLevel::Warning)
    } else if free < crit {
        Status::new(StatusLevel::Critical)
    } else {
        Status::with_message(StatusLevel::Unknown, UNKNOWN_STATE_MESSAGE)
    }
}
