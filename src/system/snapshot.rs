#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_percent: f64,
}

impl MemorySnapshot {
    /// Used percent is derived as `(total - available) / total`, 0 for an empty pool.
    pub fn new(total_bytes: u64, available_bytes: u64) -> Self {
        MemorySnapshot {
            total_bytes,
            available_bytes,
            used_percent: used_percent(total_bytes, available_bytes),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapSnapshot {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

impl SwapSnapshot {
    pub fn new(total_bytes: u64, free_bytes: u64) -> Self {
        SwapSnapshot {
            total_bytes,
            free_bytes,
            used_percent: used_percent(total_bytes, free_bytes),
        }
    }
}

fn used_percent(total: u64, unused: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(unused);
    used as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_used_percent_from_available() {
        let mem = MemorySnapshot::new(1000, 250);
        assert!((mem.used_percent - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_swap_reports_zero_used() {
        let swap = SwapSnapshot::new(0, 0);
        assert_eq!(swap.used_percent, 0.0);
    }

    #[test]
    fn free_above_total_clamps_to_zero_used() {
        let swap = SwapSnapshot::new(100, 150);
        assert_eq!(swap.used_percent, 0.0);
    }
}
