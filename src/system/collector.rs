use sysinfo::{MemoryRefreshKind, System};

use super::snapshot::{MemorySnapshot, SwapSnapshot};
use crate::error::CollectionError;
use crate::format::format_bytes;

/// Where memory and swap readings come from.
pub trait MetricsSource {
    fn read_memory(&mut self) -> Result<MemorySnapshot, CollectionError>;
    fn read_swap(&mut self) -> Result<SwapSnapshot, CollectionError>;
}

pub struct SysinfoSource {
    sys: System,
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        // Nothing is loaded until a read asks for it.
        SysinfoSource { sys: System::new() }
    }

    fn ensure_supported() -> Result<(), CollectionError> {
        if sysinfo::IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(CollectionError::UnsupportedPlatform {
                os: std::env::consts::OS,
            })
        }
    }
}

impl MetricsSource for SysinfoSource {
    fn read_memory(&mut self) -> Result<MemorySnapshot, CollectionError> {
        Self::ensure_supported()?;
        self.sys
            .refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

        // sysinfo reports zeros instead of failing when it cannot read the OS.
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(CollectionError::NoData { resource: "memory" });
        }

        let snapshot = MemorySnapshot::new(total, self.sys.available_memory());
        tracing::debug!(
            total = %format_bytes(snapshot.total_bytes),
            available = %format_bytes(snapshot.available_bytes),
            used_percent = snapshot.used_percent,
            "memory snapshot"
        );
        Ok(snapshot)
    }

    fn read_swap(&mut self) -> Result<SwapSnapshot, CollectionError> {
        Self::ensure_supported()?;
        self.sys
            .refresh_memory_specifics(MemoryRefreshKind::nothing().with_swap());

        let snapshot = SwapSnapshot::new(self.sys.total_swap(), self.sys.free_swap());
        tracing::debug!(
            total = %format_bytes(snapshot.total_bytes),
            free = %format_bytes(snapshot.free_bytes),
            used_percent = snapshot.used_percent,
            "swap snapshot"
        );
        Ok(snapshot)
    }
}
