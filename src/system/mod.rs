pub mod collector;
pub mod snapshot;

pub use collector::{MetricsSource, SysinfoSource};
pub use snapshot::{MemorySnapshot, SwapSnapshot};
