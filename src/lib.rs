pub mod check;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod probe;
pub mod report;
pub mod system;
