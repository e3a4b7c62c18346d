pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;
pub mod scanner;

pub use counter::{ExtensionStats, FileStats, LineCounter, NO_EXTENSION, ScanResult};
pub use error::{LinecountError, Result};
pub use scanner::IgnoreConfig;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
