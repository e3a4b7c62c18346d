mod loader;
mod model;

pub use loader::{FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, IgnoreSettings};
