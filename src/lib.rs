pub mod installer;
pub mod manifest;
pub mod scaffold;
pub mod ui;

// Re-export commonly used types
pub use installer::{InstallOptions, Outcome};
pub use scaffold::Scaffold;
