//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::DeckPaths;
pub use settings::Settings;
