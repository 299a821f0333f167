pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod script;
// reports is a binary module (chart rendering and console output live with main).
