pub mod config;
pub mod files;
pub mod gitignore;
pub mod logging;
pub mod options;
pub mod templates;
