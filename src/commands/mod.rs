//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and writes its output to the given writer.

pub mod about;
pub mod config;
pub mod contact;
pub mod open;
pub mod projects;
pub mod tags;

// Re-export execute functions for convenience
pub use about::execute as about;
pub use self::config::execute as config;
pub use contact::execute as contact;
pub use self::open::execute as open;
pub use projects::execute as projects;
pub use tags::execute as tags;
