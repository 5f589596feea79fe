// Persistence
pub mod settings;
