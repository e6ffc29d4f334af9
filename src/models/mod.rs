// Data models
pub mod achievement;
pub mod settings;
