// Lookups and runtime services over the loaded settings
pub mod achievements;
pub mod channel_gate;
pub mod config_store;
