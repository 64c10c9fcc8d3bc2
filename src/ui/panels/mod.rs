// VCScout - ui/panels/mod.rs

pub mod about;
pub mod chat;
pub mod detail;
pub mod industries;
pub mod results;
