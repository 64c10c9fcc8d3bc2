// VCScout - platform/mod.rs
//
// Platform abstraction layer: configuration files, directories, and the
// network backend.
// Must NOT depend on: app, ui.

pub mod api;
pub mod config;
