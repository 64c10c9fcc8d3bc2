// VCScout - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app.

pub mod chat;
pub mod corpus;
pub mod model;
pub mod search;
