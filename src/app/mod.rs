// VCScout - app/mod.rs
//
// Application layer: session state, corpus loading, and the background
// managers that carry search, chat, and health requests off the UI thread.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod chat;
pub mod corpus_mgr;
pub mod health;
pub mod search;
pub mod state;
