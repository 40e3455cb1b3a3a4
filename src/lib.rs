// Expose the same modules from the library crate so integration tests
// can reach them via `quadlab::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod render;
