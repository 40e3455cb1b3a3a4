//! Rendering for sweep output: plain-text tables, JSON reports and the
//! full-screen chart view. Nothing in here computes; it formats what
//! the core produced.

pub mod chart;
pub mod json;
pub mod table;
