//! Core module tree: formula pipeline (token -> lexer -> parser ->
//! evaluation) and the numeric side (interval, sampling, quadrature,
//! sweeps). Everything here is pure data in, pure data out; rendering
//! lives elsewhere.

pub mod ast;
pub mod error;
pub mod function;
pub mod interval;
pub mod lexer;
pub mod parser;
pub mod quadrature;
pub mod sample;
pub mod sweep;
pub mod token;
#[macro_use]
pub mod debug; // gated debug logging (QUADLAB_DEBUG=1) provides debug_log! macro
