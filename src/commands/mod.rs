pub mod compare;
pub mod prompt;
pub mod rect;
pub mod session;
pub mod simpson;
pub mod trapezoid;
