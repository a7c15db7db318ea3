//! Command implementations

mod simple;

pub use simple::run_simple;
