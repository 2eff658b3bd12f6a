//! Splice CLI library.
//!
//! Command implementations backing the `splice` binary: dumping, encoding and
//! verifying SPLICE drum pattern files.

pub mod commands;
pub mod logging;
