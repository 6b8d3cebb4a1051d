//! Common utilities shared across commands

pub mod fs;
