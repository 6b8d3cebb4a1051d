//! Command implementations for configure-myst

pub mod configure;
