//! Brave Fabric builder library exports for testing.

pub mod commands;
pub mod config;
pub mod device;
pub mod preflight;
pub mod process;
pub mod timing;
