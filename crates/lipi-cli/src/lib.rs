//! Command implementations behind `lipitool`.

pub mod commands;
